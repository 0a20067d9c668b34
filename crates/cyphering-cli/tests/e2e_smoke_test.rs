use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use cyphering_cli::{Args, run};

const TEMPLATES: [&str; 7] = [
    "nodes.create",
    "nodes.drop",
    "nodes.index.create",
    "nodes.index.drop",
    "nodes.constraint.create",
    "nodes.constraint.drop",
    "rels.create",
];

/// Collects all .yaml files from a directory
fn collect_yaml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("yaml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo models are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn render_args(model: &Path, template: &str, output: &Path) -> Args {
    Args {
        model: Some(model.to_string_lossy().to_string()),
        template: Some(template.to_string()),
        output: Some(output.to_string_lossy().to_string()),
        search_path: None,
        config: None,
        log_level: "off".to_string(),
        list_templates: false,
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_yaml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        for template in TEMPLATES {
            let output_filename = format!(
                "{}.{template}.cypher",
                demo_path.file_stem().unwrap().to_string_lossy()
            );
            let output_path = temp_dir.path().join(output_filename);

            if let Err(e) = run(&render_args(demo_path, template, &output_path)) {
                failed_demos.push((demo_path.clone(), template, e));
            }
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, template, err) in &failed_demos {
            eprintln!("  - {} ({template}): {}", path.display(), err);
        }
        panic!("{} valid demo render(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_yaml_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.cypher",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&render_args(demo_path, "nodes.create", &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_search_path_overrides_builtin() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let templates_dir = temp_dir.path().join("templates");
    fs::create_dir(&templates_dir).unwrap();
    fs::write(
        templates_dir.join("nodes.create.hbs"),
        "{{#each model.nodes}}// {{alias}}\n{{/each}}",
    )
    .unwrap();

    let output_path = temp_dir.path().join("out.cypher");
    let mut args = render_args(
        &demos_path().join("social.yaml"),
        "nodes.create",
        &output_path,
    );
    args.search_path = Some(templates_dir.to_string_lossy().to_string());

    run(&args).expect("render with search path");

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.starts_with("// person"));
}

#[test]
fn e2e_unknown_template_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.cypher");

    let args = render_args(&demos_path().join("social.yaml"), "rels.drop", &output_path);

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
