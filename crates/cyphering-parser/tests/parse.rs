use cyphering_core::graph::{Direction, Mode};
use cyphering_parser::{error::ErrorCode, parse};

fn error_codes(source: &str) -> Vec<ErrorCode> {
    let err = parse(source).expect_err("Expected parse to fail");
    err.diagnostics().iter().filter_map(|d| d.code()).collect()
}

#[test]
fn test_person_company_model() {
    let source = r#"
nodes:
  - label: Person
    mode: merge
    attr:
      key:
        name: ${entry}.name
      on_create:
        created: timestamp()
      on_update:
        seen: timestamp()
  - label: Company
    alias: company
    mode: MATCH
    attr:
      key:
        name: ${entry}.company
rels:
  - label: WORKS_AT
    alias: works_at
    mode: create
    reltype: company <- person
    attr:
      on_create:
        since: ${entry}.since
"#;

    let model = parse(source).expect("Failed to parse");

    assert_eq!(model.nodes().len(), 2);
    assert_eq!(model.rels().len(), 1);

    let person = model.get("person").expect("default alias");
    assert_eq!(person.label(), "Person");
    assert_eq!(person.write_mode(), Ok(Mode::Merge));
    assert_eq!(person.attributes().key().expanded()["name"], "entry.name");
    assert!(person.depends_on().is_empty());

    let company = model.get("company").expect("explicit alias");
    assert!(company.has_mode(Mode::Match));

    let works_at = &model.rels()[0];
    let ends = works_at.reltype().expect("relationship type").ends();
    assert_eq!(ends.source(), "person");
    assert_eq!(ends.target(), "company");
    assert_eq!(ends.direction(), Direction::Directed);
    assert_eq!(
        works_at.depends_on().iter().collect::<Vec<_>>(),
        vec!["company", "person"]
    );
}

#[test]
fn test_node_dependencies_from_macros() {
    let source = r#"
nodes:
  - label: Team
    mode: merge
  - label: Player
    mode: create
    attr:
      on_create:
        team: ${team}.name
    index:
      - CREATE INDEX FOR (${this}:Player) ON (${this}.name)
"#;

    let model = parse(source).expect("Failed to parse");
    let player = model.get("player").unwrap();

    assert!(player.depends_on().contains("team"));
    assert_eq!(
        player.index().expanded()[0],
        "CREATE INDEX FOR (player:Player) ON (player.name)"
    );
}

#[test]
fn test_numeric_values_keep_their_spelling() {
    let source = r#"
nodes:
  - label: Item
    mode: create
    attr:
      on_create:
        weight: 1.0
        hex: 0x10
        big: 1.50
"#;

    let model = parse(source).expect("Failed to parse");
    let expanded = model.get("item").unwrap().attributes().on_create().expanded();

    assert_eq!(expanded["weight"], "1.0");
    assert_eq!(expanded["hex"], "0x10");
    assert_eq!(expanded["big"], "1.50");
}

#[test]
fn test_empty_attribute_value() {
    let source = "nodes:\n  - label: Item\n    mode: create\n    attr:\n      key:\n        id:\n";
    assert_eq!(error_codes(source), vec![ErrorCode::E100]);
}

#[test]
fn test_empty_document() {
    let model = parse("").expect("Empty document is valid");
    assert!(model.nodes().is_empty());
    assert!(model.rels().is_empty());
}

#[test]
fn test_malformed_yaml() {
    assert_eq!(error_codes("nodes:\n  - label: [\n"), vec![ErrorCode::E001]);
}

#[test]
fn test_missing_required_fields() {
    let source = r#"
nodes:
  - mode: merge
rels:
  - label: KNOWS
    mode: create
"#;
    assert_eq!(error_codes(source), vec![ErrorCode::E100, ErrorCode::E100]);
}

#[test]
fn test_invalid_relationship_expression() {
    let source = r#"
nodes:
  - label: A
    mode: merge
rels:
  - label: R
    mode: create
    reltype: a => a
"#;
    assert_eq!(error_codes(source), vec![ErrorCode::E200]);
}

#[test]
fn test_invalid_mode_and_unresolved_alias() {
    let source = r#"
nodes:
  - label: Person
    mode: Invalid
rels:
  - label: KNOWS
    mode: create
    reltype: person -> friend
"#;
    assert_eq!(error_codes(source), vec![ErrorCode::E201, ErrorCode::E202]);
}

#[test]
fn test_duplicate_alias() {
    let source = r#"
nodes:
  - label: Person
    mode: merge
  - label: Human
    alias: person
    mode: merge
"#;
    assert_eq!(error_codes(source), vec![ErrorCode::E203]);
}

#[test]
fn test_phases_stop_at_first_failure() {
    // Structure errors are reported before any expansion error.
    let source = r#"
nodes:
  - label: Person
rels:
  - label: R
    mode: create
    reltype: not an expression
"#;
    assert_eq!(error_codes(source), vec![ErrorCode::E100]);
}
