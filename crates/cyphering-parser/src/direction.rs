//! Relationship type expressions.
//!
//! A relationship's `reltype` names its two endpoints and a direction:
//!
//! ```text
//! person -> company    directed, person to company
//! person -  company    undirected
//! company <- person    directed, normalized to person -> company
//! ```
//!
//! Whitespace around the endpoints and the arrow is insignificant.

use thiserror::Error;
use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, delimited, eof, terminated},
    error::{ContextError, ModalResult},
    token::take_while,
};

use cyphering_core::graph::{Direction, RelationshipEnds};

/// Error for a relationship expression that does not have the
/// `A -> B`, `A - B` or `A <- B` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{expression}` doesn't match `A -> B`, `A - B` or `A <- B`")]
pub struct InvalidExpression {
    expression: String,
}

impl InvalidExpression {
    /// The expression as it was given.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Arrow as written, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrow {
    Right,
    Left,
    Plain,
}

type IResult<O> = ModalResult<O, ContextError>;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse an endpoint alias surrounded by optional whitespace.
fn endpoint<'a>(input: &mut &'a str) -> IResult<&'a str> {
    delimited(multispace0, take_while(1.., is_word_char), multispace0).parse_next(input)
}

/// Parse an arrow (longest first).
fn arrow(input: &mut &str) -> IResult<Arrow> {
    alt(("->".value(Arrow::Right), "<-".value(Arrow::Left), "-".value(Arrow::Plain)))
        .parse_next(input)
}

/// Parse a full expression, requiring the whole input to be consumed.
fn expression<'a>(input: &mut &'a str) -> IResult<(&'a str, Arrow, &'a str)> {
    terminated((endpoint, arrow, endpoint), eof).parse_next(input)
}

/// Resolve a relationship expression into ordered endpoints and a
/// canonical direction.
///
/// `<-` swaps the endpoints and becomes [`Direction::Directed`]; `->` and
/// `-` keep the textual order.
///
/// # Examples
///
/// ```
/// # use cyphering_core::graph::Direction;
/// # use cyphering_parser::direction::normalize;
/// let ends = normalize("company <- person").unwrap();
///
/// assert_eq!(ends.source(), "person");
/// assert_eq!(ends.target(), "company");
/// assert_eq!(ends.direction(), Direction::Directed);
/// ```
///
/// # Errors
///
/// Returns [`InvalidExpression`] when the expression is not exactly two
/// word-character endpoints joined by one arrow.
pub fn normalize(expr: &str) -> Result<RelationshipEnds, InvalidExpression> {
    let mut input = expr;
    let (left, arrow, right) = expression(&mut input).map_err(|_| InvalidExpression {
        expression: expr.to_string(),
    })?;

    Ok(match arrow {
        Arrow::Right => RelationshipEnds::new(left, right, Direction::Directed),
        Arrow::Left => RelationshipEnds::new(right, left, Direction::Directed),
        Arrow::Plain => RelationshipEnds::new(left, right, Direction::Undirected),
    })
}
