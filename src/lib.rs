//! # lambd
//!
//! lambd is a small expression-and-function language written in Rust.
//! Source text is lexed, parsed by recursive descent into an expression tree,
//! and evaluated by a tree-walking interpreter. The language has integers,
//! booleans, named functions (`Defun`), immediately applied lambdas (`Lambd`)
//! and `if`/`else`.
//!
//! ```
//! use lambd::{get_result, interpreter::value::core::Value};
//!
//! let source = "Defun { add, (x, y) } x + y\nadd(5, 3)";
//! assert_eq!(get_result(source).unwrap(), Some(Value::Integer(8)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders trees in a stable, fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code, together with the [`error::ErrorKind`] each belongs to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and line numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers.
///
/// # Responsibilities
/// - Floor division and floor remainder for `i64`.
pub mod util;

/// Parses and evaluates `source` against an existing interpreter.
///
/// Functions defined by earlier runs stay visible, which makes this the entry
/// point for sessions that feed the interpreter piece by piece. Returns the
/// value of the first statement that produces one, or `None` if no statement
/// does.
///
/// Nothing is evaluated when parsing fails.
///
/// # Errors
/// Returns the parse error or the first runtime error.
///
/// # Examples
/// ```
/// use lambd::{interpreter::{evaluator::core::Interpreter, value::core::Value}, run};
///
/// let mut interpreter = Interpreter::new();
/// assert_eq!(run("Defun { double, (x) } x * 2", &mut interpreter).unwrap(), None);
/// assert_eq!(run("double(21)", &mut interpreter).unwrap(), Some(Value::Integer(42)));
/// ```
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<Option<Value>, Error> {
    let program = Parser::from_source(source).parse()?;
    Ok(interpreter.interpret(&program)?)
}

/// Parses and evaluates `source` with a fresh interpreter.
///
/// # Errors
/// Returns the parse error or the first runtime error.
///
/// # Examples
/// ```
/// use lambd::{error::ErrorKind, get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("42--6").unwrap(), Some(Value::Integer(48)));
/// assert_eq!(get_result("if (1 == 2) { 42 } else { 0 }").unwrap(), Some(Value::Integer(0)));
///
/// // 'x' is not defined
/// let err = get_result("x + 1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, Error> {
    run(source, &mut Interpreter::new())
}
