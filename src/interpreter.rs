/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages the environment, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Registers functions and applies functions and lambdas.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a literal, identifier, keyword, operator, delimiter or line
/// break. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Decides whether a `-` is an operator or the sign of an integer literal.
/// - Turns unrecognized input into an `Invalid` token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of the program.
///
/// # Responsibilities
/// - Converts tokens into AST nodes with operator precedence applied.
/// - Validates grammar, reporting errors with location info.
/// - Rejects boolean literals used as arithmetic operands.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers and booleans.
/// - Defines the `Environment` that maps names to values and functions.
pub mod value;
