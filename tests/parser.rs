use lambd::{
    ast::{BinaryOperator, Expr},
    error::{ErrorKind, ParseError},
    interpreter::parser::core::{MAX_NESTING_DEPTH, Parser},
};

fn parse(src: &str) -> Vec<Expr> {
    Parser::from_source(src).parse()
                            .unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    match Parser::from_source(src).parse() {
        Ok(program) => panic!("Parsed {src:?} into {program:?} but expected an error"),
        Err(e) => e,
    }
}

fn render(src: &str) -> String {
    parse(src).iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join("\n")
}

#[test]
fn renders_with_full_parentheses() {
    assert_eq!(render("42--6"), "(42 - -6)");
    assert_eq!(render("15 - 5 * 3"), "(15 - (5 * 3))");
    assert_eq!(render("20 / 4 % 3"), "((20 / 4) % 3)");
    assert_eq!(render("1 < 2 == True"), "((1 < 2) == True)");
    assert_eq!(render("a || b && c"), "((a || b) && c)");
    assert_eq!(render("!x && y"), "((!x) && y)");
    assert_eq!(render("(((7)))"), "7");
}

#[test]
fn renders_compound_statements() {
    assert_eq!(render("Defun { add, (x, y) } x + y"),
               "(Defun { add, (x, y) } (x + y))");
    assert_eq!(render("Lambd x,y.(x*y + 5)(3, 4)"),
               "(Lambd x, y.(((x * y) + 5))(3, 4))");
    assert_eq!(render("if (1 == 2) { 42 } else { 0 }"),
               "(if ((1 == 2)) { 42 } else { 0 })");
    assert_eq!(render("if (x) { f(x, -1) }"), "(if (x) { f(x, -1) })");
}

#[test]
fn rendering_reparses_to_an_equal_tree() {
    let sources = ["42--6",
                   "15 - 5 * 3",
                   "-7 % 2 + x * (y - 3)",
                   "!(a == b) || c <= -4",
                   "Defun { add, (x, y) } x + y",
                   "Defun { id, (x) } x",
                   "Defun { answer, () } 42",
                   "Lambd x,y.(x*y + 5)(3, 4)",
                   "Lambd .(1)()",
                   "Lambd f.(Lambd x.(x + f)(4))(6)",
                   "if (1 == 2) { 42 } else { 0 }",
                   "if (n <= 1) { 1 } else { n * fact(n - 1) }",
                   "if (True) { Defun { g, (a) } a }",
                   "f(1, Lambd z.(z)(2), g())"];

    for src in sources {
        let original = parse(src);
        let rendered = original[0].to_string();
        let reparsed = parse(&rendered);
        assert_eq!(original, reparsed, "{src:?} rendered as {rendered:?}");
    }
}

#[test]
fn statements_are_separated_by_newlines() {
    let program = parse("\n\nDefun { add, (x, y) } x + y\n\n# call it\nadd(5, 3)\n");

    assert_eq!(program.len(), 2);
    assert!(matches!(program[0], Expr::FunctionDef(_)));
    assert!(matches!(&program[1], Expr::FunctionCall { name, arguments, line: 6 }
                     if name == "add" && arguments.len() == 2));
}

#[test]
fn nodes_carry_their_line() {
    let program = parse("1\n\nx + y");

    match &program[1] {
        Expr::BinaryOp { left, op, line, .. } => {
            assert_eq!(*op, BinaryOperator::Add);
            assert_eq!(*line, 3);
            assert_eq!(left.line_number(), 3);
        },
        other => panic!("Expected a binary operation, found {other:?}"),
    }
}

#[test]
fn empty_program() {
    assert!(parse("").is_empty());
    assert!(parse("\n # comment\n\n").is_empty());
}

#[test]
fn boolean_literals_in_arithmetic_are_rejected() {
    for src in ["True + 1", "1 + True", "2 - False", "False % 2", "True * True"] {
        let err = parse_err(src);
        assert!(matches!(err, ParseError::BooleanInArithmetic { .. }), "{src:?}: {err:?}");
        assert_eq!(err.kind(), ErrorKind::StaticSemantic);
    }

    // Other operand positions are left to the evaluator.
    parse("(True) + 1");
    parse("1 * True");
    parse("1 == True");
}

#[test]
fn invalid_tokens_surface_when_reached() {
    let err = parse_err("1 + @");
    assert!(matches!(&err, ParseError::InvalidToken { lexeme, .. } if lexeme == "@"));
    assert_eq!(err.kind(), ErrorKind::Lexical);

    let err = parse_err("\n\n$");
    assert_eq!(err.position().line, 3);
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_err("(1 + 2"),
                     ParseError::UnexpectedToken { ref found, .. } if found == "end of input"));
    assert!(matches!(parse_err("1 + 2 3"),
                     ParseError::UnexpectedTrailingTokens { ref token, .. } if token == "3"));
    assert!(matches!(parse_err("Defun { add (x) } x"),
                     ParseError::UnexpectedToken { ref expected, .. } if expected == ","));
    assert!(matches!(parse_err("Lambd x (x)(1)"),
                     ParseError::UnexpectedToken { ref expected, .. } if expected == "."));
    assert!(matches!(parse_err("if (1) 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("f(1,)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err(")"), ParseError::UnexpectedToken { .. }));

    let err = parse_err("1 +\n2");
    assert_eq!(err.kind(), ErrorKind::Syntactic);
    assert!(err.to_string().starts_with("Error at line 2, position 4"));
}

#[test]
fn nesting_is_limited() {
    let deep = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(matches!(parse_err(&deep),
                     ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. }));

    let nots = format!("{}x", "!".repeat(MAX_NESTING_DEPTH * 2));
    assert!(matches!(parse_err(&nots), ParseError::NestingTooDeep { .. }));

    let chain = vec!["x"; MAX_NESTING_DEPTH * 2].join(" * ");
    assert!(matches!(parse_err(&chain), ParseError::NestingTooDeep { .. }));

    // Depth is released between sibling groups and statements.
    let group = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH / 2), ")".repeat(MAX_NESTING_DEPTH / 2));
    let siblings = vec![group.as_str(); 10].join(" + ");
    assert_eq!(parse(&format!("{siblings}\n{siblings}")).len(), 2);
}

#[test]
fn names_must_be_identifiers() {
    assert!(matches!(parse_err("Defun { 1, (x) } x"),
                     ParseError::UnexpectedToken { ref expected, ref found, .. }
                     if expected == "identifier" && found == "1"));
    assert!(matches!(parse_err("Lambd x, 2.(x)(1)"),
                     ParseError::UnexpectedToken { ref expected, .. } if expected == "identifier"));
}
