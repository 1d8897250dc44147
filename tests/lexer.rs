use lambd::interpreter::lexer::{Lexer, Position, Token};

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn function_definition_tokens() {
    assert_eq!(tokens("Defun { add, (x, y) } x + y"),
               vec![Token::Defun,
                    Token::LBrace,
                    ident("add"),
                    Token::Comma,
                    Token::LParen,
                    ident("x"),
                    Token::Comma,
                    ident("y"),
                    Token::RParen,
                    Token::RBrace,
                    ident("x"),
                    Token::Plus,
                    ident("y")]);
}

#[test]
fn operators_use_longest_match() {
    assert_eq!(tokens("&& || ! == != > < >= <= % / *"),
               vec![Token::AndAnd,
                    Token::OrOr,
                    Token::Bang,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Greater,
                    Token::Less,
                    Token::GreaterEqual,
                    Token::LessEqual,
                    Token::Percent,
                    Token::Slash,
                    Token::Star]);
}

#[test]
fn keywords_need_whole_words() {
    assert_eq!(tokens("if iffy else elsewhere Defunct Lambda Truer False_"),
               vec![Token::If,
                    ident("iffy"),
                    Token::Else,
                    ident("elsewhere"),
                    ident("Defunct"),
                    ident("Lambda"),
                    ident("Truer"),
                    ident("False_")]);
    assert_eq!(tokens("True False Lambd"),
               vec![Token::Bool(true), Token::Bool(false), Token::Lambd]);
}

#[test]
fn minus_sign_depends_on_context() {
    assert_eq!(tokens("42--6"),
               vec![Token::Integer(42), Token::Minus, Token::Integer(-6)]);
    assert_eq!(tokens("-5"), vec![Token::Integer(-5)]);
    assert_eq!(tokens("(-5)"),
               vec![Token::LParen, Token::Integer(-5), Token::RParen]);
    assert_eq!(tokens("3 -2"), vec![Token::Integer(3), Token::Integer(-2)]);
    assert_eq!(tokens("3 - 2"),
               vec![Token::Integer(3), Token::Minus, Token::Integer(2)]);
    assert_eq!(tokens("x-1"), vec![ident("x"), Token::Minus, Token::Integer(1)]);
    assert_eq!(tokens(")-1"), vec![Token::RParen, Token::Minus, Token::Integer(1)]);
    assert_eq!(tokens("- x"), vec![Token::Minus, ident("x")]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(tokens("1 # one\n\t2 #two"),
               vec![Token::Integer(1), Token::NewLine, Token::Integer(2)]);
    assert_eq!(tokens("# nothing here"), vec![]);
    assert_eq!(tokens("1\r\n\x0c2 #"),
               vec![Token::Integer(1), Token::NewLine, Token::Integer(2)]);
}

#[test]
fn unrecognized_input_is_invalid() {
    assert_eq!(tokens("3 $ 4"),
               vec![Token::Integer(3), Token::Invalid("$".to_string()), Token::Integer(4)]);
    assert_eq!(tokens("99999999999999999999"),
               vec![Token::Invalid("99999999999999999999".to_string())]);
    assert_eq!(tokens("9223372036854775807"), vec![Token::Integer(i64::MAX)]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("1");

    assert_eq!(lexer.next_token(), Token::Integer(1));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn positions_track_lines_and_offsets() {
    let mut lexer = Lexer::new("a\nbc");
    assert_eq!(lexer.source(), "a\nbc");

    assert_eq!(lexer.next_token(), ident("a"));
    assert_eq!(lexer.position(), Position { line: 1, offset: 1 });

    assert_eq!(lexer.next_token(), Token::NewLine);
    assert_eq!(lexer.position(), Position { line: 2, offset: 2 });

    assert_eq!(lexer.next_token(), ident("bc"));
    assert_eq!(lexer.position(), Position { line: 2, offset: 4 });
    assert_eq!(lexer.position().to_string(), "line 2, position 4");
}

#[test]
fn tokens_display_as_source() {
    assert_eq!(Token::GreaterEqual.to_string(), ">=");
    assert_eq!(Token::Bool(true).to_string(), "True");
    assert_eq!(Token::Integer(-3).to_string(), "-3");
    assert_eq!(Token::Eof.to_string(), "end of input");
    assert!(Token::Percent.is_arithmetic_operator());
    assert!(!Token::AndAnd.is_arithmetic_operator());
}
