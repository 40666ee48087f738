use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|tok| tok.kind).collect()
}

fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .map(|tok| (tok.kind, tok.literal))
        .collect()
}

#[test]
fn test_lex_single_char_tokens() {
    assert_eq!(
        kinds("=+(){},;"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_operators() {
    assert_eq!(
        kinds("!-/*5; 5 < 10 > 5; 10 == 10; 10 != 9;"),
        vec![
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::Lt,
            TokenKind::Int,
            TokenKind::Gt,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::Eq,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::NotEq,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_let_and_function() {
    let source = "let add = fn(x, y) {\n  x + y;\n};";
    let expected: Vec<(TokenKind, String)> = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ]
    .into_iter()
    .map(|(kind, literal)| (kind, literal.to_string()))
    .collect();
    assert_eq!(pairs(source), expected);
}

#[test]
fn test_lex_keywords() {
    assert_eq!(
        kinds("if (5 < 10) { return true; } else { return false; }"),
        vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Lt,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Else,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        pairs("fnord letter iffy"),
        vec![
            (TokenKind::Ident, "fnord".to_string()),
            (TokenKind::Ident, "letter".to_string()),
            (TokenKind::Ident, "iffy".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_identifier_splits_at_digits() {
    assert_eq!(
        pairs("x1 foo_bar"),
        vec![
            (TokenKind::Ident, "x".to_string()),
            (TokenKind::Int, "1".to_string()),
            (TokenKind::Ident, "foo_bar".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_illegal_characters() {
    assert_eq!(
        pairs("a @ b"),
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Illegal, "@".to_string()),
            (TokenKind::Ident, "b".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_illegal_multibyte_character() {
    let tokens = lex("1 ➜ 2");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "➜");
    assert_eq!(tokens[1].span, Span::new(2, 5));
    assert_eq!(tokens[2].literal, "2");
}

#[test]
fn test_spans() {
    let tokens = lex("let x");
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].span, Span::point(5));
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Eof]);
}

#[test]
fn test_next_token_repeats_eof() {
    let mut lexer = Lexer::new("5");
    assert_eq!(lexer.next_token().kind, TokenKind::Int);
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());
}

#[test]
fn test_iterator_stops_before_eof() {
    let collected: Vec<_> = Lexer::new("1 + 2;").map(|tok| tok.to_string()).collect();
    assert_eq!(
        collected,
        vec![
            "{Type:INT Literal:1}",
            "{Type:+ Literal:+}",
            "{Type:INT Literal:2}",
            "{Type:; Literal:;}",
        ]
    );
}

proptest! {
    #[test]
    fn prop_lex_ends_with_single_eof(source in "\\PC{0,48}") {
        let tokens = lex(&source);
        let eof_count = tokens.iter().filter(|tok| tok.is_eof()).count();
        prop_assert_eq!(eof_count, 1);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn prop_literals_cover_all_non_whitespace(source in "\\PC{0,48}") {
        let joined: String = lex(&source)
            .iter()
            .map(|tok| tok.literal.as_str())
            .collect();
        let expected: String = source
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn prop_spans_slice_back_to_literals(source in "[ -~\\t\\n]{0,64}") {
        for tok in lex(&source) {
            prop_assert_eq!(&source[tok.span.to_range()], tok.literal.as_str());
        }
    }
}
