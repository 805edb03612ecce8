use basic::lang::{Lexer, Operator, Token};

fn tokens(s: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(s);
    let mut v = vec![];
    loop {
        match lexer.next_token() {
            Token::End => return v,
            t => v.push(t),
        }
    }
}

#[test]
fn test_eq_gt() {
    let mut lexer = Lexer::new("10 1=<>=<>2");
    assert_eq!(lexer.line_number(), Some("10"));
    let mut v = vec![];
    loop {
        match lexer.next_token() {
            Token::End => break,
            t => v.push(t),
        }
    }
    assert_eq!(
        v,
        vec![
            Token::Number(1.0),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::NotEqual),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::NotEqual),
            Token::Number(2.0),
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(tokens("3.141593"), vec![Token::Number(3.141593)]);
    assert_eq!(tokens("32768"), vec![Token::Number(32768.0)]);
    assert_eq!(tokens("24e9"), vec![Token::Number(24e9)]);
    assert_eq!(tokens("1.5E-3"), vec![Token::Number(1.5e-3)]);
    assert_eq!(tokens("2e"), vec![Token::Error("INVALID NUMBER")]);
}

#[test]
fn test_number_then_word() {
    assert_eq!(
        tokens("10TO20"),
        vec![
            Token::Number(10.0),
            Token::Ident("TO".to_string()),
            Token::Number(20.0),
        ]
    );
}

#[test]
fn test_string_keeps_inner_text() {
    assert_eq!(
        tokens(r#"PRINT "a; b""#),
        vec![
            Token::Ident("PRINT".to_string()),
            Token::String("a; b".to_string()),
        ]
    );
}

#[test]
fn test_span_recovers_source() {
    let mut lexer = Lexer::new("LET  ABC$ = 1");
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::Ident("ABC$".to_string()));
    assert_eq!(lexer.span(), 5..9);
    assert_eq!(lexer.text(), "ABC$");
}
