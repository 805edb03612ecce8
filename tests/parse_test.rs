use basic::lang::{ast::*, parse, ErrorCode, Ident, Mode};

fn body(s: &str) -> Body {
    match parse(s, Mode::Batch) {
        Ok(stmt) => match stmt.body() {
            Body::Goto(n) => Body::Goto(*n),
            Body::Gosub(n) => Body::Gosub(*n),
            Body::Next(v) => Body::Next(v.clone()),
            Body::List(a, b) => Body::List(*a, *b),
            Body::Input(p, v) => Body::Input(p.clone(), v.clone()),
            b => panic!("unexpected {:?}", b),
        },
        Err(e) => panic!("{}", e),
    }
}

#[test]
fn test_keywords_ignore_case() {
    assert_eq!(body("10 goto 20"), Body::Goto(20));
    assert_eq!(body("10 GoSub 300"), Body::Gosub(300));
    assert_eq!(body("10 next i"), Body::Next(Some(Ident::new("I"))));
}

#[test]
fn test_input_prompt() {
    assert_eq!(
        body(r#"10 INPUT "NAME", N$"#),
        Body::Input(Some("NAME".to_string()), Ident::new("N$"))
    );
    assert_eq!(body("10 INPUT X"), Body::Input(None, Ident::new("X")));
    let e = parse(r#"10 INPUT "NAME" N$"#, Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "COMMA EXPECTED");
}

#[test]
fn test_list_range() {
    assert_eq!(body("LIST"), Body::List(None, None));
    assert_eq!(body("LIST 100"), Body::List(Some(100), None));
    assert_eq!(body("LIST 100-200"), Body::List(Some(100), Some(200)));
}

#[test]
fn test_line_numbers() {
    assert_eq!(parse("65529 END", Mode::Batch).unwrap().line_number(), Some(65529));
    let e = parse("65530 END", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "INVALID LINE NUMBER");
    let e = parse("10 GOTO 70000", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "LINE NUMBER EXPECTED");
    let e = parse("10 GOTO 1.5", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "LINE NUMBER EXPECTED");
}

#[test]
fn test_error_location() {
    let e = parse("10 LET A = )", Mode::Batch).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(10));
    assert_eq!(e.column(), 11..12);
    assert_eq!(e.detail(), "')' FOUND, LITERAL OR VARIABLE EXPECTED");
}

#[test]
fn test_let_requires_equals() {
    let e = parse("10 LET A 5", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "EQUALS EXPECTED");
    let e = parse("10 LET 5 = A", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "IDENTIFIER EXPECTED");
}

#[test]
fn test_if_requires_then() {
    let e = parse("10 IF A = 1 GOTO 20", Mode::Batch).unwrap_err();
    assert_eq!(e.detail(), "THEN EXPECTED");
}

#[test]
fn test_immediate_only_commands() {
    for cmd in &["RUN", "NEW", "CAT", "LOAD \"X\"", "SAVE X"] {
        let e = parse(&format!("10 {}", cmd), Mode::Interactive).unwrap_err();
        assert!(e.detail().ends_with("IS NOT VALID IN A PROGRAM"), "{}", cmd);
        assert!(parse(cmd, Mode::Interactive).is_ok(), "{}", cmd);
    }
}
