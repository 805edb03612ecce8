mod common;
use common::*;

fn print(expr: &str) -> String {
    let mut s = Session::new();
    s.enter(&format!("PRINT {}", expr));
    s.output()
}

#[test]
fn test_precedence() {
    assert_eq!(print("1+2*3"), "7\n");
    assert_eq!(print("(1+2)*3"), "9\n");
    assert_eq!(print("2*-3"), "-6\n");
    assert_eq!(print("--2"), "2\n");
}

#[test]
fn test_left_assoc() {
    assert_eq!(print("1.5/2*3"), "2.25\n");
    assert_eq!(print("1.5/(2*3)"), "0.25\n");
    assert_eq!(print("10-2-3"), "5\n");
}

#[test]
fn test_division_by_zero_is_not_trapped() {
    assert_eq!(print("1/0"), "inf\n");
}

#[test]
fn test_string_concat() {
    assert_eq!(print("\"AB\" + \"CD\""), "ABCD\n");
}

#[test]
fn test_comparisons() {
    assert_eq!(print("\"A\" < \"B\""), "TRUE\n");
    assert_eq!(print("\"B\" <= \"A\""), "FALSE\n");
    assert_eq!(print("2 >= 2"), "TRUE\n");
    assert_eq!(print("3 <> 3"), "FALSE\n");
    assert_eq!(print("0.1 + 0.2 = 0.3"), "FALSE\n");
}

#[test]
fn test_type_errors() {
    assert_eq!(
        print("1 + \"A\""),
        "?TYPE MISMATCH; CANNOT ADD NUMBER AND STRING\n"
    );
    assert_eq!(
        print("\"A\" - \"B\""),
        "?TYPE MISMATCH; CANNOT SUBTRACT STRING AND STRING\n"
    );
    assert_eq!(
        print("\"A\" * 2"),
        "?TYPE MISMATCH; CANNOT TIMES STRING AND NUMBER\n"
    );
    assert_eq!(
        print("1 / \"A\""),
        "?TYPE MISMATCH; CANNOT DIVIDE NUMBER AND STRING\n"
    );
    assert_eq!(
        print("1 < \"A\""),
        "?TYPE MISMATCH; CANNOT COMPARE NUMBER AND STRING\n"
    );
    assert_eq!(print("-\"A\""), "?TYPE MISMATCH; CANNOT NEGATE STRING\n");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        print("(1"),
        "?SYNTAX ERROR IN (8..8); UNBALANCED PARENTHESES\n"
    );
    assert_eq!(
        print("1 +"),
        "?SYNTAX ERROR IN (9..9); END OF LINE FOUND, LITERAL OR VARIABLE EXPECTED\n"
    );
}

#[test]
fn test_unassigned_variables() {
    assert_eq!(print("Z + 1"), "1\n");
    assert_eq!(print("Z$ + \"!\""), "!\n");
}

#[test]
fn test_large_and_small_numbers() {
    assert_eq!(print("1E20"), "1E20\n");
    assert_eq!(print("123456"), "123456\n");
}
