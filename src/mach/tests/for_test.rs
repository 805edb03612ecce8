use super::*;

#[test]
fn test_for_counts_up() {
    let out = run(&["10 FOR I = 1 TO 3", "20 PRINT I", "30 NEXT I"]);
    assert_eq!(out, "1\n2\n3\n");
}

#[test]
fn test_for_counts_down() {
    let out = run(&["10 FOR I = 3 TO 1 STEP -1", "20 PRINT I", "30 NEXT"]);
    assert_eq!(out, "3\n2\n1\n");
}

#[test]
fn test_for_fractional_step() {
    let out = run(&["10 FOR I = 0 TO 1 STEP 0.5", "20 PRINT I;\",\";", "30 NEXT", "40 PRINT"]);
    assert_eq!(out, "0,0.5,1,\n");
}

#[test]
fn test_for_body_runs_once_when_past_limit() {
    let out = run(&["10 FOR I = 3 TO 0", "20 PRINT I", "30 NEXT I"]);
    assert_eq!(out, "3\n");
}

#[test]
fn test_limit_is_locked_at_entry() {
    let out = run(&[
        "10 LET N = 3",
        "20 FOR I = 1 TO N",
        "30 LET N = 10",
        "40 PRINT I;",
        "50 NEXT I",
        "60 PRINT",
    ]);
    assert_eq!(out, "123\n");
}

#[test]
fn test_index_is_mutable() {
    let out = run(&["10 FOR I = 1 TO 10", "20 PRINT I", "30 LET I = 10", "40 NEXT I"]);
    assert_eq!(out, "1\n");
}

#[test]
fn test_start_assigned_before_step_evaluated() {
    let out = run(&[
        "10 LET I = 1",
        "20 FOR I = 3 TO 9 STEP I",
        "30 PRINT I;\" \";",
        "40 NEXT",
        "50 PRINT",
    ]);
    assert_eq!(out, "3 6 9 \n");
}

#[test]
fn test_nested_loops() {
    let out = run(&[
        "10 FOR I = 1 TO 2",
        "20 FOR J = 1 TO 2",
        "30 PRINT I;J;\" \";",
        "40 NEXT J",
        "50 NEXT I",
        "60 PRINT",
    ]);
    assert_eq!(out, "11 12 21 22 \n");
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let out = run(&[
        "10 FOR Y = 1 TO 2",
        "20 FOR X = 8 TO 9",
        "30 PRINT Y;\" \";X",
        "40 GOTO 60",
        "50 NEXT",
        "60 NEXT Y",
    ]);
    assert_eq!(
        out,
        "1 8\n?NEXT WITHOUT FOR IN 60; NEXT INDEX Y DOES NOT MATCH FOR INDEX X\n"
    );
}

#[test]
fn test_next_without_for() {
    let out = run(&["10 PRINT 1", "20 NEXT"]);
    assert_eq!(out, "1\n?NEXT WITHOUT FOR IN 20; NESTING ERROR\n");
}

#[test]
fn test_string_limit_rejected() {
    let out = run(&["10 FOR I = 1 TO \"A\"", "20 NEXT"]);
    assert_eq!(
        out,
        "?TYPE MISMATCH IN 10; FOR LOOP LIMIT MUST BE NUMBER, NOT STRING\n"
    );
}
