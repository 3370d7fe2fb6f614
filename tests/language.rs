use std::fs;

use ggscript::{
    error::{LexicalError, ParseError, ReturnOutsideFunction, RuntimeError},
    interpreter::{lexer::tokenize, parser::statement::parse_program},
    run_program,
};

fn run(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_program(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).expect("output is valid UTF-8")
}

fn run_err(src: &str) -> Box<dyn std::error::Error> {
    let mut out = Vec::new();
    match run_program(src, &mut out) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(run("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run("print (1 + 2) * 3;"), "9\n");
    assert_eq!(run("print 10 - 2 - 3;"), "5\n");
    assert_eq!(run("print 7 / 2, 7 % 2;"), "3 1\n");
}

#[test]
fn division_truncates_like_the_machine() {
    assert_eq!(run("let a = 0 - 7; print a / 2, a % 2;"), "-3 -1\n");
    assert_eq!(run("print 9 / 3, 9 % 3;"), "3 0\n");
}

#[test]
fn arithmetic_overflow_is_an_error() {
    let e = run_err("print 9223372036854775807 + 1;");
    assert!(e.downcast_ref::<RuntimeError>().is_some());
    assert!(e.to_string().contains("Integer overflow"));
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    let e = run_err("print 1 / 0;");
    assert!(e.downcast_ref::<RuntimeError>().is_some());
    assert!(e.to_string().contains("Division by zero"));

    assert!(run_err("print 1 % 0;").to_string().contains("Division by zero"));
}

#[test]
fn plus_concatenates_when_either_side_is_text() {
    assert_eq!(run(r#"print "x" + 5;"#), "x5\n");
    assert_eq!(run(r#"print 5 + "x";"#), "5x\n");
    assert_eq!(run(r#"print "foo" + "bar";"#), "foobar\n");
    assert_eq!(run("print 2 + 3;"), "5\n");
}

#[test]
fn other_arithmetic_rejects_text() {
    assert!(run_err(r#"print "a" - 1;"#).to_string().contains("Type error"));
    assert!(run_err(r#"print "a" * "b";"#).to_string().contains("Type error"));
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_eq!(run("print 2 < 3, 3 < 2, 2 <= 2, 2 == 2, 2 != 2, 3 >= 4;"),
               "1 0 1 1 0 0\n");
}

#[test]
fn text_comparison_is_bytewise() {
    assert_eq!(run(r#"print "abc" < "abd";"#), "1\n");
    assert_eq!(run(r#"print "abc" == "abc", "a" > "b";"#), "1 0\n");
}

#[test]
fn mixed_comparison_is_an_error() {
    let e = run_err(r#"print 1 < "a";"#);
    assert!(e.downcast_ref::<RuntimeError>().is_some());
    assert!(e.to_string().contains("Cannot compare"));
}

#[test]
fn comparison_chains_flatten_left_to_right() {
    // (1 < 2) yields 1, then 1 < 3.
    assert_eq!(run("print 1 < 2 < 3;"), "1\n");
    // (3 > 2) yields 1, then 1 > 1.
    assert_eq!(run("print 3 > 2 > 1;"), "0\n");
}

#[test]
fn print_joins_with_single_spaces() {
    assert_eq!(run(r#"print 1, "a", 2 + 3;"#), "1 a 5\n");
}

#[test]
fn print_writes_values_as_they_are_evaluated() {
    assert_eq!(run(r#"func loud() { print "side"; return 1; } print loud(), 2;"#),
               "side\n1 2\n");
}

#[test]
fn let_shadows_in_inner_scopes() {
    assert_eq!(run("let x = 1; { let x = 2; print x; } print x;"), "2\n1\n");
}

#[test]
fn assignment_updates_enclosing_scopes() {
    assert_eq!(run("let x = 1; { x = 2; } print x;"), "2\n");
}

#[test]
fn unbound_assignment_declares_in_the_innermost_scope() {
    assert_eq!(run("{ y = 5; print y; }"), "5\n");

    let e = run_err("{ y = 5; } print y;");
    assert!(e.to_string().contains("Unknown variable 'y'"));
}

#[test]
fn compound_assignments_desugar() {
    assert_eq!(run("let x = 1; x += 2; print x;"), "3\n");
    assert_eq!(run("let x = 2; x -= 5; print x;"), "-3\n");
    assert_eq!(run("let x = 4; x *= 2; print x;"), "8\n");
    assert_eq!(run("let x = 9; x /= 3; print x;"), "3\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(run("let x = 0; let y = (x = 5); print x, y;"), "5 5\n");
}

#[test]
fn if_else_selects_on_nonzero() {
    assert_eq!(run("if (1) print 1; else print 2;"), "1\n");
    assert_eq!(run("if (0) print 1; else print 2;"), "2\n");
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    assert_eq!(run("if (1) if (0) print 1; else print 2;"), "2\n");
    assert_eq!(run("if (0) if (1) print 1; else print 2;"), "");
}

#[test]
fn text_condition_is_an_error() {
    let e = run_err(r#"if ("a") print 1;"#);
    assert!(e.to_string().contains("Condition must evaluate to an integer"));
}

#[test]
fn for_loop_counts() {
    assert_eq!(run("for (let i = 0; i < 3; i = i + 1) { print i; }"), "0\n1\n2\n");
    assert_eq!(run("for (let i = 0; i < 2; i += 1) print i;"), "0\n1\n");
}

#[test]
fn for_scope_ends_with_the_loop() {
    let e = run_err("for (let i = 0; i < 2; i += 1) { } print i;");
    assert!(e.to_string().contains("Unknown variable 'i'"));
}

#[test]
fn for_init_may_be_an_assignment() {
    // The init auto-declares into the loop's own scope.
    assert_eq!(run("for (i = 0; i < 2; i += 1) print i;"), "0\n1\n");
    assert!(run_err("for (i = 0; i < 2; i += 1) { } print i;").to_string()
                                                             .contains("Unknown variable 'i'"));
}

#[test]
fn function_without_return_yields_zero() {
    assert_eq!(run("func f() { } print f();"), "0\n");
}

#[test]
fn recursion_works() {
    assert_eq!(run("func fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } \
                    print fact(5);"),
               "120\n");
    assert_eq!(run("func fib(n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); } \
                    print fib(10);"),
               "55\n");
}

#[test]
fn return_propagates_through_nested_blocks_and_loops() {
    assert_eq!(run("func find() { \
                        for (let i = 0; i < 10; i += 1) { \
                            if (i == 3) { return i; } \
                        } \
                        return 0 - 1; \
                    } \
                    print find();"),
               "3\n");
}

#[test]
fn arguments_evaluate_left_to_right_before_the_call_scope() {
    assert_eq!(run("func first(a, b) { return a; } \
                    let x = 1; \
                    print first(x = 10, x + 5); \
                    print x;"),
               "10\n10\n");
}

#[test]
fn calls_may_stand_alone_as_statements() {
    assert_eq!(run(r#"func say(x) { print x; } say(3); say("done");"#), "3\ndone\n");
}

#[test]
fn function_redefinition_silently_replaces() {
    assert_eq!(run("func f() { return 1; } func f() { return 2; } print f();"), "2\n");
}

#[test]
fn function_defined_in_a_block_registers_globally() {
    assert_eq!(run("{ func f() { return 3; } } print f();"), "3\n");
}

#[test]
fn function_bodies_see_globals_but_not_caller_locals() {
    assert_eq!(run("let g = 1; func bump() { g = g + 1; return g; } print bump(); print g;"),
               "2\n2\n");
    assert_eq!(run("let n = 5; func id(n) { return n; } print id(7), n;"), "7 5\n");

    let e = run_err("func probe() { return hidden; } { let hidden = 5; print probe(); }");
    assert!(e.to_string().contains("Unknown variable 'hidden'"));
}

#[test]
fn unknown_function_and_arity_errors() {
    assert!(run_err("print f();").to_string().contains("Unknown function 'f'"));

    let e = run_err("func f(a) { return a; } print f();");
    assert!(e.to_string().contains("Argument count mismatch"));
}

#[test]
fn return_at_top_level_is_its_own_condition() {
    let e = run_err("return 1;");
    assert!(e.downcast_ref::<ReturnOutsideFunction>().is_some());
    assert!(e.downcast_ref::<RuntimeError>().is_none());

    // The signal keeps its identity while unwinding through blocks.
    let e = run_err("if (1) { return 5; }");
    assert!(e.downcast_ref::<ReturnOutsideFunction>().is_some());
}

#[test]
fn string_escapes_are_preserved_verbatim() {
    assert_eq!(run(r#"print "a\nb";"#), "a\\nb\n");
    assert_eq!(run(r#"print "say \"hi\"";"#), "say \\\"hi\\\"\n");
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    let e = run_err(r#"let s = "abc;"#);
    assert!(e.downcast_ref::<LexicalError>().is_some());
    assert!(e.to_string().contains("Unterminated string literal"));
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let e = run_err("let a = 1;\nlet b = @;");
    assert!(e.downcast_ref::<LexicalError>().is_some());
    assert!(e.to_string().contains("line 2"));
    assert!(e.to_string().contains("Unknown character '@'"));
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(run("let Print = 1; print Print;"), "1\n");
}

#[test]
fn bare_expressions_are_not_statements() {
    let e = run_err("let x = 1; x;");
    assert!(e.downcast_ref::<ParseError>().is_some());

    assert!(run_err("x + 1;").downcast_ref::<ParseError>().is_some());
}

#[test]
fn assignment_target_must_be_a_variable() {
    let e = run_err("let x = 1; let y = 2; x + y = 3;");
    assert!(e.to_string().contains("Left of assignment must be a variable"));
}

#[test]
fn missing_tokens_are_named() {
    assert!(run_err("print 1").to_string().contains("Expected ';'"));
    assert!(run_err("{ print 1;").to_string().contains("Expected '}'"));
    assert!(run_err("if 1) print 1;").to_string().contains("Expected '('"));
}

#[test]
fn stray_tokens_cannot_start_statements() {
    assert!(run_err("42;").downcast_ref::<ParseError>().is_some());
}

#[test]
fn lone_semicolons_are_tolerated() {
    assert_eq!(run(";;;"), "");
    assert_eq!(run("print 1;; print 2;"), "1\n2\n");
}

#[test]
fn runtime_errors_carry_the_source_line() {
    let e = run_err("let a = 1;\n\nprint missing;");
    assert!(e.to_string().contains("line 3"));
}

#[test]
fn a_mid_script_error_aborts_the_rest() {
    let mut out = Vec::new();
    let res = run_program("print 1; print missing; print 2;", &mut out);

    assert!(res.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn token_lines_come_from_the_starting_character() {
    let tokens = tokenize("let x = 1;\nprint x;").unwrap();

    assert_eq!(tokens[0].1, 1);
    assert_eq!(tokens[5].1, 2);
}

#[test]
fn whole_programs_can_be_parsed_up_front() {
    let tokens = tokenize("let x = 1; print x;").unwrap();
    let program = parse_program(&mut tokens.iter().peekable()).unwrap();

    assert_eq!(program.len(), 2);
}

#[test]
fn example_script_file() {
    let script = fs::read_to_string("tests/example.gg").expect("missing file");
    assert_eq!(run(&script), "hello, world\nsum of squares: 55\nbig\n");
}
