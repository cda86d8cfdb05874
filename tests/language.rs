use pisc::{
    ast::{BinaryOperator, Expr, Number, Statement},
    error::{ParseError, PiscError, RuntimeError},
    interpreter::{evaluator::core::Interpreter, lexer::TokenKind, value::Value},
    tokenize,
};
use serde_json::json;

fn output_of(src: &str) -> Vec<Value> {
    pisc::run(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_output(src: &str, expected: &[Value]) {
    assert_eq!(output_of(src), expected, "unexpected output for:\n{src}");
}

fn assert_failure(src: &str) -> PiscError {
    match pisc::run(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
        Err(e) => e,
    }
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Integer).collect()
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("a = 5\nb = 3\na = a + b\nprint(a)", &ints(&[8]));
    assert_output("print(7 * 9)", &ints(&[63]));
    assert_output("print(8 - 5)", &ints(&[3]));
    assert_output("print(2 + 3 * 4)", &ints(&[14]));
    assert_output("print((2 + 3) * 4)", &ints(&[20]));
    assert_output("print(10 - 4 - 3)", &ints(&[3]));
}

#[test]
fn unary_minus_binds_tighter_than_times() {
    assert_output("x = -2 * 3\nprint(x)", &ints(&[-6]));
    assert_output("print(--4)", &ints(&[4]));
    assert_output("print(-1.5)", &[Value::Float(-1.5)]);
}

#[test]
fn division_always_yields_a_float() {
    assert_output("print(7 / 2)", &[Value::Float(3.5)]);
    assert_output("print(10 / 2)", &[Value::Float(5.0)]);
    assert_output("print(1.5 * 2)", &[Value::Float(3.0)]);
    assert_output("print(1 + 0.5)", &[Value::Float(1.5)]);
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("print(5 / 0)");
    assert!(matches!(err, PiscError::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(err.to_string(), "Division by zero");

    assert_failure("x = 1 / 0.0");
}

#[test]
fn division_by_zero_keeps_earlier_output() {
    let program = pisc::parse("print(1)\nprint(2 / 0)\nprint(3)").unwrap();
    let mut interpreter = Interpreter::new();

    let err = interpreter.run(&program).unwrap_err();

    assert_eq!(err, RuntimeError::DivisionByZero);
    assert_eq!(interpreter.output(), &[Value::Integer(1)]);
}

#[test]
fn undefined_variable_is_error() {
    let err = assert_failure("print(foo)");
    assert_eq!(err.messages(), vec!["Variable 'foo' not defined".to_string()]);
}

#[test]
fn if_elseif_else_chains() {
    assert_output("if 0 { print(1) } else { print(2) }", &ints(&[2]));
    assert_output("if 1 { print(1) } else { print(2) }", &ints(&[1]));
    assert_output("if false { print(1) }", &[]);

    let chain = "x = 2
                 if x == 1 { print(10) }
                 elseif x == 2 { print(20) }
                 elseif x == 2 { print(30) }
                 else { print(40) }";
    assert_output(chain, &ints(&[20]));

    let fallthrough = "x = 9
                       if x < 1 { print(1) } elseif x < 5 { print(5) } else { print(0) }";
    assert_output(fallthrough, &ints(&[0]));
}

#[test]
fn truthiness() {
    assert_output(r#"if "" { print(1) } else { print(0) }"#, &ints(&[0]));
    assert_output(r#"if "a" { print(1) } else { print(0) }"#, &ints(&[1]));
    assert_output("if null { print(1) } else { print(0) }", &ints(&[0]));
    assert_output("if 0.0 { print(1) } else { print(0) }", &ints(&[0]));
    assert_output("if -1 { print(1) } else { print(0) }", &ints(&[1]));
}

#[test]
fn while_loops() {
    let src = "i = 0
               total = 0
               while i < 5 {
                   total = total + i
                   i = i + 1
               }
               print(total)
               print(i)";
    assert_output(src, &ints(&[10, 5]));

    assert_output("while false { print(1) }", &[]);
}

#[test]
fn for_loops() {
    assert_output("for i in range(3) { print(i) }", &ints(&[0, 1, 2]));
    assert_output("for i in range(0) { print(i) }", &[]);
    assert_output("sum = 0\nfor i in range(5) { sum = sum + i }\nprint(sum)",
                  &ints(&[10]));
}

#[test]
fn for_loop_variable_outlives_the_loop() {
    assert_output("for i in range(4) { }\nprint(i)", &ints(&[3]));
    assert_output("i = 100\nfor i in range(2) { }\nprint(i)", &ints(&[1]));
}

#[test]
fn nested_loops() {
    let src = "for i in range(2) {
                   for j in range(2) {
                       print(i * 10 + j)
                   }
               }";
    assert_output(src, &ints(&[0, 1, 10, 11]));
}

#[test]
fn strings_and_escapes() {
    assert_output(r#"print("hello")"#, &[Value::from("hello")]);
    assert_output(r#"print("a" + "b")"#, &[Value::from("ab")]);
    assert_output(r#"print("tab\there")"#, &[Value::from("tab\there")]);
    assert_output(r#"print("say \"hi\"")"#, &[Value::from("say \"hi\"")]);
    assert_output(r#"print("" == "")"#, &[Value::Bool(true)]);
}

#[test]
fn booleans_null_and_comparisons() {
    assert_output("print(true)\nprint(null)", &[Value::Bool(true), Value::Null]);
    assert_output("print(2 < 3)", &[Value::Bool(true)]);
    assert_output("print(3 <= 2)", &[Value::Bool(false)]);
    assert_output("print(2 >= 2)", &[Value::Bool(true)]);
    assert_output("print(1 == 1.0)", &[Value::Bool(true)]);
    assert_output("print(1 != 2)", &[Value::Bool(true)]);
    assert_output("print(null == null)", &[Value::Bool(true)]);
    assert_output(r#"print("abc" < "abd")"#, &[Value::Bool(true)]);
    assert_output("print(true == 1)", &[Value::Bool(false)]);
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_output("print(1 + 1 == 2)", &[Value::Bool(true)]);
    assert_output("print(2 * 3 > 5)", &[Value::Bool(true)]);
}

#[test]
fn mismatched_operand_types_are_errors() {
    let err = assert_failure(r#"print("abc" + 5)"#);
    assert_eq!(err.to_string(), "Unsupported operand types for +: string and int");

    let err = assert_failure(r#"print(true < "x")"#);
    assert_eq!(err.to_string(), "Unsupported operand types for <: bool and string");

    assert_failure("print(null - 1)");
    assert_failure(r#"print("ab" * 2)"#);
    assert_failure("print(-true)");
}

#[test]
fn integer_overflow_is_error() {
    let err = assert_failure("x = 9223372036854775807\nprint(x + 1)");
    assert!(matches!(err, PiscError::Runtime(RuntimeError::Overflow { op: "+" })));
}

#[test]
fn comments_are_ignored() {
    let src = "# leading comment
               x = 1 # trailing comment
               # print(99)
               print(x)";
    assert_output(src, &ints(&[1]));
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", &[]);
    assert_output("   \n\t# only a comment\n", &[]);
}

#[test]
fn illegal_characters_block_parsing() {
    let err = assert_failure("x = 1 @ 2\ny = $");

    let PiscError::Lex(errors) = &err else {
        panic!("expected lexical errors, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(err.messages(),
               vec!["Illegal character '@' at line 1, col 7".to_string(),
                    "Illegal character '$' at line 2, col 5".to_string()]);
}

#[test]
fn lexer_reports_errors_alongside_tokens() {
    let lexed = tokenize("a = 1 ? 2");

    assert!(!lexed.is_ok());
    assert_eq!(lexed.tokens.len(), 4);
    assert_eq!(lexed.tokens[3].text, "2");
}

#[test]
fn lexer_tracks_lines_and_columns() {
    let lexed = tokenize("x = 1\n  print(x)");
    let print = &lexed.tokens[3];

    assert_eq!(print.kind, TokenKind::Print);
    assert_eq!((print.line, print.column, print.offset), (2, 3, 8));
}

#[test]
fn keywords_are_whole_words() {
    let kinds: Vec<_> = tokenize("iffy printer if print").tokens
                                                          .iter()
                                                          .map(|t| t.kind)
                                                          .collect();
    assert_eq!(kinds,
               [TokenKind::Identifier, TokenKind::Identifier, TokenKind::If, TokenKind::Print]);
}

#[test]
fn syntax_errors_report_the_offending_token() {
    let err = assert_failure("x = = 1");
    assert_eq!(err.to_string(), "Syntax error at token 'EQUALS', value '=', line 1, pos 4");

    let err = assert_failure("print(1");
    assert!(matches!(err, PiscError::Parse(ParseError::UnexpectedEndOfInput)));

    let err = assert_failure("if x {\n print(1)\n");
    assert_eq!(err.to_string(), "Unexpected end of input");

    assert_failure("x = 1 +");
    assert_failure("else { print(1) }");
    assert_failure("for i in range(x) { }");
}

#[test]
fn fractional_loop_count_is_error() {
    let err = assert_failure("for i in range(2.5) { print(i) }");
    assert!(matches!(err, PiscError::Parse(ParseError::InvalidLoopCount { .. })));
}

#[test]
fn oversized_literal_is_error() {
    let err = assert_failure("print(99999999999999999999)");
    assert!(matches!(err, PiscError::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn parser_builds_left_associative_trees() {
    let program = pisc::parse("x = 1 - 2 - 3").unwrap();

    let Statement::Assign { expr, .. } = &program.statements[0] else {
        panic!("expected an assignment");
    };
    let Expr::BinaryOp { left, op, right } = expr else {
        panic!("expected a binary operation");
    };

    assert_eq!(*op, BinaryOperator::Sub);
    assert_eq!(**right, Expr::Number { value: Number::Integer(3) });
    assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn elseif_is_nested_in_else_branch() {
    let program = pisc::parse("if a { } elseif b { } else { print(1) }").unwrap();

    let Statement::If { else_branch: Some(else_branch), .. } = &program.statements[0] else {
        panic!("expected an if statement with an else branch");
    };
    assert_eq!(else_branch.len(), 1);
    assert!(matches!(&else_branch[0],
                     Statement::If { else_branch: Some(inner), .. } if inner.len() == 1));
}

#[test]
fn ast_serializes_to_named_mappings() {
    let program = pisc::parse("if x > 1.5 { y = -x } else { print(\"no\") }").unwrap();

    let expected = json!({
        "Program": {
            "statements": [{
                "If": {
                    "condition": {
                        "BinOp": {
                            "left": { "Var": { "name": "x" } },
                            "op": ">",
                            "right": { "Number": { "value": 1.5 } }
                        }
                    },
                    "then_branch": [{
                        "Assign": {
                            "name": "y",
                            "expr": { "UnaryOp": { "op": "-", "operand": { "Var": { "name": "x" } } } }
                        }
                    }],
                    "else_branch": [{ "Print": { "expr": { "String": { "value": "no" } } } }]
                }
            }]
        }
    });

    assert_eq!(program.to_json().unwrap(), expected);
}

#[test]
fn if_without_else_serializes_null_branch() {
    let program = pisc::parse("while true { } if null { }").unwrap();

    let expected = json!({
        "Program": {
            "statements": [
                { "While": { "condition": { "Boolean": { "value": true } }, "body": [] } },
                { "If": { "condition": { "Null": {} }, "then_branch": [], "else_branch": null } }
            ]
        }
    });

    assert_eq!(program.to_json().unwrap(), expected);
}

#[test]
fn runs_are_independent() {
    assert_output("x = 1\nprint(x)", &ints(&[1]));
    assert_failure("print(x)");

    let program = pisc::parse("y = 2\nprint(y)").unwrap();
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.run(&program).unwrap(), ints(&[2]));
    assert_eq!(interpreter.run(&program).unwrap(), ints(&[2]));
    assert!(interpreter.environment().contains("y"));
}

#[test]
fn same_source_gives_same_results() {
    let src = "s = \"x\"\nfor i in range(3) { s = s + \"y\" }\nprint(s)";

    assert_eq!(tokenize(src), tokenize(src));
    assert_eq!(pisc::parse(src).unwrap(), pisc::parse(src).unwrap());
    assert_eq!(output_of(src), vec![Value::from("xyyy")]);
}

#[test]
fn values_display_for_plain_text_output() {
    let shown: Vec<String> = output_of("print(4 / 2)\nprint(1)\nprint(true)\nprint(null)\nprint(\"s\")")
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(shown, ["2.0", "1", "true", "null", "s"]);
}

#[test]
fn dot_rendering_covers_every_statement() {
    let program = pisc::parse("x = 1\nwhile x < 3 { x = x + 1 }\nfor i in range(2) { print(i) }")
        .unwrap();
    let dot = pisc::dot::render(&program);

    assert!(dot.starts_with("digraph AST {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("label=\"While\""));
    assert!(dot.contains("label=\"For (i in range(2))\""));
    assert!(dot.contains("label=\"FunctionCall (print)\""));
    assert!(dot.contains("label=\"Identifier (x)\""));
}

#[test]
fn dividing_large_integers_rounds_to_nearest_float() {
    assert_output("print(100000000000000000 / 4)", &[Value::Float(2.5e16)]);
    assert_output("print(9007199254740993 / 1)", &[Value::Float(9_007_199_254_740_992.0)]);
    assert_output("print(-9223372036854775807 / 2)", &[Value::Float(-4.611_686_018_427_388e18)]);
}

#[test]
fn large_integers_order_exactly_against_floats() {
    assert_output("print(10000000000000001 > 0.5)", &[Value::Bool(true)]);
    assert_output("print(9007199254740993 > 9007199254740992.0)", &[Value::Bool(true)]);
    assert_output("print(9007199254740993 <= 9007199254740992.0)", &[Value::Bool(false)]);
    assert_output("print(9007199254740992.0 < 9007199254740993)", &[Value::Bool(true)]);
    assert_output("print(9223372036854775807 < 9223372036854775807.0)", &[Value::Bool(true)]);
    assert_output("print(9007199254740993 == 9007199254740992.0)", &[Value::Bool(false)]);
    assert_output("print(-3 < -2.5)\nprint(2.5 >= 3)\nprint(3 >= 3.0)",
                  &[Value::Bool(true), Value::Bool(false), Value::Bool(true)]);
}

#[test]
fn mixing_large_integers_with_floats_in_arithmetic_is_error() {
    let err = assert_failure("print(9007199254740993 + 0.5)");
    assert!(matches!(err,
                     PiscError::Runtime(RuntimeError::IntegerTooLarge { value: 9_007_199_254_740_993 })));
}

fn assert_nesting_too_deep(src: &str) {
    match pisc::parse(src) {
        Err(PiscError::Parse(ParseError::NestingTooDeep { line: 1, .. })) => {},
        other => panic!("Expected a nesting error, got {other:?}"),
    }
}

#[test]
fn deeply_nested_input_is_rejected() {
    let depth = 200_000;

    assert_nesting_too_deep(&format!("print({}1{})", "(".repeat(depth), ")".repeat(depth)));
    assert_nesting_too_deep(&format!("print({}1)", "-".repeat(depth)));
    assert_nesting_too_deep(&format!("print({}1)", "1 + ".repeat(depth)));
    assert_nesting_too_deep(&format!("print({}1)", "2 * 1 == ".repeat(depth)));
    assert_nesting_too_deep(&format!("{}{}", "if 1 { ".repeat(depth), "}".repeat(depth)));
    assert_nesting_too_deep(&format!("if 0 {{ }}{}", " elseif 0 { }".repeat(depth)));

    let err = assert_failure(&format!("x = {}2{}", "(".repeat(depth), ")".repeat(depth)));
    assert_eq!(err.messages().len(), 1);
    assert!(err.to_string().starts_with("Nesting too deep, line 1, pos "));
}

#[test]
fn moderate_nesting_still_runs() {
    assert_output(&format!("print({}7{})", "(".repeat(50), ")".repeat(50)), &ints(&[7]));
    assert_output(&format!("print({}1)", "-".repeat(50)), &ints(&[1]));
    assert_output(&format!("print({}1)", "1 + ".repeat(100)), &ints(&[101]));
    assert_output(&format!("{}print(1){}", "if true { ".repeat(50), " }".repeat(50)),
                  &ints(&[1]));

    let chain = format!("x = 60\nif x == 0 {{ print(0) }}{}",
                        (1..=60).map(|i| format!(" elseif x == {i} {{ print({i}) }}"))
                                .collect::<String>());
    assert_output(&chain, &ints(&[60]));
}

#[test]
fn json_report_pairs_syntax_tree_with_output() {
    let program = pisc::parse("x = 2\nprint(x * 3)\nprint(\"done\")").unwrap();
    let report = pisc::run_to_json(&program).unwrap();

    assert_eq!(report, json!({ "ast": program.to_json().unwrap(), "output": [6, "done"] }));
    assert_eq!(report["ast"]["Program"]["statements"][0]["Assign"]["name"], "x");

    let failing = pisc::parse("print(1)\nprint(y)").unwrap();
    assert!(matches!(pisc::run_to_json(&failing),
                     Err(PiscError::Runtime(RuntimeError::UndefinedVariable { .. }))));
}

#[test]
fn out_of_range_float_literal_still_serializes() {
    let program = pisc::parse(&format!("x = {}.0", "9".repeat(400))).unwrap();
    let ast = program.to_json().unwrap();

    assert_eq!(ast["Program"]["statements"][0]["Assign"]["expr"]["Number"]["value"],
               serde_json::Value::Null);
}
