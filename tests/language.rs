use linecalc::{
    config::Config,
    get_output, get_output_with,
    interpreter::{evaluator::core::Context, output::Captured},
};

fn assert_output(src: &str, expected: &[&str]) {
    let output = get_output(src);
    assert_eq!(output, expected, "unexpected output for script:\n{src}");
}

fn assert_diagnostic(src: &str, needle: &str) {
    let output = get_output(src);
    assert!(output.iter().any(|line| line.contains(needle)),
            "expected a line containing {needle:?}, got {output:?}");
}

fn context() -> Context<Captured> {
    Context::with_output(Captured::default(), Config::default())
}

#[test]
fn assignment_infers_integer_kind() {
    assert_output("x = 5;\nprint x;", &["x = 5 (int)"]);
}

#[test]
fn typed_float_survives_plain_assignment() {
    assert_output("y(f)=3;\ny = 7;\nprint y;", &["y = 7 (float)"]);
}

#[test]
fn user_defined_function_and_calls() {
    assert_output("sq(n): n*n\nr = sq(4);\nprint r;", &["r = 16 (int)"]);
    assert_output("add(a, b): a + b\nr = add(2, 5)\nprint r", &["r = 7 (int)"]);
    assert_output("half(x): x / 2\nh = half(5)\nprint h", &["h = 2.5 (float)"]);
}

#[test]
fn print_of_missing_variable_is_reported() {
    assert_output("print missingVar;",
                  &["Error on line 1: Variable 'missingVar' is not declared."]);
}

#[test]
fn parse_error_discards_assignment() {
    assert_output("a = 1 + * 2;\nprint a;",
                  &["Error on line 1: Unexpected token '*'.",
                    "Error on line 2: Variable 'a' is not declared."]);
}

#[test]
fn integer_variables_truncate_toward_zero() {
    for value in [3.7_f64, -3.7, 0.5, -0.5, 12.999, 10_000_000_000.3] {
        let script = format!("x(i)=0\nx = {value}\nprint x");
        #[allow(clippy::cast_possible_truncation)]
        let expected = format!("x = {} (int)", value.trunc() as i64);
        assert_output(&script, &[expected.as_str()]);
    }
    assert_output("m = 2.5\nm(i)=9.99\nm = 3.7\nprint m", &["m = 3 (int)"]);
}

#[test]
fn float_variables_store_exact_values() {
    assert_output("z = 2.5\nz = 1 / 3\nprint z", &["z = 0.3333333333333333 (float)"]);
    assert_output("big = 1000000.5\nprint big", &["big = 1.0000005e+06 (float)"]);
}

#[test]
fn kind_is_fixed_by_first_assignment() {
    assert_output("z = 2.5\nz = 4\nprint z", &["z = 4 (float)"]);
    assert_output("k = 4\nk = 2.5\nprint k", &["k = 2 (int)"]);
}

#[test]
fn typed_initialization_overrides_existing_kind() {
    assert_output("n = 3\nn(f)=2\nn = 1.5\nprint n", &["n = 1.5 (float)"]);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    let mut context = context();
    assert_eq!(context.evaluate("1 / 0", 1).unwrap(), f64::INFINITY);
    assert_eq!(context.evaluate("-1 / 0", 1).unwrap(), f64::NEG_INFINITY);
    assert!(context.evaluate("0 / 0", 1).unwrap().is_nan());

    assert_output("a = 1 / 0\nb = -1 / 0\nc = 0 / 0\nprint",
                  &["== All variables ==",
                    "a = +Inf (float)",
                    "b = -Inf (float)",
                    "c = NaN (float)"]);
}

#[test]
fn precedence_and_associativity() {
    assert_output("p = 2 + 3 * 4 - 6 / 2\nprint p", &["p = 11 (int)"]);
    assert_output("q = 20 - 5 - 3\nprint q", &["q = 12 (int)"]);
    assert_output("d = 64 / 4 / 2\nprint d", &["d = 8 (int)"]);
    assert_output("g = (2 + 3) * 4\nprint g", &["g = 20 (int)"]);
    assert_output("n = -3 * -2\nprint n", &["n = 6 (int)"]);
}

#[test]
fn parameters_do_not_leak_into_the_store() {
    assert_output("f(p): p + 1\nv = f(2)\nprint v\nprint p",
                  &["v = 3 (int)", "Error on line 4: Variable 'p' is not declared."]);
}

#[test]
fn parameters_shadow_globals_without_changing_them() {
    assert_output("n = 10\nsq(n): n*n\nr = sq(3)\nprint n\nprint r",
                  &["n = 10 (int)", "r = 9 (int)"]);
    assert_output("x = 1.5\nid(x): x\nr = id(4)\nprint x\nprint r",
                  &["x = 1.5 (float)", "r = 4 (int)"]);
}

#[test]
fn function_bodies_see_globals() {
    assert_output("k = 3\nscale(x): x*k\ns = scale(2.5)\nprint s", &["s = 7.5 (float)"]);
    assert_output("scale(x): x*k\nk = 2\ns = scale(4)\nprint s", &["s = 8 (int)"]);
}

#[test]
fn function_bodies_see_parameters_of_their_callers() {
    assert_output("g(y): x + y\nf(x): g(1)\nr = f(10)\nprint r\nprint x",
                  &["r = 11 (int)", "Error on line 5: Variable 'x' is not declared."]);
}

#[test]
fn innermost_parameter_wins() {
    assert_output("g(x): x * 100\nf(x): g(x + 1) + x\nr = f(1)\nprint r", &["r = 201 (int)"]);
    assert_output("x = 7\ng(y): x + y\nf(x): g(0)\nr = f(3)\nprint r\nprint x",
                  &["r = 3 (int)", "x = 7 (int)"]);
}

#[test]
fn nested_calls_sharing_parameter_names() {
    assert_output("inc(n): n + 1\ntwice(n): inc(inc(n))\nr = twice(5)\nprint r",
                  &["r = 7 (int)"]);
}

#[test]
fn duplicate_parameters_bind_the_last_argument() {
    assert_output("d(a, a): a\nr = d(1, 2)\nprint r", &["r = 2 (int)"]);
}

#[test]
fn zero_argument_functions() {
    assert_output("five(): 5\nr = five() * 2\nprint r", &["r = 10 (int)"]);
}

#[test]
fn redefinition_replaces_function() {
    assert_output("f(x): x\nf(x): x * 10\nr = f(2)\nprint r", &["r = 20 (int)"]);
}

#[test]
fn variables_and_functions_use_separate_names() {
    assert_output("sq = 3\nsq(n): n*n\nr = sq(sq)\nprint r", &["r = 9 (int)"]);
}

#[test]
fn wrong_function_arity_is_error() {
    assert_output("add(a, b): a + b\nq = add(1)\nprint q",
                  &["Error on line 2: Function 'add' expects 2 arguments, found 1.",
                    "Error on line 3: Variable 'q' is not declared."]);
}

#[test]
fn wrong_arity_inside_a_body_evaluates_to_zero() {
    assert_output("add(a, b): a + b\nwrap(x): add(x) + 5\nr = wrap(1)\nprint r",
                  &["Error on line 3: Function 'add' expects 2 arguments, found 1.", "r = 5 (int)"]);
}

#[test]
fn undeclared_references_substitute_zero() {
    assert_output("u = ghost + 4\nprint u",
                  &["Error on line 1: Use of undeclared variable 'ghost'.", "u = 4 (int)"]);
    assert_output("w = nope(2) + 1\nprint w",
                  &["Error on line 1: Use of undeclared function 'nope'.", "w = 1 (int)"]);
}

#[test]
fn strict_policy_aborts_on_undeclared_references() {
    let output = get_output_with("u = ghost + 4\nprint u", Config::default().strict());
    assert_eq!(output,
               ["Error on line 1: Use of undeclared variable 'ghost'.",
                "Error on line 2: Variable 'u' is not declared."]);
}

#[test]
fn runaway_recursion_is_stopped() {
    let config = Config::default().with_max_call_depth(16);
    let output = get_output_with("f(x): f(x)\nr = f(1)\nprint r", config);
    assert_eq!(output,
               ["Error on line 2: Call depth limit of 16 exceeded while calling 'f'.",
                "Error on line 3: Variable 'r' is not declared."]);
}

#[test]
fn function_body_errors_are_reported_at_call_time() {
    assert_output("bad(x): x +\nr = bad(1)\nprint r",
                  &["Error on line 2: Unexpected token: end of input.", "r = 1 (int)"]);
    assert_output("half(x): (x / 2\nh = half(5)\nprint h",
                  &["Error on line 2: Expected closing parenthesis ')' but none found.",
                    "h = 2.5 (float)"]);
    assert_output("junk(x): x + * 2\nj = junk(3)\nprint j",
                  &["Error on line 2: Unexpected token '*'.", "j = 3 (int)"]);
}

#[test]
fn print_all_is_sorted_by_name() {
    assert_output("b = 2\na = 1.5\nprint",
                  &["== All variables ==", "a = 1.5 (float)", "b = 2 (int)"]);
    assert_output("print;", &["== All variables =="]);
}

#[test]
fn print_tolerates_a_stray_equals_sign() {
    assert_output("x = 4\nprint = x", &["x = 4 (int)"]);
    assert_output("x = 4\nprint=x", &["x = 4 (int)"]);
}

#[test]
fn print_must_be_a_whole_word() {
    assert_output("printer = 3\nprint printer", &["printer = 3 (int)"]);
}

#[test]
fn statement_format_errors() {
    assert_output("hello world", &["Error on line 1: Cannot parse statement: hello world"]);
    assert_output("v(q)=3\nprint v",
                  &["Error on line 1: Unknown variable type 'q'. Expected 'i' or 'f'.",
                    "Error on line 2: Variable 'v' is not declared."]);
    assert_output("f(x: x", &["Error on line 1: Invalid function definition: f(x: x"]);
    assert_output("f)x(: x", &["Error on line 1: Invalid function definition: f)x(: x"]);
    assert_output("2x = 4", &["Error on line 1: Invalid name '2x'."]);
    assert_output("g(a, 1): a", &["Error on line 1: Invalid name '1'."]);
    assert_output("v)=3", &["Error on line 1: Invalid typed initialization: v)=3"]);
}

#[test]
fn lexical_errors_are_parse_errors() {
    assert_diagnostic("x = 1 + $", "Unrecognized character '$'");
    assert_diagnostic("x = (1 + 2", "Expected closing parenthesis");
    assert_diagnostic("x = ", "end of input");
    assert_diagnostic("x = ,", "Unexpected token ','");
}

#[test]
fn text_after_a_complete_expression_is_ignored() {
    assert_output("x = 1.2.3\nprint x", &["x = 1.2 (float)"]);
    assert_output("y = 4 4\nprint y", &["y = 4 (int)"]);
    assert_output("z = 3 $ 4\nprint z", &["z = 3 (int)"]);
    assert_output("w = (2) 7)\nprint w", &["w = 2 (int)"]);
}

#[test]
fn deeply_nested_expressions_are_rejected() {
    let levels = 5_000;
    let parens = format!("x = {}1{}\nprint x", "(".repeat(levels), ")".repeat(levels));
    assert_output(&parens,
                  &["Error on line 1: Expression is nested deeper than 256 levels.",
                    "Error on line 2: Variable 'x' is not declared."]);

    assert_diagnostic(&format!("y = {}1", "-".repeat(levels)), "nested deeper than 256 levels");
    assert_diagnostic(&format!("z = 1{}", " + 1".repeat(levels)), "nested deeper than 256 levels");
    assert_diagnostic(&format!("f(a): a\nv = {}1{}", "f(".repeat(levels), ")".repeat(levels)),
                      "nested deeper than 256 levels");
}

#[test]
fn nesting_limit_is_configurable() {
    let config = Config::default().with_max_nesting(3);

    assert_eq!(get_output_with("x = -(1 + 2)\nprint x", config), ["x = -3 (int)"]);
    assert_eq!(get_output_with("x = ((-1))", config),
               ["Error on line 1: Expression is nested deeper than 3 levels."]);
    assert_eq!(get_output_with("x = 1 + 2 + 3 + 4", config),
               ["Error on line 1: Expression is nested deeper than 3 levels."]);
}

#[test]
fn typed_initialization_checks_the_tag_after_evaluating() {
    assert_output("v(q)=1 +\nprint v",
                  &["Error on line 1: Unexpected token: end of input.",
                    "Error on line 2: Variable 'v' is not declared."]);
    assert_output("w(q)=ghost",
                  &["Error on line 1: Use of undeclared variable 'ghost'.",
                    "Error on line 1: Unknown variable type 'q'. Expected 'i' or 'f'."]);
}

#[test]
fn blank_lines_and_semicolons() {
    assert_output("\n   \nx = 1;\n\nprint x;", &["x = 1 (int)"]);
    assert_output("x = 1\n\nbad", &["Error on line 3: Cannot parse statement: bad"]);
}

#[test]
fn unicode_identifiers() {
    assert_output("скорость = 12\nprint скорость", &["скорость = 12 (int)"]);
}

#[test]
fn reset_clears_the_store() {
    let mut context = context();
    context.execute_line("x = 1", 1);
    context.execute_line("f(a): a", 2);
    context.reset();
    context.execute_line("print", 3);
    context.execute_line("y = f(1)", 4);

    assert_eq!(context.output().lines(),
               ["== All variables ==", "Error on line 4: Use of undeclared function 'f'."]);
}
