use fcalc_lang::{
    BinaryOp, CompactString, Constant, Engine, FlatExpr, InnerError, Lexeme, LexerOptions, Number,
    ParseError, UnaryOp,
};
use rstest::{fixture, rstest};

#[fixture]
fn engine() -> Engine {
    Engine::new(LexerOptions::default()).unwrap()
}

#[rstest]
#[case::precedence("2 + 3 * 4", "(+ 2 (* 3 4))")]
#[case::strict_tiers("8 - 4 + 2", "(+ (- 8 4) 2)")]
#[case::sub_is_right_nested("10 - 2 - 3", "(- 10 (- 2 3))")]
#[case::grouped("(2 + 3) * 4", "(* (+ 2 3) 4)")]
#[case::grouped_exponent("2 ^ (1 + 1)", "(^ 2 (+ 1 1))")]
#[case::negated_power("-2 ^ 2", "(- (^ 2 2))")]
#[case::sqrt("√(9) + 1", "(+ (√ 9) 1)")]
#[case::assignment("A = pi * r ^ 2", "(= (A) (* π (^ (r) 2)))")]
#[case::decimal("0.5 * tau", "(* 0.5 τ)")]
#[case::sample("v = 3 * 2 + 1 - b ^ 2 / i", "(= (v) (+ (* 3 2) (- 1 (/ (^ (b) 2) i))))")]
fn test_parse(engine: Engine, #[case] code: &str, #[case] expected: &str) {
    let expr = engine.parse(code).unwrap();
    assert_eq!(expr.to_sexpr().as_deref(), Some(expected));
}

#[rstest]
fn test_leading_operator_and_subtree_bounds(engine: Engine) {
    let expr = engine.parse("2 + 3 * 4").unwrap();

    assert!(expr.root().is_some_and(|root| root.is_binary_op(BinaryOp::Add)));
    let right = expr.right_operand(0).unwrap();
    let mul = expr
        .iter()
        .position(|lexeme| lexeme.is_binary_op(BinaryOp::Mul))
        .unwrap();
    assert_eq!(mul, right);
    assert_eq!(expr.subtree_end(mul), Some(expr.len()));
    assert_eq!(expr.subtree_end(expr.left_operand(0).unwrap()), Some(right));
}

#[rstest]
fn test_unary_and_binary_minus(engine: Engine) {
    let negated = engine.classify("-3 + 4").unwrap();
    assert_eq!(negated[0], Lexeme::Unary(UnaryOp::Negate));

    let subtracted = engine.classify("3 - 4").unwrap();
    assert_eq!(subtracted[1], Lexeme::binary(BinaryOp::Sub));
}

#[rstest]
fn test_decimal_literal(engine: Engine) {
    let lexemes = engine.classify("3.14").unwrap();
    assert_eq!(lexemes, vec![Lexeme::Number(Number::new(314, 100))]);
}

#[rstest]
#[case::empty("", 0)]
#[case::single("42", 1)]
#[case::pair("x y", 2)]
#[case::lone_operator("+", 1)]
fn test_short_input_is_unchanged(engine: Engine, #[case] code: &str, #[case] len: usize) {
    let classified = engine.classify(code).unwrap();
    let expr = engine.parse(code).unwrap();
    assert_eq!(expr.len(), len);
    assert_eq!(expr.as_slice(), classified.as_slice());
}

#[rstest]
#[case::adjacent_values("3 4 + 5", InnerError::Parse(ParseError::MalformedExpression(1)))]
#[case::adjacent_sample(
    "v = 3 * 2 + 1 - aπb ^ 2 / i",
    InnerError::Parse(ParseError::MalformedExpression(9))
)]
#[case::missing_operand("1 * + 2", InnerError::Parse(ParseError::MalformedExpression(2)))]
#[case::unclosed("2 * (3 + 4", InnerError::Parse(ParseError::UnbalancedParens(2)))]
#[case::unopened("2 * 3) + 4", InnerError::Parse(ParseError::UnbalancedParens(3)))]
fn test_parse_errors(engine: Engine, #[case] code: &str, #[case] expected: InnerError) {
    let err = engine.parse(code).unwrap_err();
    assert_eq!(err.cause, expected);
    assert_eq!(err.source_code, code);
}

#[rstest]
fn test_deep_grouping(engine: Engine) {
    let redundant = format!("{}1{} + 2", "(".repeat(130), ")".repeat(130));
    assert_eq!(engine.parse(&redundant).unwrap().to_string(), "+ 1 2");

    let nested = format!("{}1{}", "(".repeat(8000), ")".repeat(8000));
    let err = engine.parse(&nested).unwrap_err();
    assert_eq!(
        err.cause,
        InnerError::Parse(ParseError::NestingTooDeep(fcalc_lang::MAX_NESTING))
    );
    assert_eq!(err.location.offset(), fcalc_lang::MAX_NESTING);
}

#[rstest]
fn test_long_chain(engine: Engine) {
    let code = vec!["1"; 4000].join(" - ");
    let expr = engine.parse(&code).unwrap();
    assert_eq!(expr.len(), 7999);
    assert_eq!(expr.subtree_end(0), Some(expr.len()));
}

#[rstest]
fn test_invalid_utf8(engine: Engine) {
    let err = engine.tokenize_bytes(b"12 + \xc3\x28").unwrap_err();
    match err.cause {
        InnerError::Pattern(pattern) => assert_eq!(pattern.offset, Some(5)),
        cause => panic!("unexpected cause: {cause:?}"),
    }
}

#[rstest]
fn test_diagnostic_renders(engine: Engine) {
    let err = engine.parse("1 + (2 * 3").unwrap_err();
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("ParseError::UnbalancedParens"));
}

#[rstest]
#[case::add(Lexeme::binary(BinaryOp::Add))]
#[case::exp(Lexeme::binary(BinaryOp::Exp))]
#[case::assign(Lexeme::binary(BinaryOp::Assign))]
#[case::sqrt(Lexeme::Unary(UnaryOp::Sqrt))]
#[case::pi(Lexeme::Constant(Constant::Pi))]
#[case::tau(Lexeme::Constant(Constant::Tau))]
#[case::integer(Lexeme::number(12, 1))]
#[case::decimal(Lexeme::number(125, 100))]
fn test_render_round_trip(engine: Engine, #[case] lexeme: Lexeme) {
    let rendered = lexeme.to_string();
    assert_eq!(engine.classify(&rendered).unwrap(), vec![lexeme]);
}

#[test]
fn test_compact_string_boundary() {
    let inline = CompactString::new("12345678");
    let spilled = CompactString::new("123456789");

    assert_eq!(inline.is_inline(), inline.len() <= fcalc_lang::INLINE_CAPACITY);
    assert!(!spilled.is_inline());

    for original in [inline, spilled] {
        let mut copy = original.clone();
        assert_eq!(copy, original);

        let taken = copy.take();
        assert_eq!(taken, original);
        assert!(copy.is_empty());
    }

    assert_eq!(CompactString::new("short"), CompactString::from("short".to_string()));
}

#[test]
fn test_top_level_helpers() {
    assert_eq!(fcalc_lang::tokenize("").unwrap(), Vec::<Lexeme>::new());
    assert_eq!(fcalc_lang::tokenize("1+1").unwrap().len(), 3);

    let expr: FlatExpr = fcalc_lang::parse("1 + 1").unwrap();
    assert_eq!(expr.to_string(), "+ 1 1");
}

#[test]
fn test_custom_pattern() {
    let engine = Engine::new(LexerOptions {
        pattern: Some(r"\d+(?:\.\d+)?|[a-z]+|\S".to_string()),
        capacity: 8,
    })
    .unwrap();

    let expr = engine.parse("speed * 2").unwrap();
    assert_eq!(expr.to_sexpr().as_deref(), Some("(* (speed) 2)"));
}
