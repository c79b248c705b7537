#[cfg(test)]
mod parser_tests {
    use lox_expr as lox;

    use lox::expr::{BinaryOp, Expr, UnaryOp};
    use lox::parser::{parse, MAX_DEPTH};
    use lox::scanner::scan;
    use lox::{AstPrinter, LoxError};
    use pretty_assertions::assert_eq;
    use bigdecimal::BigDecimal;

    fn parse_source(source: &str) -> Result<Expr, LoxError> {
        let outcome = scan(source);
        assert!(!outcome.had_error(), "scan errors: {:?}", outcome.errors);

        parse(&outcome.tokens)
    }

    fn printed(source: &str) -> String {
        AstPrinter::print(&parse_source(source).expect("should parse"))
    }

    fn parse_error(source: &str) -> String {
        parse_source(source)
            .expect_err("should fail to parse")
            .to_string()
    }

    #[test]
    fn test_literals() {
        assert_eq!(printed("true"), "true");
        assert_eq!(printed("false"), "false");
        assert_eq!(printed("nil"), "nil");
        assert_eq!(printed("42"), "42.0");
        assert_eq!(printed("0.25"), "0.25");
        assert_eq!(printed("\"hello world\""), "hello world");
    }

    #[test]
    fn test_grouping_and_unary() {
        assert_eq!(printed("(3)"), "(group 3.0)");
        assert_eq!(printed("((\"foo\"))"), "(group (group foo))");
        assert_eq!(printed("-5"), "(- 5.0)");
        assert_eq!(printed("!!true"), "(! (! true))");
        assert_eq!(printed("- - -5"), "(- (- (- 5.0)))");
        assert_eq!(printed("-(1)"), "(- (group 1.0))");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(printed("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
        assert_eq!(printed("1 * 2 + 3"), "(+ (* 1.0 2.0) 3.0)");
        assert_eq!(printed("-1 * 2"), "(* (- 1.0) 2.0)");
        assert_eq!(
            printed("1 < 2 == 3 >= 4"),
            "(== (< 1.0 2.0) (>= 3.0 4.0))"
        );
        assert_eq!(printed("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
        assert_eq!(
            printed("\"a\" != \"b\" == false"),
            "(== (!= a b) false)"
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(printed("1 - 2 - 3"), "(- (- 1.0 2.0) 3.0)");
        assert_eq!(printed("8 / 4 / 2"), "(/ (/ 8.0 4.0) 2.0)");
        assert_eq!(printed("1 < 2 < 3"), "(< (< 1.0 2.0) 3.0)");
        assert_eq!(printed("nil == nil != true"), "(!= (== nil nil) true)");
    }

    #[test]
    fn test_tree_shape_and_operator_lines() {
        let expr = parse_source("1 +\n-2").unwrap();

        assert_eq!(
            expr,
            Expr::binary(
                Expr::literal(BigDecimal::from(1)),
                BinaryOp::Plus,
                1,
                Expr::unary(UnaryOp::Minus, 2, Expr::literal(BigDecimal::from(2))),
            )
        );
    }

    #[test]
    fn test_missing_expression() {
        assert_eq!(parse_error(""), "[line 1] Error at end: Expect expression.");
        assert_eq!(
            parse_error("(72 +"),
            "[line 1] Error at end: Expect expression."
        );
        assert_eq!(
            parse_error(")"),
            "[line 1] Error at ')': Expect expression."
        );
        assert_eq!(
            parse_error("1 +\n\n*"),
            "[line 3] Error at '*': Expect expression."
        );
        assert_eq!(
            parse_error("foo"),
            "[line 1] Error at 'foo': Expect expression."
        );
    }

    #[test]
    fn test_missing_right_paren() {
        assert_eq!(
            parse_error("(1 + 2"),
            "[line 1] Error at end: Expect ')' after expression."
        );
        assert_eq!(
            parse_error("(1 2)"),
            "[line 1] Error at '2': Expect ')' after expression."
        );
    }

    #[test]
    fn test_errors_are_syntax_errors() {
        let err = parse_source("(").unwrap_err();

        assert!(err.is_syntax());
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        assert_eq!(printed("1 2"), "1.0");
        assert_eq!(printed("(1) )"), "(group 1.0)");
    }

    #[test]
    fn test_token_slice_without_eof() {
        let err = parse(&[]).unwrap_err();

        assert_eq!(err.to_string(), "[line 1] Error at end: Expect expression.");
    }

    #[test]
    fn test_nesting_up_to_the_limit() {
        let minus_chain = format!("{}1", "-".repeat(MAX_DEPTH));
        assert!(parse_source(&minus_chain).is_ok());

        let parens = format!("{}1{}", "(".repeat(64), ")".repeat(64));
        assert!(parse_source(&parens).is_ok());
    }

    #[test]
    fn test_nesting_beyond_the_limit() {
        let minus_chain = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        let message = parse_source(&minus_chain).unwrap_err().to_string();

        assert_eq!(
            message,
            "[line 1] Error at '1': Expression nesting exceeds 256 levels."
        );

        let parens = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(parse_source(&parens).is_err());

        let mixed = format!("{}1{}", "-(".repeat(MAX_DEPTH / 2 + 1), ")".repeat(MAX_DEPTH / 2 + 1));
        assert!(parse_source(&mixed).is_err());
    }

    #[test]
    fn test_binary_chains_do_not_count_as_nesting() {
        let sum = vec!["1"; 1000].join(" + ");
        let printed_sum = printed(&sum);

        assert!(printed_sum.starts_with(&format!("{}1.0 1.0)", "(+ ".repeat(999))));
        assert!(printed_sum.ends_with(" 1.0)"));

        let mixed = vec!["2"; 5000].join(" * 1 - ");
        assert!(parse_source(&mixed).is_ok());

        let compare = vec!["1 == 1"; 2000].join(" != ");
        assert!(parse_source(&compare).is_ok());
    }

    #[test]
    fn test_very_long_chain_is_dropped_without_recursion() {
        let sum = vec!["1"; 200_000].join(" + ");
        let expr = parse_source(&sum).unwrap();

        let (leftmost, steps) = expr.unwind_left();
        assert_eq!(*leftmost, Expr::literal(BigDecimal::from(1)));
        assert_eq!(steps.len(), 199_999);

        drop(expr);
    }

    #[test]
    fn test_unwind_left_order() {
        let expr = parse_source("1 - 2 * 3 + 4").unwrap();
        let (leftmost, steps) = expr.unwind_left();

        assert_eq!(AstPrinter::print(leftmost), "1.0");

        let shape: Vec<(BinaryOp, String)> = steps
            .iter()
            .map(|(op, _, right)| (*op, AstPrinter::print(right)))
            .collect();

        assert_eq!(
            shape,
            vec![
                (BinaryOp::Minus, "(* 2.0 3.0)".to_owned()),
                (BinaryOp::Plus, "4.0".to_owned()),
            ]
        );
    }
}
