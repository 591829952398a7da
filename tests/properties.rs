use proptest::prelude::*;
use quotient::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Operation, RuntimeError},
    interpreter::{
        evaluator::evaluate,
        parser::parse,
        postfix::{eval_postfix, to_postfix},
    },
};

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![4 => 0i64..1000, 1 => 0i64..3, 1 => 0..=i64::MAX];
    let leaf = leaf.prop_map(Expr::number);
    leaf.prop_recursive(6, 48, 2, |inner| {
            let unary = prop_oneof![Just(UnaryOperator::Plus), Just(UnaryOperator::Minus)];
            let binary = prop_oneof![Just(BinaryOperator::Add),
                                     Just(BinaryOperator::Sub),
                                     Just(BinaryOperator::Mul),
                                     Just(BinaryOperator::Div)];
            prop_oneof![(unary, inner.clone()).prop_map(|(op, expr)| Expr::unary(op, expr)),
                        (inner.clone(), binary, inner).prop_map(|(left, op, right)| {
                                                          Expr::binary(left, op, right)
                                                      })]
        })
}

/// Renders a tree as fully parenthesized infix text.
fn infix(expr: &Expr) -> String {
    match expr {
        Expr::Number { value } => value.to_string(),
        Expr::UnaryOp { op, expr } => format!("{}({})", op.symbol(), infix(expr)),
        Expr::BinaryOp { left, op, right } => {
            format!("({}) {} ({})", infix(left), op.symbol(), infix(right))
        },
    }
}

/// Reference arithmetic in `i128`, where no intermediate `i64` result can
/// overflow, so range checks and truncation are spelled out by hand.
fn reference_value(expr: &Expr) -> Result<i64, RuntimeError> {
    let checked = |value: i128, operation| {
        i64::try_from(value).map_err(|_| RuntimeError::Overflow { operation })
    };
    match expr {
        Expr::Number { value } => Ok(*value),
        Expr::UnaryOp { op, expr } => {
            let value = i128::from(reference_value(expr)?);
            match op {
                UnaryOperator::Plus => checked(value, Operation::Unary(*op)),
                UnaryOperator::Minus => checked(-value, Operation::Unary(*op)),
            }
        },
        Expr::BinaryOp { left, op, right } => {
            let a = i128::from(reference_value(left)?);
            let b = i128::from(reference_value(right)?);
            let value = match op {
                BinaryOperator::Add => a + b,
                BinaryOperator::Sub => a - b,
                BinaryOperator::Mul => a * b,
                BinaryOperator::Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    let magnitude = a.abs() / b.abs();
                    if (a < 0) == (b < 0) { magnitude } else { -magnitude }
                },
            };
            checked(value, Operation::Binary(*op))
        },
    }
}

/// Inserts arbitrary whitespace between the characters of `source`.
fn spaced(source: &str, gaps: &[u8]) -> String {
    let mut out = String::new();
    for (i, c) in source.chars().enumerate() {
        out.push(c);
        if gaps.get(i).copied().unwrap_or(0) % 3 == 0 && !c.is_ascii_digit() {
            out.push(' ');
        }
    }
    out
}

proptest! {
    #[test]
    fn parsing_rendered_infix_restores_the_tree(expr in arb_expr()) {
        prop_assert_eq!(parse(&infix(&expr)), Ok(expr));
    }

    #[test]
    fn evaluation_matches_reference_arithmetic(expr in arb_expr()) {
        let tree = parse(&infix(&expr)).unwrap();
        prop_assert_eq!(evaluate(&tree), reference_value(&expr));
    }

    #[test]
    fn stack_machine_agrees_with_tree_walk(expr in arb_expr()) {
        prop_assert_eq!(eval_postfix(&to_postfix(&expr)), evaluate(&expr));
    }

    #[test]
    fn whitespace_does_not_change_the_tree(expr in arb_expr(),
                                           gaps in proptest::collection::vec(any::<u8>(), 0..512)) {
        let source = infix(&expr);
        prop_assert_eq!(parse(&spaced(&source, &gaps)), parse(&source));
    }

    #[test]
    fn evaluation_is_deterministic(expr in arb_expr()) {
        prop_assert_eq!(evaluate(&expr), evaluate(&expr));
    }
}
