use flow_ir::{BinaryOp, RelOp};

use super::*;
use crate::errors::EvalErrorKind;
use crate::scope::ScopeId;
use crate::value::ObjectHandle;

fn str(s: &str) -> Value {
    Value::Str(s.to_string())
}

fn kind(result: EvalResult) -> EvalErrorKind {
    match result {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(err) => err.kind,
    }
}

fn object(class: &str, scope: u32) -> Value {
    Value::Object(ObjectHandle::detached(class, ScopeId::new(scope)))
}

mod binary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_arithmetic_truncates() {
        let cases = [
            (BinaryOp::Add, 7, 2, 9),
            (BinaryOp::Sub, 7, 2, 5),
            (BinaryOp::Mul, 7, 2, 14),
            (BinaryOp::Div, 7, 2, 3),
            (BinaryOp::Div, -7, 2, -3),
            (BinaryOp::Mod, 7, 2, 1),
            (BinaryOp::Mod, -7, 2, -1),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(
                evaluate_binary(&Value::Int(a), &Value::Int(b), op),
                Ok(Value::Int(expected)),
                "{a} {} {b}",
                op.as_symbol()
            );
        }
    }

    #[test]
    fn double_arithmetic() {
        assert_eq!(
            evaluate_binary(&Value::Double(1.5), &Value::Double(2.0), BinaryOp::Mul),
            Ok(Value::Double(3.0))
        );
        assert_eq!(
            evaluate_binary(&Value::Double(1.0), &Value::Double(0.0), BinaryOp::Div),
            Ok(Value::Double(f64::INFINITY))
        );
    }

    #[test]
    fn int_faults_are_fatal() {
        let zero = Value::Int(0);
        let one = Value::Int(1);
        assert_eq!(
            kind(evaluate_binary(&one, &zero, BinaryOp::Div)),
            EvalErrorKind::DivisionByZero
        );
        assert_eq!(
            kind(evaluate_binary(&one, &zero, BinaryOp::Mod)),
            EvalErrorKind::ModuloByZero
        );
        assert_eq!(
            kind(evaluate_binary(&Value::Int(i64::MAX), &one, BinaryOp::Add)),
            EvalErrorKind::IntegerOverflow {
                operation: "addition"
            }
        );
        assert_eq!(
            kind(evaluate_binary(
                &Value::Int(i64::MIN),
                &Value::Int(-1),
                BinaryOp::Div
            )),
            EvalErrorKind::IntegerOverflow {
                operation: "division"
            }
        );
    }

    #[test]
    fn string_concatenation_uses_textual_forms() {
        assert_eq!(
            evaluate_binary(&str("n="), &Value::Int(4), BinaryOp::Add),
            Ok(str("n=4"))
        );
        assert_eq!(
            evaluate_binary(&Value::Double(2.0), &str("!"), BinaryOp::Add),
            Ok(str("2.0!"))
        );
        assert_eq!(
            evaluate_binary(&str("a"), &Value::Unit, BinaryOp::Add),
            Ok(str("a"))
        );
    }

    #[test]
    fn strings_only_support_plus() {
        assert_eq!(
            kind(evaluate_binary(&str("a"), &str("b"), BinaryOp::Sub)),
            EvalErrorKind::InvalidOperator {
                op: "-",
                type_name: "String".to_string()
            }
        );
    }

    #[test]
    fn mixed_numeric_types_mismatch() {
        assert_eq!(
            kind(evaluate_binary(&Value::Int(1), &Value::Double(1.0), BinaryOp::Add)),
            EvalErrorKind::TypeMismatch {
                expected: "Int".to_string(),
                got: "Double".to_string()
            }
        );
    }

    #[test]
    fn non_numeric_same_type_is_invalid() {
        assert!(matches!(
            kind(evaluate_binary(&Value::Bool(true), &Value::Bool(false), BinaryOp::Add)),
            EvalErrorKind::InvalidOperator { .. }
        ));
        assert!(matches!(
            kind(evaluate_binary(&object("P", 1), &object("P", 2), BinaryOp::Mul)),
            EvalErrorKind::InvalidOperator { .. }
        ));
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn orders_numbers_strings_chars() {
        assert_eq!(
            evaluate_comparison(&Value::Int(1), &Value::Int(2), RelOp::Lt),
            Ok(true)
        );
        assert_eq!(
            evaluate_comparison(&Value::Double(2.0), &Value::Double(2.0), RelOp::GtEq),
            Ok(true)
        );
        assert_eq!(
            evaluate_comparison(&str("abc"), &str("abd"), RelOp::Gt),
            Ok(false)
        );
        assert_eq!(
            evaluate_comparison(&Value::Char('a'), &Value::Char('b'), RelOp::LtEq),
            Ok(true)
        );
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Double(f64::NAN);
        for op in [RelOp::Lt, RelOp::Gt, RelOp::LtEq, RelOp::GtEq, RelOp::Eq] {
            assert_eq!(evaluate_comparison(&nan, &nan, op), Ok(false));
        }
        assert_eq!(evaluate_comparison(&nan, &nan, RelOp::NotEq), Ok(true));
    }

    #[test]
    fn operands_must_share_a_type() {
        assert!(matches!(
            evaluate_comparison(&Value::Int(1), &str("1"), RelOp::Eq),
            Err(err) if matches!(err.kind, EvalErrorKind::TypeMismatch { .. })
        ));
    }

    #[test]
    fn equality_on_every_type() {
        assert_eq!(
            evaluate_comparison(&Value::Bool(true), &Value::Bool(true), RelOp::Eq),
            Ok(true)
        );
        assert_eq!(
            evaluate_comparison(&Value::Unit, &Value::Unit, RelOp::NotEq),
            Ok(false)
        );
        assert_eq!(
            evaluate_comparison(&object("P", 1), &object("P", 2), RelOp::Eq),
            Ok(false)
        );
    }

    #[test]
    fn ordering_booleans_is_invalid() {
        assert!(matches!(
            evaluate_comparison(&Value::Bool(true), &Value::Bool(false), RelOp::Lt),
            Err(err) if err.kind == EvalErrorKind::InvalidOperator {
                op: "<",
                type_name: "Boolean".to_string()
            }
        ));
    }
}

mod unary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negate_numbers() {
        assert_eq!(evaluate_negate(&Value::Int(3)), Ok(Value::Int(-3)));
        assert_eq!(evaluate_negate(&Value::Double(0.5)), Ok(Value::Double(-0.5)));
        assert_eq!(
            kind(evaluate_negate(&Value::Int(i64::MIN))),
            EvalErrorKind::IntegerOverflow {
                operation: "negation"
            }
        );
        assert!(matches!(
            kind(evaluate_negate(&str("x"))),
            EvalErrorKind::InvalidOperator { op: "-", .. }
        ));
    }

    #[test]
    fn to_string_rejects_unit() {
        assert_eq!(to_string_value(&Value::Int(12)), Ok(str("12")));
        assert_eq!(to_string_value(&Value::Bool(true)), Ok(str("true")));
        assert_eq!(kind(to_string_value(&Value::Unit)), EvalErrorKind::NullConversion);
    }
}
