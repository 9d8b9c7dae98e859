use crate::ast::*;
use crate::error::*;
use crate::fraction::Fraction;
use crate::interpreter::*;
use crate::parser::*;
use crate::value::Number;

fn eval(source: &str) -> Result<Number, CalcError> {
    let tree = parse(source)?;
    let mut interpreter = Interpreter::new();

    interpreter.evaluate(tree)
}

fn eval_text(source: &str) -> Result<String, CalcError> {
    eval(source).map(|number| number.to_string())
}

#[test]
fn test_eval_literals() {
    assert_eq!(eval("42"), Ok(Number::Integer(42)));
    assert_eq!(eval("4.5"), Ok(Number::Float(4.5)));
    assert_eq!(eval("-3"), Ok(Number::Integer(-3)));
}

#[test]
fn test_eval_integers() {
    assert_eq!(eval("1+2"), Ok(Number::Integer(3)));
    assert_eq!(eval("4+3*2"), Ok(Number::Integer(10)));
    assert_eq!(eval("(4+3)*2"), Ok(Number::Integer(14)));
    assert_eq!(eval("2^10"), Ok(Number::Integer(1024)));
    assert_eq!(eval("6/3"), Ok(Number::Integer(2)));
    assert_eq!(eval("2+-5"), Ok(Number::Integer(-3)));
}

#[test]
fn test_eval_left_to_right() {
    assert_eq!(eval("8-2-2"), Ok(Number::Integer(4)));
    assert_eq!(eval("8-2+2"), Ok(Number::Integer(8)));
    assert_eq!(eval("8-2-2+1"), Ok(Number::Integer(5)));
    assert_eq!(eval("8/2/2"), Ok(Number::Integer(2)));
    assert_eq!(eval("1/3*3"), Ok(Number::Integer(1)));
    assert_eq!(eval("1-2*3+4"), Ok(Number::Integer(-1)));
    assert_eq!(eval("2*(8-2-2)"), Ok(Number::Integer(8)));
    assert_eq!(eval("10-2*3-1"), Ok(Number::Integer(3)));
    assert_eq!(eval("2^3^2"), Ok(Number::Integer(512)));
}

#[test]
fn test_eval_fractions() {
    assert_eq!(eval("5/7"), Ok(Number::Fraction(Fraction::new(5, 7).unwrap())));
    assert_eq!(eval_text("5/7"), Ok("5 / 7".to_string()));
    assert_eq!(eval_text("2/4"), Ok("1 / 2".to_string()));
    assert_eq!(eval_text("1/3+1/3"), Ok("2 / 3".to_string()));
    assert_eq!(eval_text("1/2+1/2"), Ok("1".to_string()));
    assert_eq!(eval_text("-1/2"), Ok("-1 / 2".to_string()));
}

#[test]
fn test_eval_floats() {
    assert_eq!(eval_text("5+ 3.8"), Ok("8.800000".to_string()));
    assert_eq!(eval_text("5/7."), Ok("0.714286".to_string()));
    assert_eq!(eval_text("5*3*3+((4.3+3*5)+24)*3/7"), Ok("63.557143".to_string()));
    assert_eq!(eval_text("4^0.5"), Ok("2.000000".to_string()));
    assert_eq!(eval_text("1/2+0.5"), Ok("1.000000".to_string()));
    assert_eq!(eval_text("(1/2)^3"), Ok("0.125000".to_string()));
}

#[test]
fn test_eval_zero_exponent() {
    assert_eq!(eval("5^0"), Ok(Number::Integer(1)));
    assert_eq!(eval(".5^0"), Ok(Number::Integer(1)));
    assert_eq!(eval("0^0"), Ok(Number::Integer(1)));
}

#[test]
fn test_eval_negative_integer_exponent() {
    // Repeated multiplication runs zero times.
    assert_eq!(eval("2^-2"), Ok(Number::Integer(1)));
    assert_eq!(eval("(1/2)^-1"), Ok(Number::Float(2.0)));
    assert_eq!(eval_text("2.0^-1"), Ok("0.500000".to_string()));
}

#[test]
fn test_eval_negated_group() {
    assert_eq!(eval("-(2+3)"), Ok(Number::Integer(-5)));
    assert_eq!(eval("-(2+3)^2"), Ok(Number::Integer(-25)));
    assert_eq!(eval("6/-(2+1)"), Ok(Number::Integer(-2)));
}

#[test]
fn test_eval_incomplete_input() {
    assert_eq!(eval("5+"), Ok(Number::Integer(5)));
    assert_eq!(eval("5*"), Ok(Number::Integer(0)));
    assert_eq!(eval("5)))"), Ok(Number::Integer(5)));
    assert_eq!(eval("(((5"), Ok(Number::Integer(5)));
}

#[test]
fn test_eval_division_by_zero() {
    assert_eq!(eval("5/0"), Err(CalcError::division_by_zero()));
    assert_eq!(eval("5/0."), Err(CalcError::division_by_zero()));
    assert_eq!(eval("5./0"), Err(CalcError::division_by_zero()));
    assert_eq!(eval("1/(2-2)"), Err(CalcError::division_by_zero()));
}

#[test]
fn test_eval_zero_after_division() {
    assert_eq!(eval("6/2*0"), Ok(Number::Integer(0)));
    assert_eq!(eval("6/2*0.0"), Ok(Number::Float(0.0)));
    assert_eq!(eval("1/3*(2-2)"), Ok(Number::Integer(0)));
    assert_eq!(eval("6/3*0+1"), Ok(Number::Integer(1)));
    assert_eq!(eval("3/1*((1*2-2))-3"), Ok(Number::Integer(-3)));
    assert_eq!(eval("4/(4+4)*-3*(2-2)"), Ok(Number::Integer(0)));
}

#[test]
fn test_eval_overflow_falls_back_to_float() {
    assert_eq!(eval("9223372036854775807+1"), Ok(Number::Float(9223372036854775808.0)));
    assert_eq!(eval("2^64"), Ok(Number::Float(18446744073709551616.0)));
}

#[test]
fn test_eval_empty_tree() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate(ExpressionTree::default()), Err(CalcError::IncompleteExpression));
}

#[test]
fn test_eval_records_steps() {
    let tree = parse("5*3+1").unwrap();
    let mut interpreter = Interpreter::with_steps();
    assert_eq!(interpreter.evaluate(tree), Ok(Number::Integer(16)));
    assert_eq!(interpreter.steps(), &[
        Reduction {
            left: Number::Integer(5),
            operator: Operator::Multiply,
            right: Number::Integer(3),
            result: Number::Integer(15),
        },
        Reduction {
            left: Number::Integer(15),
            operator: Operator::Add,
            right: Number::Integer(1),
            result: Number::Integer(16),
        },
    ]);
    assert_eq!(interpreter.steps()[0].to_string(), "5 * 3 = 15");
}

#[test]
fn test_eval_without_steps() {
    let tree = parse("1+2").unwrap();
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate(tree), Ok(Number::Integer(3)));
    assert!(interpreter.steps().is_empty());
}
