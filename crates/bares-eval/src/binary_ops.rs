use crate::error::EvalErrorKind;
use crate::operator::Operator;
use bares_syntax::TargetInt;

pub type Value = i64;

/// Applies `op` to two stack values. Every operation is checked; nothing
/// wraps silently.
pub fn eval_binary_op(left: Value, op: Operator, right: Value) -> Result<Value, EvalErrorKind> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(EvalErrorKind::IntegerOverflow),
        Operator::Sub => left.checked_sub(right).ok_or(EvalErrorKind::IntegerOverflow),
        Operator::Mul => left.checked_mul(right).ok_or(EvalErrorKind::IntegerOverflow),
        Operator::Div => eval_div(left, right),
        Operator::Rem => eval_rem(left, right),
        Operator::Pow => eval_pow(left, right),
    }
}

fn eval_div(left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    if right == 0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    left.checked_div(right).ok_or(EvalErrorKind::IntegerOverflow)
}

fn eval_rem(left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    if right == 0 {
        return Err(EvalErrorKind::ModuloByZero);
    }
    left.checked_rem(right).ok_or(EvalErrorKind::IntegerOverflow)
}

/// Powers must fit the literal width, `TargetInt`.
fn eval_pow(base: Value, exponent: Value) -> Result<Value, EvalErrorKind> {
    let exponent = u64::try_from(exponent).map_err(|_| EvalErrorKind::NegativeExponent)?;
    let power = checked_pow(base, exponent).ok_or(EvalErrorKind::IntegerOverflow)?;
    TargetInt::try_from(power)
        .map(Value::from)
        .map_err(|_| EvalErrorKind::IntegerOverflow)
}

/// Exponentiation by repeated squaring. `None` on overflow.
pub fn checked_pow(mut base: Value, mut exponent: u64) -> Option<Value> {
    let mut result: Value = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exponent >>= 1;
        // the last square is never used
        if exponent > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}
