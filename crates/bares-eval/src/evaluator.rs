use crate::binary_ops::{Value, eval_binary_op};
use crate::error::{EvalError, EvalErrorKind};
use crate::postfix::PostfixTerm;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Reduces a postfix sequence to a single value with a stack machine.
///
/// Operands are pushed; an operator pops its right operand first, then its
/// left one, and pushes the result. Exactly one value must remain at the
/// end.
///
/// ```rust
/// use bares_eval::{evaluate, Postfix};
///
/// let postfix: Postfix = "10 2 3 + +".parse().unwrap();
/// assert_eq!(evaluate(&postfix), Ok(15));
/// ```
pub fn evaluate(postfix: &[PostfixTerm]) -> Result<Value, EvalError> {
    let mut stack: SmallVec<[Value; 16]> = SmallVec::new();

    for (position, term) in postfix.iter().enumerate() {
        match term {
            PostfixTerm::Operand(text) => {
                let value: Value = text
                    .parse()
                    .map_err(|_| EvalError::new(EvalErrorKind::MalformedPostfix, position))?;
                stack.push(value);
            }
            PostfixTerm::Operator(op) => {
                let right = pop(&mut stack, position)?;
                let left = pop(&mut stack, position)?;
                let value = eval_binary_op(left, *op, right)
                    .map_err(|kind| EvalError::new(kind, position))?;
                trace!(left, %op, right, value, "applied operator");
                stack.push(value);
            }
        }
    }

    match stack.as_slice() {
        [value] => {
            debug!(value, "evaluation finished");
            Ok(*value)
        }
        _ => Err(EvalError::new(EvalErrorKind::MalformedPostfix, postfix.len())),
    }
}

fn pop(stack: &mut SmallVec<[Value; 16]>, position: usize) -> Result<Value, EvalError> {
    stack
        .pop()
        .ok_or(EvalError::new(EvalErrorKind::StackUnderflow, position))
}
