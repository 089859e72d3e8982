//! # Bares Eval
//!
//! Turns the token sequence of a valid expression into a value:
//!
//! ```text
//! Vec<Token>
//!     ↓
//! to_postfix (shunting-yard, precedence + associativity)
//!     ↓
//! Postfix
//!     ↓
//! evaluate (stack machine, checked i64 arithmetic)
//!     ↓
//! i64 | EvalError
//! ```
//!
//! | Operator | Precedence | Associativity |
//! |----------|------------|---------------|
//! | `^`      | 3          | right         |
//! | `* / %`  | 2          | left          |
//! | `+ -`    | 1          | left          |
//!
//! Both stages are pure functions of their input and keep no state between
//! calls.

pub mod binary_ops;
pub mod error;
mod evaluator;
pub mod operator;
pub mod postfix;

pub use binary_ops::{Value, checked_pow};
pub use error::{ConvertError, EvalError, EvalErrorKind};
pub use evaluator::evaluate;
pub use operator::{Associativity, Operator};
pub use postfix::{Postfix, PostfixTerm, to_postfix};
