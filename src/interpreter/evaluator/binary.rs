use log::trace;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Context, lexer::BinaryOperator},
};

impl Context {
    /// Evaluates a binary arithmetic operation on two values.
    ///
    /// `left` is the operand pushed first and `right` the one pushed last, so
    /// `10 3 -` computes `10 - 3`. Division checks for a zero divisor before
    /// dividing.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by `0.0` or `-0.0`.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, lexer::BinaryOperator};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Subtract, 10.0, 3.0, 1).unwrap(), 7.0);
    /// assert!(Context::eval_binary(BinaryOperator::Divide, 6.0, 0.0, 5).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       column: usize)
                       -> Result<f64, EvalError> {
        Ok(match op {
               BinaryOperator::Add => left + right,
               BinaryOperator::Subtract => left - right,
               BinaryOperator::Multiply => left * right,
               BinaryOperator::Divide => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero { column });
                   }
                   left / right
               },
           })
    }

    /// Pops two values, applies `op` and pushes the result.
    pub(super) fn apply_binary(op: BinaryOperator,
                               stack: &mut Vec<f64>,
                               column: usize)
                               -> Result<(), EvalError> {
        let [.., left, right] = *stack.as_slice() else {
            return Err(EvalError::InsufficientOperands { column });
        };
        stack.truncate(stack.len() - 2);
        let result = Self::eval_binary(op, left, right, column)?;
        trace!("{left} {op} {right} = {result}");
        stack.push(result);
        Ok(())
    }
}
