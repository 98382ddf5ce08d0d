use crate::{error::EvalError, interpreter::evaluator::core::Context};

impl Context {
    /// Replaces the top of the stack with its negation.
    ///
    /// # Errors
    /// Returns [`EvalError::MissingOperand`] if the stack is empty.
    pub(super) fn apply_negate(stack: &mut Vec<f64>, column: usize) -> Result<(), EvalError> {
        let value = stack.pop().ok_or(EvalError::MissingOperand { column })?;
        stack.push(-value);
        Ok(())
    }
}
