use std::{cell::RefCell, io::Write, mem, rc::Rc};

use crate::{
    ast::Stmt,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes `statements` with `scope` as the current environment.
    ///
    /// The previous environment is restored when the block finishes, whether
    /// it ran to completion or stopped on an error.
    ///
    /// # Parameters
    /// - `statements`: The body of the block or function.
    /// - `scope`: The environment to run it in, usually nested in the current
    ///   environment or in a function's closure.
    pub fn execute_block(&mut self,
                         statements: &[Stmt],
                         scope: Rc<RefCell<Environment>>)
                         -> EvalResult<()> {
        let previous = mem::replace(&mut self.environment, scope);
        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));
        self.environment = previous;

        result
    }
}
