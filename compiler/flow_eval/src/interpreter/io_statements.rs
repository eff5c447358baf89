//! `print` and the host I/O builtins.

use flow_ir::ExprId;

use super::Interpreter;
use crate::errors::{null_conversion, type_mismatch, EvalError};
use crate::value::Value;
use crate::EvalResult;

impl Interpreter<'_> {
    /// `print(e);` appends the textual form of `e` and a newline;
    /// `print();` appends just the newline.
    pub(super) fn exec_print(&mut self, value: Option<ExprId>) -> Result<(), EvalError> {
        match value {
            Some(id) => {
                let value = self.eval_expr(id)?;
                self.output.println(&value.to_string());
            }
            None => self.output.println(""),
        }
        Ok(())
    }

    /// `writeFile(path, content);`
    pub(super) fn exec_write_file(&mut self, path: ExprId, content: ExprId) -> Result<(), EvalError> {
        let path = self.eval_text(path)?;
        let content = self.eval_text(content)?;
        self.io.write_file(&path, &content)?;
        Ok(())
    }

    pub(super) fn eval_read_file(&mut self, path: ExprId) -> EvalResult {
        let path = self.eval_text(path)?;
        Ok(Value::Str(self.io.read_file(&path)?))
    }

    pub(super) fn eval_read_char(&mut self) -> EvalResult {
        Ok(Value::Char(self.io.read_char()?))
    }

    pub(super) fn eval_read_line(&mut self) -> EvalResult {
        Ok(Value::Str(self.io.read_line()?))
    }

    /// Evaluate an operand that must be a String.
    fn eval_text(&mut self, id: ExprId) -> Result<String, EvalError> {
        match self.eval_expr(id)? {
            Value::Str(text) => Ok(text),
            Value::Unit => Err(null_conversion()),
            other => Err(type_mismatch("String", other.type_name())),
        }
    }
}
