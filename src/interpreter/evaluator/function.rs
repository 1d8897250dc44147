use std::{
    ops::{Deref, DerefMut},
    rc::Rc,
};

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{
            core::Value,
            environment::{Binding, Environment},
        },
    },
};

/// Name reported in errors raised by lambda applications.
const LAMBDA_NAME: &str = "Lambd";

impl Interpreter {
    /// Calls a user-defined function.
    ///
    /// The name must be bound to a function definition, and the number of
    /// arguments must match its parameters. Arguments are evaluated in the
    /// caller's environment, then the body runs in a copy of that environment
    /// extended with the parameter bindings. The caller's environment is
    /// restored afterwards, including when the body fails.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is unbound.
    /// - `NotAFunction` if `name` is bound to a value.
    /// - `ArgumentCountMismatch` on an arity mismatch.
    /// - `RecursionLimitExceeded` if the call would exceed the configured
    ///   depth.
    /// - Any error raised by an argument or by the body.
    ///
    /// # Example
    /// ```
    /// use lambd::{get_result, interpreter::value::core::Value};
    ///
    /// let source = "Defun { fact, (n) } if (n <= 1) { 1 } else { n * fact(n - 1) }\nfact(5)";
    /// assert_eq!(get_result(source).unwrap(), Some(Value::Integer(120)));
    /// ```
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Option<Value>> {
        let def = match self.env.get(name) {
            Some(Binding::Function(def)) => Rc::clone(def),
            Some(Binding::Value(_)) => {
                return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                        line });
            },
            None => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           line });
            },
        };

        self.apply(&def.name, &def.params, arguments, &def.body, line)
    }

    /// Applies a lambda to its arguments.
    ///
    /// Follows the same protocol as a named call; errors name the callee
    /// `Lambd`.
    pub(crate) fn eval_lambda(&mut self,
                              params: &[String],
                              arguments: &[Expr],
                              body: &Expr,
                              line: usize)
                              -> EvalResult<Option<Value>> {
        self.apply(LAMBDA_NAME, params, arguments, body, line)
    }

    fn apply(&mut self,
             name: &str,
             params: &[String],
             arguments: &[Expr],
             body: &Expr,
             line: usize)
             -> EvalResult<Option<Value>> {
        if params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        let values = arguments.iter()
                              .map(|arg| self.eval_child(arg, line))
                              .collect::<EvalResult<Vec<_>>>()?;

        let mut callee_env = self.env.clone();
        for (param, value) in params.iter().zip(values) {
            callee_env.define_value(param, value);
        }

        let mut scope = CallScope::enter(self, callee_env, line)?;
        trace!(function = name, depth = scope.depth, "entering call");
        let result = scope.eval(body);
        trace!(function = name, depth = scope.depth, ok = result.is_ok(), "leaving call");

        result
    }
}

/// An active function or lambda application.
///
/// While the scope lives, the interpreter runs in the callee's environment.
/// Dropping it puts the caller's environment back and releases one level of
/// call depth, on success and on error alike.
struct CallScope<'a> {
    interpreter: &'a mut Interpreter,
    saved_env:   Environment,
}

impl<'a> CallScope<'a> {
    fn enter(interpreter: &'a mut Interpreter,
             callee_env: Environment,
             line: usize)
             -> EvalResult<Self> {
        let limit = interpreter.config.max_call_depth;
        if interpreter.depth >= limit {
            return Err(RuntimeError::RecursionLimitExceeded { limit, line });
        }

        interpreter.depth += 1;
        let saved_env = std::mem::replace(&mut interpreter.env, callee_env);

        Ok(Self { interpreter,
                  saved_env })
    }
}

impl Deref for CallScope<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Drop for CallScope<'_> {
    fn drop(&mut self) {
        self.interpreter.env = std::mem::take(&mut self.saved_env);
        self.interpreter.depth -= 1;
    }
}
