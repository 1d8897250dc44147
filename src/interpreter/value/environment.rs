use std::{collections::BTreeMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// What a name is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A runtime value, bound by a call or lambda parameter.
    Value(Value),
    /// A registered function definition.
    Function(Rc<FunctionDef>),
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Function(def) => write!(f, "{def}"),
        }
    }
}

/// The active mapping from names to values and function definitions.
///
/// Functions and variables share one namespace. Cloning an environment is how
/// a call gets its own scope: the callee sees a copy of the caller's bindings
/// with its parameters layered on top.
///
/// Names are kept ordered so that diagnostic output is deterministic.
///
/// # Example
/// ```
/// use lambd::interpreter::value::{core::Value,
///                                 environment::{Binding, Environment}};
///
/// let mut env = Environment::new();
/// env.define_value("x", Value::Integer(1));
///
/// let mut inner = env.clone();
/// inner.define_value("x", Value::Integer(2));
///
/// assert_eq!(env.get("x"), Some(&Binding::Value(Value::Integer(1))));
/// assert_eq!(inner.get("x"), Some(&Binding::Value(Value::Integer(2))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: BTreeMap<String, Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Binds `name` to a value, replacing any previous binding.
    pub fn define_value(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), Binding::Value(value));
    }

    /// Registers a function definition under its own name, replacing any
    /// previous binding.
    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        self.bindings.insert(def.name.clone(), Binding::Function(def));
    }

    /// Returns the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(name, binding)| (name.as_str(), binding))
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (name, binding)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {binding}")?;
        }
        write!(f, "}}")
    }
}
