use std::fmt;

use crate::Type;

/// The signature of a computation: an optional parameter and a result.
///
/// A missing parameter means the computation takes no argument, which renders
/// as `( -> R)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    parameter: Option<Box<Type>>,
    result: Box<Type>,
}

impl FunctionType {
    #[must_use]
    pub fn new(parameter: Option<Type>, result: impl Into<Type>) -> Self {
        Self {
            parameter: parameter.map(Box::new),
            result: Box::new(result.into()),
        }
    }

    /// Creates a signature that takes no argument.
    #[must_use]
    pub fn no_arg(result: impl Into<Type>) -> Self {
        Self::new(None, result)
    }

    #[must_use]
    pub fn parameter(&self) -> Option<&Type> {
        self.parameter.as_deref()
    }

    #[must_use]
    pub fn result(&self) -> &Type {
        &self.result
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(f, "({parameter} -> {})", self.result),
            None => write!(f, "( -> {})", self.result),
        }
    }
}
