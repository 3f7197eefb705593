use std::fmt;

use thiserror::Error;

/// The part a computation plays in a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Initialize,
    Next,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Initialize => f.write_str("initialize"),
            Role::Next => f.write_str("next"),
        }
    }
}

/// Errors raised when two computations do not form a valid process.
///
/// Types are carried in their rendered form so the error stays independent of
/// the type representation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("`{role}` is not a computation: its type `{found}` is not functional")]
    NotAComputation { role: Role, found: String },

    #[error("`initialize` must take no argument, but takes `{parameter}`")]
    InitializeHasParameter { parameter: String },

    #[error("`next` must take the state `{state}` as its first argument, but takes no argument")]
    NextMissingParameter { state: String },

    #[error(
        "`initialize` result `{state}` does not match the first argument of `next`, found `{parameter}`"
    )]
    StateParameterMismatch { state: String, parameter: String },

    #[error(
        "`initialize` result `{state}` does not match the first result of `next`, found `{result}`"
    )]
    StateResultMismatch { state: String, result: String },

    #[error("`next` must return a <state,result,measurements> record, found `{result}`")]
    EnvelopeNotRecord { result: String },

    #[error("`next` must return a record of exactly 3 elements, found {found} in `{result}`")]
    EnvelopeArity { found: usize, result: String },

    #[error("element {position} of the `next` result must be named `{expected}`, found {found}")]
    EnvelopeFieldName {
        position: usize,
        expected: &'static str,
        found: FieldName,
    },

    #[error(
        "`state` element of the `next` result must match the `initialize` result `{state}`, found `{found}`"
    )]
    EnvelopeStateMismatch { state: String, found: String },
}

/// The name found on a record element, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName(pub Option<String>);

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "`{name}`"),
            None => f.write_str("an unnamed element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_expectation() {
        let error = TypeError::EnvelopeArity {
            found: 2,
            result: "<int32,float32>".into(),
        };
        assert_eq!(
            error.to_string(),
            "`next` must return a record of exactly 3 elements, found 2 in `<int32,float32>`"
        );

        let error = TypeError::NotAComputation {
            role: Role::Initialize,
            found: "int32".into(),
        };
        assert_eq!(
            error.to_string(),
            "`initialize` is not a computation: its type `int32` is not functional"
        );
    }

    #[test]
    fn unnamed_fields_are_described() {
        let error = TypeError::EnvelopeFieldName {
            position: 1,
            expected: "result",
            found: FieldName(None),
        };
        assert_eq!(
            error.to_string(),
            "element 1 of the `next` result must be named `result`, found an unnamed element"
        );
    }
}
