use crate::StructuralType;

/// Configuration for process validation.
///
/// The default is the strict discipline: the state type must be structurally
/// equivalent everywhere it appears, and the measured envelope must be named
/// and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub state_match: StateMatch,
    pub envelope: EnvelopeMatch,
}

/// How the state type is compared where it flows into and out of `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMatch {
    /// The types must be equivalent.
    #[default]
    Equivalent,

    /// The state must be assignable to `next`'s argument, and `next`'s
    /// result must be assignable back to the state.
    Assignable,
}

/// How the elements of the measured envelope are identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeMatch {
    /// Elements must be named `state`, `result`, `measurements`, in that order.
    #[default]
    NamedAndOrdered,

    /// Elements are identified by position only; names are not checked.
    Positional,
}

impl StateMatch {
    /// Returns `true` if a state of type `state` may be passed as `parameter`.
    pub(crate) fn accepts_input<T: StructuralType>(self, state: &T, parameter: &T) -> bool {
        match self {
            StateMatch::Equivalent => state.is_equivalent_to(parameter),
            StateMatch::Assignable => parameter.is_assignable_from(state),
        }
    }

    /// Returns `true` if a value of type `result` may be used as the next state.
    pub(crate) fn accepts_output<T: StructuralType>(self, state: &T, result: &T) -> bool {
        match self {
            StateMatch::Equivalent => state.is_equivalent_to(result),
            StateMatch::Assignable => state.is_assignable_from(result),
        }
    }
}

impl EnvelopeMatch {
    pub(crate) fn checks_names(self) -> bool {
        matches!(self, EnvelopeMatch::NamedAndOrdered)
    }
}
