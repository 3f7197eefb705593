use tracing::debug;

use crate::{Computation, Config, Role, StructuralType, TypeError, TypedComputation};

/// A validated pair of `initialize` and `next` computations.
///
/// `initialize` takes no argument and produces the state. `next` takes the
/// state as its argument and returns the updated state as its result. When
/// `next` needs extra inputs or produces extra outputs, its parameter or result
/// is a record whose first element is the state.
///
/// Both computations are checked when the process is built, so a process that
/// exists always has a consistent state type. The computations themselves are
/// held unchanged and are never called.
///
/// # Example
///
/// ```
/// use cadence_process::{Computation, IterativeProcess, TypeError};
/// use cadence_types::{DType, StructType, Type};
///
/// let initialize = Computation::new("initialize", Type::function(None, DType::Int32));
///
/// // The state is `int32`, but `next` returns `float32` first.
/// let next = Computation::new(
///     "next",
///     Type::function(
///         Some(StructType::unnamed([DType::Int32, DType::Float32]).into()),
///         StructType::unnamed([DType::Float32, DType::Int32]),
///     ),
/// );
///
/// let error = IterativeProcess::new(initialize, next).unwrap_err();
/// assert!(matches!(error, TypeError::StateResultMismatch { .. }));
/// ```
#[derive(Debug)]
pub struct IterativeProcess<I = Computation, N = I>
where
    I: TypedComputation,
    N: TypedComputation<Type = I::Type>,
{
    initialize: I,
    next: N,
    state_type: I::Type,
}

impl<I, N> IterativeProcess<I, N>
where
    I: TypedComputation,
    N: TypedComputation<Type = I::Type>,
{
    /// Builds a process, validating the computations with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] describing the first mismatch found between the
    /// two signatures.
    pub fn new(initialize: I, next: N) -> Result<Self, TypeError> {
        Self::with_config(initialize, next, &Config::default())
    }

    /// Builds a process, validating the computations with `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] describing the first mismatch found between the
    /// two signatures.
    pub fn with_config(initialize: I, next: N, config: &Config) -> Result<Self, TypeError> {
        let state_type = validate(initialize.type_signature(), next.type_signature(), config)
            .inspect_err(|error| debug!(%error, "rejected iterative process"))?
            .state
            .clone();

        debug!(state_type = %state_type, "validated iterative process");

        Ok(Self::from_validated(initialize, next, state_type))
    }

    /// Assembles a process from computations that have already been validated.
    pub(crate) fn from_validated(initialize: I, next: N, state_type: I::Type) -> Self {
        Self {
            initialize,
            next,
            state_type,
        }
    }

    /// Returns the computation that produces the initial state.
    pub fn initialize(&self) -> &I {
        &self.initialize
    }

    /// Returns the computation that advances the state by one round.
    pub fn next(&self) -> &N {
        &self.next
    }

    /// Returns the type of the state threaded through `next`.
    pub fn state_type(&self) -> &I::Type {
        &self.state_type
    }

    /// Consumes the process and returns its `initialize` and `next` computations.
    pub fn into_parts(self) -> (I, N) {
        (self.initialize, self.next)
    }
}

/// The parts of a validated signature pair that refinements build on.
pub(crate) struct Validated<'a, T> {
    pub(crate) state: &'a T,
    pub(crate) next_result: &'a T,
}

/// Checks that `initialize` and `next` agree on a state type.
pub(crate) fn validate<'a, T: StructuralType>(
    initialize: &'a T,
    next: &'a T,
    config: &Config,
) -> Result<Validated<'a, T>, TypeError> {
    let initialize_signature = initialize
        .as_signature()
        .ok_or_else(|| TypeError::NotAComputation {
            role: Role::Initialize,
            found: initialize.to_string(),
        })?;

    let next_signature = next
        .as_signature()
        .ok_or_else(|| TypeError::NotAComputation {
            role: Role::Next,
            found: next.to_string(),
        })?;

    if let Some(parameter) = initialize_signature.parameter {
        return Err(TypeError::InitializeHasParameter {
            parameter: parameter.to_string(),
        });
    }

    let state = initialize_signature.result;

    let parameter = next_signature
        .parameter
        .ok_or_else(|| TypeError::NextMissingParameter {
            state: state.to_string(),
        })?;

    if !holds_state(parameter, |ty| config.state_match.accepts_input(state, ty)) {
        return Err(TypeError::StateParameterMismatch {
            state: state.to_string(),
            parameter: leading(parameter).to_string(),
        });
    }

    let next_result = next_signature.result;

    if !holds_state(next_result, |ty| config.state_match.accepts_output(state, ty)) {
        return Err(TypeError::StateResultMismatch {
            state: state.to_string(),
            result: leading(next_result).to_string(),
        });
    }

    Ok(Validated { state, next_result })
}

/// Returns `true` if `ty` is the state itself, or a record led by the state.
fn holds_state<T: StructuralType>(ty: &T, accepts: impl Fn(&T) -> bool) -> bool {
    accepts(ty) || accepts(leading(ty))
}

/// Returns the first element of a non-empty record, or the type itself.
fn leading<T: StructuralType>(ty: &T) -> &T {
    ty.record_fields()
        .and_then(|fields| fields.into_iter().next())
        .map_or(ty, |field| field.ty)
}
