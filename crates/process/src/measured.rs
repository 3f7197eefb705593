use tracing::debug;

use crate::{
    Computation, Config, FieldName, IterativeProcess, StructuralType, TypeError, TypedComputation,
    iterative::validate,
};

/// The element names of the result returned by a measured `next`, in order.
pub const ENVELOPE_FIELDS: [&str; 3] = ["state", "result", "measurements"];

/// An iterative process whose `next` returns a fixed three-part envelope.
///
/// The result of `next` must be the record `<state=S,result=R,measurements=M>`,
/// where `S` is the state type produced by `initialize`. Code that consumes a
/// measured process can always find the updated state, the primary result, and
/// auxiliary measurements in the same places.
///
/// A `MeasuredProcess` is also an [`IterativeProcess`]; see
/// [`MeasuredProcess::as_iterative`].
///
/// # Example
///
/// ```
/// use cadence_process::{Computation, MeasuredProcess};
/// use cadence_types::{DType, StructType, Type};
///
/// let initialize = Computation::new("initialize", Type::function(None, DType::Int32));
/// let next = Computation::new(
///     "next",
///     Type::function(
///         Some(StructType::unnamed([DType::Int32, DType::Float32]).into()),
///         StructType::named([
///             ("state", DType::Int32),
///             ("result", DType::Float32),
///             ("measurements", DType::String),
///         ])
///         .unwrap(),
///     ),
/// );
///
/// let process = MeasuredProcess::new(initialize, next).unwrap();
/// assert_eq!(process.result_type(), &Type::scalar(DType::Float32));
/// assert_eq!(process.measurements_type(), &Type::scalar(DType::String));
/// ```
#[derive(Debug)]
pub struct MeasuredProcess<I = Computation, N = I>
where
    I: TypedComputation,
    N: TypedComputation<Type = I::Type>,
{
    process: IterativeProcess<I, N>,
    result_type: I::Type,
    measurements_type: I::Type,
}

impl<I, N> MeasuredProcess<I, N>
where
    I: TypedComputation,
    N: TypedComputation<Type = I::Type>,
{
    /// Builds a measured process, validating the computations with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the computations do not form an iterative
    /// process, or if `next` does not return the measured envelope.
    pub fn new(initialize: I, next: N) -> Result<Self, TypeError> {
        Self::with_config(initialize, next, &Config::default())
    }

    /// Builds a measured process, validating the computations with `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the computations do not form an iterative
    /// process, or if `next` does not return the measured envelope.
    pub fn with_config(initialize: I, next: N, config: &Config) -> Result<Self, TypeError> {
        let (state_type, result_type, measurements_type) =
            validate_measured(initialize.type_signature(), next.type_signature(), config)
                .inspect_err(|error| debug!(%error, "rejected measured process"))?;

        debug!(
            state_type = %state_type,
            result_type = %result_type,
            measurements_type = %measurements_type,
            "validated measured process"
        );

        Ok(Self {
            process: IterativeProcess::from_validated(initialize, next, state_type),
            result_type,
            measurements_type,
        })
    }

    /// Returns the computation that produces the initial state.
    pub fn initialize(&self) -> &I {
        self.process.initialize()
    }

    /// Returns the computation that advances the state and reports on the round.
    pub fn next(&self) -> &N {
        self.process.next()
    }

    /// Returns the type of the state threaded through `next`.
    pub fn state_type(&self) -> &I::Type {
        self.process.state_type()
    }

    /// Returns the type of the `result` element of `next`'s result.
    pub fn result_type(&self) -> &I::Type {
        &self.result_type
    }

    /// Returns the type of the `measurements` element of `next`'s result.
    pub fn measurements_type(&self) -> &I::Type {
        &self.measurements_type
    }

    /// Views this process as a plain iterative process.
    pub fn as_iterative(&self) -> &IterativeProcess<I, N> {
        &self.process
    }

    /// Discards the envelope types and returns the underlying iterative process.
    pub fn into_iterative(self) -> IterativeProcess<I, N> {
        self.process
    }
}

impl<I, N> AsRef<IterativeProcess<I, N>> for MeasuredProcess<I, N>
where
    I: TypedComputation,
    N: TypedComputation<Type = I::Type>,
{
    fn as_ref(&self) -> &IterativeProcess<I, N> {
        &self.process
    }
}

/// Runs the iterative checks, then checks the envelope returned by `next`.
///
/// Returns the state, result, and measurements types.
fn validate_measured<T: StructuralType>(
    initialize: &T,
    next: &T,
    config: &Config,
) -> Result<(T, T, T), TypeError> {
    let validated = validate(initialize, next, config)?;
    let state = validated.state;
    let envelope = validated.next_result;

    let fields = envelope
        .record_fields()
        .ok_or_else(|| TypeError::EnvelopeNotRecord {
            result: envelope.to_string(),
        })?;

    let [state_field, result_field, measurements_field] = fields.as_slice() else {
        return Err(TypeError::EnvelopeArity {
            found: fields.len(),
            result: envelope.to_string(),
        });
    };

    if config.envelope.checks_names() {
        let names = [state_field.name, result_field.name, measurements_field.name];
        for (position, (found, expected)) in names.into_iter().zip(ENVELOPE_FIELDS).enumerate() {
            if found != Some(expected) {
                return Err(TypeError::EnvelopeFieldName {
                    position,
                    expected,
                    found: FieldName(found.map(str::to_owned)),
                });
            }
        }
    }

    if !config.state_match.accepts_output(state, state_field.ty) {
        return Err(TypeError::EnvelopeStateMismatch {
            state: state.to_string(),
            found: state_field.ty.to_string(),
        });
    }

    Ok((
        state.clone(),
        result_field.ty.clone(),
        measurements_field.ty.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use cadence_types::{
        DType, StructType, Type,
        factory::{at_clients, at_server},
    };

    use super::*;
    use crate::EnvelopeMatch;

    fn initialize(state: impl Into<Type>) -> Computation {
        Computation::new("initialize", Type::function(None, state))
    }

    fn next(parameter: impl Into<Type>, result: impl Into<Type>) -> Computation {
        Computation::new("next", Type::function(Some(parameter.into()), result))
    }

    fn envelope(
        state: impl Into<Type>,
        result: impl Into<Type>,
        measurements: impl Into<Type>,
    ) -> Type {
        let elements: [Type; 3] = [state.into(), result.into(), measurements.into()];
        StructType::named(ENVELOPE_FIELDS.into_iter().zip(elements))
            .unwrap()
            .into()
    }

    fn state_and_float() -> Type {
        StructType::unnamed([DType::Int32, DType::Float32]).into()
    }

    #[test]
    fn envelope_types_are_exposed() {
        let process = MeasuredProcess::new(
            initialize(DType::Int32),
            next(
                state_and_float(),
                envelope(DType::Int32, DType::Float32, DType::String),
            ),
        )
        .unwrap();

        assert_eq!(process.state_type(), &Type::scalar(DType::Int32));
        assert_eq!(process.result_type(), &Type::scalar(DType::Float32));
        assert_eq!(process.measurements_type(), &Type::scalar(DType::String));
    }

    #[test]
    fn is_an_iterative_process() {
        let process = MeasuredProcess::new(
            initialize(DType::Int32),
            next(DType::Int32, envelope(DType::Int32, DType::Bool, DType::Bool)),
        )
        .unwrap();

        assert!(std::ptr::eq(process.as_iterative().next(), process.next()));
        assert!(std::ptr::eq(process.as_ref(), process.as_iterative()));

        let iterative = process.into_iterative();
        assert_eq!(iterative.state_type(), &Type::scalar(DType::Int32));
        assert_eq!(iterative.initialize().name(), "initialize");
    }

    #[test]
    fn two_components_fail_on_arity() {
        let error = MeasuredProcess::new(
            initialize(DType::Int32),
            next(state_and_float(), state_and_float()),
        )
        .unwrap_err();

        assert_eq!(
            error,
            TypeError::EnvelopeArity {
                found: 2,
                result: "<int32,float32>".into(),
            }
        );
    }

    #[test]
    fn four_components_fail_on_arity() {
        let result = StructType::named([
            ("state", DType::Int32),
            ("result", DType::Float32),
            ("measurements", DType::String),
            ("extra", DType::Bool),
        ])
        .unwrap();

        let error =
            MeasuredProcess::new(initialize(DType::Int32), next(DType::Int32, result)).unwrap_err();

        assert!(matches!(error, TypeError::EnvelopeArity { found: 4, .. }));
    }

    #[test]
    fn bare_state_result_is_not_an_envelope() {
        let error = MeasuredProcess::new(initialize(DType::Int32), next(DType::Int32, DType::Int32))
            .unwrap_err();

        assert_eq!(
            error,
            TypeError::EnvelopeNotRecord {
                result: "int32".into(),
            }
        );
    }

    #[test]
    fn base_validation_runs_first() {
        let error = MeasuredProcess::new(
            initialize(DType::Int32),
            next(DType::Int64, envelope(DType::Int32, DType::Float32, DType::String)),
        )
        .unwrap_err();

        assert!(matches!(error, TypeError::StateParameterMismatch { .. }));
    }

    #[test]
    fn misordered_names_are_rejected() {
        let result = StructType::named([
            ("state", DType::Int32),
            ("measurements", DType::String),
            ("result", DType::Float32),
        ])
        .unwrap();

        let error =
            MeasuredProcess::new(initialize(DType::Int32), next(DType::Int32, result)).unwrap_err();

        assert_eq!(
            error,
            TypeError::EnvelopeFieldName {
                position: 1,
                expected: "result",
                found: FieldName(Some("measurements".into())),
            }
        );
    }

    #[test]
    fn unnamed_envelope_depends_on_config() {
        let result = StructType::unnamed([DType::Int32, DType::Float32, DType::String]);
        let make = || (initialize(DType::Int32), next(DType::Int32, result.clone()));

        let (init, step) = make();
        let error = MeasuredProcess::new(init, step).unwrap_err();
        assert_eq!(
            error,
            TypeError::EnvelopeFieldName {
                position: 0,
                expected: "state",
                found: FieldName(None),
            }
        );

        let config = Config {
            envelope: EnvelopeMatch::Positional,
            ..Config::default()
        };
        let (init, step) = make();
        let process = MeasuredProcess::with_config(init, step, &config).unwrap();
        assert_eq!(process.result_type(), &Type::scalar(DType::Float32));
        assert_eq!(process.measurements_type(), &Type::scalar(DType::String));
    }

    #[test]
    fn positional_envelope_still_checks_the_state() {
        let result = StructType::unnamed([DType::Float32, DType::Float32, DType::String]);
        let config = Config {
            envelope: EnvelopeMatch::Positional,
            ..Config::default()
        };

        let error = MeasuredProcess::with_config(
            initialize(DType::Int32),
            next(DType::Int32, result),
            &config,
        )
        .unwrap_err();

        assert!(matches!(error, TypeError::StateResultMismatch { .. }));
    }

    #[test]
    fn envelope_state_must_match_even_when_the_whole_result_does() {
        // The state looks like an envelope, so `next: S -> S` passes the base checks.
        let state = envelope(DType::Int32, DType::Float32, DType::String);

        let error = MeasuredProcess::new(initialize(state.clone()), next(state.clone(), state))
            .unwrap_err();

        assert_eq!(
            error,
            TypeError::EnvelopeStateMismatch {
                state: "<state=int32,result=float32,measurements=string>".into(),
                found: "int32".into(),
            }
        );
    }

    #[test]
    fn federated_envelope() {
        let weights = StructType::named([("weights", Type::tensor(DType::Float32, [Some(10)]))]);
        let state = at_server(weights.unwrap());
        let data = at_clients(Type::sequence(DType::Float32));

        let process = MeasuredProcess::new(
            initialize(state.clone()),
            next(
                StructType::unnamed([state.clone(), data]),
                envelope(state, at_server(DType::Float32), at_server(DType::Int64)),
            ),
        )
        .unwrap();

        assert_eq!(process.state_type().to_string(), "<weights=float32[10]>@SERVER");
        assert_eq!(process.result_type().to_string(), "float32@SERVER");
        assert_eq!(process.measurements_type().to_string(), "int64@SERVER");
    }
}
