//! Validated templates for stateful iterative computations.
//!
//! An iterative process pairs two computations: `initialize`, which takes no
//! argument and produces a state, and `next`, which takes that state (plus any
//! extra inputs) and produces an updated state (plus any extra outputs). This
//! crate checks that the two declared signatures agree and packages them; it
//! never runs them.
//!
//! - [`IterativeProcess`] — the base pair with a shared state type
//! - [`MeasuredProcess`] — an iterative process whose `next` returns the
//!   `<state,result,measurements>` envelope
//! - [`TypedComputation`] and [`StructuralType`] — the capabilities a
//!   computation and its type system provide
//! - [`Computation`] — a declared computation over [`cadence_types::Type`]

mod computation;
mod config;
mod error;
mod iterative;
mod measured;
mod structural;

pub use computation::{Computation, TypedComputation};
pub use config::{Config, EnvelopeMatch, StateMatch};
pub use error::{FieldName, Role, TypeError};
pub use iterative::IterativeProcess;
pub use measured::{ENVELOPE_FIELDS, MeasuredProcess};
pub use structural::{Field, Signature, StructuralType};
