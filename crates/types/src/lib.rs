//! Structural types for describing federated computation signatures.
//!
//! This crate defines the type model that Cadence computations declare:
//!
//! - [`TensorType`] — a typed, optionally shaped tensor such as `float32[?,784]`
//! - [`StructType`] — an ordered record of optionally named elements
//! - [`FederatedType`] — a member type placed at [`Placement::Clients`] or
//!   [`Placement::Server`]
//! - [`FunctionType`] — a signature with an optional parameter and a result
//!
//! Types are compared structurally with [`Type::is_assignable_from`] and
//! [`Type::is_equivalent_to`], and render in the compact notation used
//! throughout Cadence (for example `{<x=float32[?,784],y=int64[?,1]>*}@CLIENTS`).

mod assign;
mod dtype;
mod error;
mod federated;
mod function;
mod record;
mod tensor;
mod ty;

pub mod factory;

pub use dtype::DType;
pub use error::StructError;
pub use federated::{FederatedType, Placement};
pub use function::FunctionType;
pub use record::StructType;
pub use tensor::TensorType;
pub use ty::Type;
