use std::{rc::Rc, sync::Arc};

use cadence_types::Type;

use crate::StructuralType;

/// A computation with a declared type signature.
///
/// This is the only capability a process needs from a computation: it reads
/// the signature and never calls the computation itself. Executing the
/// computation is left to whatever runtime produced it.
///
/// The signature is expected to be a functional type (see
/// [`StructuralType::as_signature`]); processes reject computations whose
/// declared type is anything else.
pub trait TypedComputation {
    type Type: StructuralType;

    /// Returns the declared type of this computation.
    fn type_signature(&self) -> &Self::Type;
}

impl<C: TypedComputation + ?Sized> TypedComputation for &C {
    type Type = C::Type;

    fn type_signature(&self) -> &Self::Type {
        (**self).type_signature()
    }
}

impl<C: TypedComputation + ?Sized> TypedComputation for Box<C> {
    type Type = C::Type;

    fn type_signature(&self) -> &Self::Type {
        (**self).type_signature()
    }
}

impl<C: TypedComputation + ?Sized> TypedComputation for Rc<C> {
    type Type = C::Type;

    fn type_signature(&self) -> &Self::Type {
        (**self).type_signature()
    }
}

impl<C: TypedComputation + ?Sized> TypedComputation for Arc<C> {
    type Type = C::Type;

    fn type_signature(&self) -> &Self::Type {
        (**self).type_signature()
    }
}

/// A named computation declared by its type alone.
///
/// `Computation` is useful when the executable form lives elsewhere (for
/// example, in a remote runtime) and only its signature is known locally.
///
/// # Example
///
/// ```
/// use cadence_process::{Computation, IterativeProcess};
/// use cadence_types::{DType, StructType, Type};
///
/// let initialize = Computation::new("initialize", Type::function(None, DType::Int32));
/// let next = Computation::new(
///     "next",
///     Type::function(
///         Some(StructType::unnamed([DType::Int32, DType::Float32]).into()),
///         StructType::unnamed([DType::Int32, DType::Float32]),
///     ),
/// );
///
/// let process = IterativeProcess::new(initialize, next).unwrap();
/// assert_eq!(process.state_type(), &Type::scalar(DType::Int32));
/// assert_eq!(process.next().name(), "next");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    name: String,
    type_signature: Type,
}

impl Computation {
    /// Declares a computation with the given type.
    ///
    /// Any type is accepted here; whether it is a usable signature is checked
    /// when the computation is placed in a process.
    #[must_use]
    pub fn new(name: impl Into<String>, type_signature: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            type_signature: type_signature.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TypedComputation for Computation {
    type Type = Type;

    fn type_signature(&self) -> &Type {
        &self.type_signature
    }
}

#[cfg(test)]
mod tests {
    use cadence_types::DType;

    use super::*;

    fn render<C: TypedComputation>(computation: C) -> String {
        computation.type_signature().to_string()
    }

    #[test]
    fn signature_is_forwarded_through_pointers() {
        let computation = Computation::new("initialize", Type::function(None, DType::Int32));
        let shared = Arc::new(computation.clone());
        let boxed: Box<dyn TypedComputation<Type = Type>> = Box::new(computation.clone());

        assert_eq!(shared.type_signature(), computation.type_signature());
        assert_eq!(boxed.type_signature(), computation.type_signature());
        assert_eq!(render(&computation), "( -> int32)");
        assert_eq!(render(Rc::new(computation)), "( -> int32)");
    }
}
