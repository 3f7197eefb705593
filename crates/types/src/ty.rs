use std::fmt;

use crate::{DType, FederatedType, FunctionType, StructType, TensorType};

/// A structural type.
///
/// Types are plain values: they compare with `==` by exact structure, and with
/// [`Type::is_assignable_from`] and [`Type::is_equivalent_to`] by the looser
/// rules that computations are checked against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Tensor(TensorType),
    Struct(StructType),
    Sequence(Box<Type>),
    Federated(FederatedType),
    Function(FunctionType),
}

impl Type {
    /// Creates a scalar tensor type.
    #[must_use]
    pub fn scalar(dtype: DType) -> Self {
        Type::Tensor(TensorType::scalar(dtype))
    }

    /// Creates a tensor type with the given shape, where `None` is an unknown dimension.
    #[must_use]
    pub fn tensor(dtype: DType, shape: impl IntoIterator<Item = Option<usize>>) -> Self {
        Type::Tensor(TensorType::new(dtype, shape))
    }

    /// Creates a sequence of `element`.
    #[must_use]
    pub fn sequence(element: impl Into<Type>) -> Self {
        Type::Sequence(Box::new(element.into()))
    }

    /// Creates a function type.
    #[must_use]
    pub fn function(parameter: Option<Type>, result: impl Into<Type>) -> Self {
        Type::Function(FunctionType::new(parameter, result))
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Type::Struct(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_federated(&self) -> Option<&FederatedType> {
        match self {
            Type::Federated(federated) => Some(federated),
            _ => None,
        }
    }
}

impl From<DType> for Type {
    fn from(dtype: DType) -> Self {
        Type::scalar(dtype)
    }
}

impl From<TensorType> for Type {
    fn from(tensor: TensorType) -> Self {
        Type::Tensor(tensor)
    }
}

impl From<StructType> for Type {
    fn from(record: StructType) -> Self {
        Type::Struct(record)
    }
}

impl From<FederatedType> for Type {
    fn from(federated: FederatedType) -> Self {
        Type::Federated(federated)
    }
}

impl From<FunctionType> for Type {
    fn from(function: FunctionType) -> Self {
        Type::Function(function)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Tensor(tensor) => write!(f, "{tensor}"),
            Type::Struct(record) => write!(f, "{record}"),
            Type::Sequence(element) => write!(f, "{element}*"),
            Type::Federated(federated) => write!(f, "{federated}"),
            Type::Function(function) => write!(f, "{function}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{at_clients, at_server};

    #[test]
    fn federated_client_data_renders_compactly() {
        let batch = StructType::named([
            ("x", Type::tensor(DType::Float32, [None, Some(784)])),
            ("y", Type::tensor(DType::Int64, [None, Some(1)])),
        ])
        .unwrap();

        let data = at_clients(Type::sequence(batch));

        assert_eq!(data.to_string(), "{<x=float32[?,784],y=int64[?,1]>*}@CLIENTS");
    }

    #[test]
    fn functions_render_with_and_without_parameters() {
        let initialize = Type::function(None, at_server(DType::Int32));
        assert_eq!(initialize.to_string(), "( -> int32@SERVER)");

        let next = Type::function(
            Some(StructType::unnamed([DType::Int32, DType::Float32]).into()),
            DType::Int32,
        );
        assert_eq!(next.to_string(), "(<int32,float32> -> int32)");
    }

    #[test]
    fn accessors_match_variants() {
        let record: Type = StructType::unnamed([DType::Bool]).into();
        assert!(record.as_struct().is_some());
        assert!(record.as_function().is_none());
        assert!(at_server(DType::Bool).as_federated().is_some());
    }
}
