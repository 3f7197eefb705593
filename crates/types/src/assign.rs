use crate::{FederatedType, FunctionType, StructType, TensorType, Type};

impl Type {
    /// Returns `true` if a value of type `source` may be used where `self` is expected.
    ///
    /// Tensors need the same dtype and rank, with every known target dimension
    /// matched exactly. Records need the same length, and a named target
    /// element requires the same name on the source. Federated values need the
    /// same placement, and an all-equal target requires an all-equal source.
    /// Function parameters are checked in the opposite direction of results.
    #[must_use]
    pub fn is_assignable_from(&self, source: &Type) -> bool {
        match (self, source) {
            (Type::Tensor(target), Type::Tensor(source)) => tensor_assignable(target, source),
            (Type::Struct(target), Type::Struct(source)) => struct_assignable(target, source),
            (Type::Sequence(target), Type::Sequence(source)) => target.is_assignable_from(source),
            (Type::Federated(target), Type::Federated(source)) => {
                federated_assignable(target, source)
            }
            (Type::Function(target), Type::Function(source)) => {
                function_assignable(target, source)
            }
            _ => false,
        }
    }

    /// Returns `true` if each type is assignable from the other.
    #[must_use]
    pub fn is_equivalent_to(&self, other: &Type) -> bool {
        self.is_assignable_from(other) && other.is_assignable_from(self)
    }
}

fn tensor_assignable(target: &TensorType, source: &TensorType) -> bool {
    target.dtype() == source.dtype()
        && target.rank() == source.rank()
        && target
            .shape()
            .iter()
            .zip(source.shape())
            .all(|(target_dim, source_dim)| target_dim.is_none() || target_dim == source_dim)
}

fn struct_assignable(target: &StructType, source: &StructType) -> bool {
    target.len() == source.len()
        && target.iter().zip(source.iter()).all(
            |((target_name, target_ty), (source_name, source_ty))| {
                (target_name.is_none() || target_name == source_name)
                    && target_ty.is_assignable_from(source_ty)
            },
        )
}

fn federated_assignable(target: &FederatedType, source: &FederatedType) -> bool {
    target.placement() == source.placement()
        && (!target.all_equal() || source.all_equal())
        && target.member().is_assignable_from(source.member())
}

fn function_assignable(target: &FunctionType, source: &FunctionType) -> bool {
    let parameters = match (target.parameter(), source.parameter()) {
        (None, None) => true,
        (Some(target_param), Some(source_param)) => source_param.is_assignable_from(target_param),
        _ => false,
    };

    parameters && target.result().is_assignable_from(source.result())
}
