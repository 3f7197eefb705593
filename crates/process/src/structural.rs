use std::fmt;

use cadence_types::Type;

/// The type-system operations that process validation relies on.
///
/// Validation only needs to compare types and take them apart, so any type
/// representation that can do the following can back a process:
/// - compare two types for equivalence and assignability,
/// - split a functional type into its parameter and result,
/// - split a record type into its ordered, optionally named elements.
///
/// `Display` is used to describe mismatches in errors.
pub trait StructuralType: Clone + fmt::Debug + fmt::Display {
    /// Returns `true` if the two types are structurally the same.
    fn is_equivalent_to(&self, other: &Self) -> bool;

    /// Returns `true` if a value of type `source` may be used where `self` is expected.
    fn is_assignable_from(&self, source: &Self) -> bool;

    /// Splits a functional type into its signature.
    ///
    /// Returns `None` if the type does not describe a computation.
    fn as_signature(&self) -> Option<Signature<'_, Self>>;

    /// Splits a record type into its elements, in order.
    ///
    /// Returns `None` if the type is not a record.
    fn record_fields(&self) -> Option<Vec<Field<'_, Self>>>;
}

/// The parameter and result of a functional type.
#[derive(Debug, Clone, Copy)]
pub struct Signature<'a, T> {
    /// `None` when the computation takes no argument.
    pub parameter: Option<&'a T>,
    pub result: &'a T,
}

/// One element of a record type.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a, T> {
    pub name: Option<&'a str>,
    pub ty: &'a T,
}

impl StructuralType for Type {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        Type::is_equivalent_to(self, other)
    }

    fn is_assignable_from(&self, source: &Self) -> bool {
        Type::is_assignable_from(self, source)
    }

    fn as_signature(&self) -> Option<Signature<'_, Self>> {
        self.as_function().map(|function| Signature {
            parameter: function.parameter(),
            result: function.result(),
        })
    }

    fn record_fields(&self) -> Option<Vec<Field<'_, Self>>> {
        self.as_struct()
            .map(|record| record.iter().map(|(name, ty)| Field { name, ty }).collect())
    }
}
