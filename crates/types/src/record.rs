use std::{collections::HashSet, fmt};

use crate::{StructError, Type};

/// An ordered record of optionally named elements.
///
/// Element order is significant: two records with the same elements in a
/// different order are different types. Named elements can be looked up with
/// [`StructType::field`]; every element can be reached by position with
/// [`StructType::get`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StructType {
    elements: Vec<(Option<String>, Type)>,
}

impl StructType {
    /// Creates a record from optionally named elements.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::DuplicateName`] if two elements share a name.
    pub fn new<N, T>(
        elements: impl IntoIterator<Item = (Option<N>, T)>,
    ) -> Result<Self, StructError>
    where
        N: Into<String>,
        T: Into<Type>,
    {
        let elements: Vec<(Option<String>, Type)> = elements
            .into_iter()
            .map(|(name, ty)| (name.map(Into::into), ty.into()))
            .collect();

        let mut seen = HashSet::new();
        for name in elements.iter().filter_map(|(name, _)| name.as_deref()) {
            if !seen.insert(name) {
                return Err(StructError::DuplicateName {
                    name: name.to_owned(),
                });
            }
        }

        Ok(Self { elements })
    }

    /// Creates a record where every element is named.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::DuplicateName`] if two elements share a name.
    pub fn named<N, T>(elements: impl IntoIterator<Item = (N, T)>) -> Result<Self, StructError>
    where
        N: Into<String>,
        T: Into<Type>,
    {
        Self::new(elements.into_iter().map(|(name, ty)| (Some(name), ty)))
    }

    /// Creates a record of unnamed elements.
    #[must_use]
    pub fn unnamed<T: Into<Type>>(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().map(|ty| (None, ty.into())).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the type of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Type> {
        self.elements.get(index).map(|(_, ty)| ty)
    }

    /// Returns the type of the element named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Type> {
        self.elements
            .iter()
            .find(|(element, _)| element.as_deref() == Some(name))
            .map(|(_, ty)| ty)
    }

    /// Returns the name of the element at `index`, if it has one.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.elements
            .get(index)
            .and_then(|(name, _)| name.as_deref())
    }

    /// Iterates over `(name, type)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Type)> {
        self.elements
            .iter()
            .map(|(name, ty)| (name.as_deref(), ty))
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (index, (name, ty)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if let Some(name) = name {
                write!(f, "{name}=")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DType;

    #[test]
    fn lookup_by_position_and_name() {
        let record = StructType::named([("x", DType::Float32), ("y", DType::Int64)]).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(1), Some(&Type::scalar(DType::Int64)));
        assert_eq!(record.field("x"), Some(&Type::scalar(DType::Float32)));
        assert_eq!(record.name_at(0), Some("x"));
        assert_eq!(record.field("z"), None);
        assert_eq!(record.get(2), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = StructType::named([("a", DType::Int32), ("a", DType::Float32)]);

        assert_eq!(
            result,
            Err(StructError::DuplicateName { name: "a".into() })
        );
    }

    #[test]
    fn mixed_names_render_in_order() {
        let record = StructType::new([
            (Some("a"), Type::scalar(DType::Int32)),
            (None, Type::scalar(DType::String)),
        ])
        .unwrap();

        assert_eq!(record.to_string(), "<a=int32,string>");
        assert_eq!(record.name_at(1), None);
        assert_eq!(StructType::default().to_string(), "<>");
    }
}
