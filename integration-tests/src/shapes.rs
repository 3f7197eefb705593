//! A minimal type system that is not `cadence_types`.
//!
//! Shapes exist to check that processes only depend on the
//! [`StructuralType`] interface. Equality is exact; there is no subtyping.

use std::fmt;

use cadence_process::{Field, Signature, StructuralType, TypedComputation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Named(&'static str),
    Record(Vec<(Option<&'static str>, Shape)>),
    Function(Option<Box<Shape>>, Box<Shape>),
}

impl Shape {
    pub fn record(elements: impl IntoIterator<Item = (Option<&'static str>, Shape)>) -> Self {
        Shape::Record(elements.into_iter().collect())
    }

    pub fn function(parameter: Option<Shape>, result: Shape) -> Self {
        Shape::Function(parameter.map(Box::new), Box::new(result))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Named(name) => f.write_str(name),
            Shape::Record(elements) => {
                let rendered: Vec<_> = elements
                    .iter()
                    .map(|(name, shape)| match name {
                        Some(name) => format!("{name}: {shape}"),
                        None => shape.to_string(),
                    })
                    .collect();
                write!(f, "({})", rendered.join(", "))
            }
            Shape::Function(Some(parameter), result) => write!(f, "fn({parameter}) -> {result}"),
            Shape::Function(None, result) => write!(f, "fn() -> {result}"),
        }
    }
}

impl StructuralType for Shape {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self == other
    }

    fn is_assignable_from(&self, source: &Self) -> bool {
        self == source
    }

    fn as_signature(&self) -> Option<Signature<'_, Self>> {
        match self {
            Shape::Function(parameter, result) => Some(Signature {
                parameter: parameter.as_deref(),
                result: &**result,
            }),
            _ => None,
        }
    }

    fn record_fields(&self) -> Option<Vec<Field<'_, Self>>> {
        match self {
            Shape::Record(elements) => Some(
                elements
                    .iter()
                    .map(|(name, ty)| Field { name: *name, ty })
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// A computation known only by its shape.
#[derive(Debug)]
pub struct ShapedFn(pub Shape);

impl TypedComputation for ShapedFn {
    type Type = Shape;

    fn type_signature(&self) -> &Shape {
        &self.0
    }
}
