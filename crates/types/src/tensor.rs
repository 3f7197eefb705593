use std::fmt;

use crate::DType;

/// A tensor with an element type and a possibly partially known shape.
///
/// Each dimension is either a known size or `None` for an unknown size, which
/// renders as `?`. An empty shape describes a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorType {
    dtype: DType,
    shape: Vec<Option<usize>>,
}

impl TensorType {
    /// Creates a tensor type with the given shape.
    #[must_use]
    pub fn new(dtype: DType, shape: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            dtype,
            shape: shape.into_iter().collect(),
        }
    }

    /// Creates a scalar tensor type.
    #[must_use]
    pub fn scalar(dtype: DType) -> Self {
        Self {
            dtype,
            shape: Vec::new(),
        }
    }

    #[must_use]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    #[must_use]
    pub fn shape(&self) -> &[Option<usize>] {
        &self.shape
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }
}

impl From<DType> for TensorType {
    fn from(dtype: DType) -> Self {
        Self::scalar(dtype)
    }
}

impl fmt::Display for TensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dtype)?;
        if self.shape.is_empty() {
            return Ok(());
        }

        f.write_str("[")?;
        for (index, dim) in self.shape.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            match dim {
                Some(size) => write!(f, "{size}")?,
                None => f.write_str("?")?,
            }
        }
        f.write_str("]")
    }
}
