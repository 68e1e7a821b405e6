use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::ShapeError;

/// Shape of a tensor.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// The dimensions of the tensor.
    pub dims: Vec<usize>,
}

impl Shape {
    /// Returns the total number of elements of a tensor having this shape.
    ///
    /// A shape without any dimension describes a single scalar element.
    pub fn num_elements(&self) -> usize {
        if self.dims.contains(&0) {
            return 0;
        }
        self.dims.iter().product()
    }

    /// Returns the total number of elements, or `None` if it doesn't fit in `usize`.
    pub fn checked_num_elements(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }
        self.dims
            .iter()
            .try_fold(1usize, |acc, dim| acc.checked_mul(*dim))
    }

    /// Returns the number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    /// Change the shape to one dimensional with the same number of elements.
    pub fn flatten(&self) -> Self {
        Self {
            dims: [self.num_elements()].into(),
        }
    }

    /// Construct a vector of the dims.
    pub fn to_vec(&self) -> Vec<usize> {
        self.dims.clone()
    }

    /// Validates that the number of elements fits in `isize`, the limit of any allocation.
    fn checked(self) -> Result<Self, ShapeError> {
        let overflow = self
            .checked_num_elements()
            .map_or(true, |num_elements| num_elements > isize::MAX as usize);

        if overflow {
            return Err(ShapeError::Overflow { dims: self.dims });
        }

        Ok(self)
    }
}

impl<const D: usize> From<[usize; D]> for Shape {
    fn from(dims: [usize; D]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape { dims: dims.into() }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape { dims }
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}

impl IntoIterator for Shape {
    type Item = usize;
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.into_iter()
    }
}

/// A single dimension size that may come from a signed integer.
pub trait AsDim: Copy {
    /// Converts into a signed size, which is checked against negative values.
    fn dim(self) -> i128;
}

macro_rules! impl_as_dim {
    ($($ty:ty),*) => {
        $(
            impl AsDim for $ty {
                fn dim(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_as_dim!(usize, isize, i64, i32, i16, u64, u32, u16);

fn to_dims<I: AsDim>(dims: impl IntoIterator<Item = I>) -> Result<Vec<usize>, ShapeError> {
    dims.into_iter()
        .enumerate()
        .map(|(axis, size)| {
            let size = size.dim();
            if size < 0 {
                return Err(ShapeError::NegativeDim {
                    axis,
                    size: size as i64,
                });
            }
            usize::try_from(size).map_err(|_| ShapeError::DimOverflow { axis, size })
        })
        .collect()
}

/// Conversion of a requested shape, given as a single size or a sequence of sizes, into a
/// validated [Shape].
///
/// A single integer `n` is the one dimensional shape `[n]`, and an empty sequence is the
/// shape of a scalar.
///
/// # Example
/// ```rust
/// use retile_std::{AsShape, Shape};
///
/// assert_eq!(7usize.into_shape().unwrap(), Shape::from([7]));
/// assert_eq!([2i64, 3].into_shape().unwrap(), Shape::from([2, 3]));
/// assert!([2i64, -1].into_shape().is_err());
/// ```
pub trait AsShape {
    /// Converts into a validated shape.
    fn into_shape(self) -> Result<Shape, ShapeError>;
}

impl AsShape for Shape {
    fn into_shape(self) -> Result<Shape, ShapeError> {
        self.checked()
    }
}

impl AsShape for &Shape {
    fn into_shape(self) -> Result<Shape, ShapeError> {
        self.clone().checked()
    }
}

macro_rules! impl_as_shape {
    ($($ty:ty),*) => {
        $(
            impl AsShape for $ty {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims([self])?).checked()
                }
            }

            impl<const D: usize> AsShape for [$ty; D] {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims(self)?).checked()
                }
            }

            impl<const D: usize> AsShape for &[$ty; D] {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims(self.iter().copied())?).checked()
                }
            }

            impl AsShape for &[$ty] {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims(self.iter().copied())?).checked()
                }
            }

            impl AsShape for Vec<$ty> {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims(self)?).checked()
                }
            }

            impl AsShape for &Vec<$ty> {
                fn into_shape(self) -> Result<Shape, ShapeError> {
                    Shape::new(to_dims(self.iter().copied())?).checked()
                }
            }
        )*
    };
}

impl_as_shape!(usize, isize, i64, i32, i16, u64, u32, u16);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rstest::rstest;

    #[test]
    fn num_elements() {
        let shape = Shape::from([2, 3, 4, 5]);
        assert_eq!(120, shape.num_elements());
    }

    #[test]
    fn scalar_shape_should_have_one_element() {
        let shape = Shape::new(vec![]);

        assert_eq!(shape.num_dims(), 0);
        assert_eq!(shape.num_elements(), 1);
    }

    #[test]
    fn should_flatten() {
        let shape = Shape::from([2, 3, 4]);
        assert_eq!(shape.flatten(), Shape::from([24]));
    }

    #[test]
    fn single_integer_should_be_one_dimensional() {
        assert_eq!(7usize.into_shape().unwrap(), Shape::from([7]));
        assert_eq!(0i32.into_shape().unwrap(), Shape::from([0]));
    }

    #[rstest]
    #[case(vec![2i64, 3], vec![2, 3])]
    #[case(vec![0i64, 5], vec![0, 5])]
    #[case(vec![], vec![])]
    fn should_convert_sequences(#[case] requested: Vec<i64>, #[case] expected: Vec<usize>) {
        assert_eq!(requested.into_shape().unwrap(), Shape::from(expected));
    }

    #[test]
    fn should_reject_negative_dims() {
        let err = [3i32, 4, -2].into_shape().unwrap_err();

        assert_eq!(err, ShapeError::NegativeDim { axis: 2, size: -2 });
    }

    #[test]
    fn should_reject_negative_single_size() {
        let err = (-1isize).into_shape().unwrap_err();

        assert_eq!(err, ShapeError::NegativeDim { axis: 0, size: -1 });
    }

    #[test]
    fn should_reject_overflowing_shapes() {
        let err = [usize::MAX, 2].into_shape().unwrap_err();

        assert_eq!(
            err,
            ShapeError::Overflow {
                dims: vec![usize::MAX, 2]
            }
        );
    }

    #[test]
    fn should_reject_shapes_larger_than_isize() {
        let err = [isize::MAX as usize, 2].into_shape().unwrap_err();

        assert!(matches!(err, ShapeError::Overflow { .. }));
    }

    #[test]
    fn checked_num_elements_should_detect_overflow() {
        assert_eq!(Shape::from([usize::MAX, 2]).checked_num_elements(), None);
        assert_eq!(Shape::from([usize::MAX, 0]).checked_num_elements(), Some(0));
        assert_eq!(Shape::from([3, 4]).checked_num_elements(), Some(12));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn should_reject_dims_larger_than_usize() {
        let err = [2u64, u64::MAX].into_shape().unwrap_err();

        assert_eq!(
            err,
            ShapeError::DimOverflow {
                axis: 1,
                size: u64::MAX as i128
            }
        );
    }

    #[test]
    fn overflow_check_should_stop_at_zero_dims() {
        // Zero-sized shapes never overflow, whatever the other sizes are.
        let shape = [usize::MAX, usize::MAX, 0].into_shape().unwrap();

        assert_eq!(shape.num_elements(), 0);
    }
}
