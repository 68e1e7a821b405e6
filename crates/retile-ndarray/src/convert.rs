use alloc::vec::Vec;

use ndarray::{ArrayBase, Data, Dimension};
use retile_std::{AsShape, ConversionError, Shape, TensorData};

use crate::{NdArrayElement, NdArrayOps, NdArrayTensor};

/// A value that can be interpreted as a dense array of the ndarray backend.
///
/// Elements are always read in row-major order, whatever the memory layout of the value.
pub trait ArrayLike {
    /// Converts the value into a tensor.
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError>;
}

/// Interprets a value as a dense tensor.
pub fn as_array<A: ArrayLike>(a: A) -> Result<NdArrayTensor, ConversionError> {
    a.into_ndarray()
}

fn from_values<E: NdArrayElement>(
    values: Vec<E>,
    shape: Shape,
) -> Result<NdArrayTensor, ConversionError> {
    let array = NdArrayOps::<E>::from_vec(shape, values)?;

    Ok(E::into_tensor(array))
}

impl<E: NdArrayElement> ArrayLike for Vec<E> {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        let shape = Shape::from([self.len()]);
        from_values(self, shape)
    }
}

impl<E: NdArrayElement> ArrayLike for &[E] {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        self.to_vec().into_ndarray()
    }
}

impl<E: NdArrayElement, const N: usize> ArrayLike for [E; N] {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        from_values(self.to_vec(), Shape::from([N]))
    }
}

impl<E: NdArrayElement, const M: usize, const N: usize> ArrayLike for [[E; N]; M] {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        let values = self.iter().flatten().copied().collect();
        from_values(values, Shape::from([M, N]))
    }
}

/// Nested rows must all have the same length. An empty sequence of rows has shape `[0, 0]`.
impl<E: NdArrayElement> ArrayLike for Vec<Vec<E>> {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        let num_cols = self.first().map(Vec::len).unwrap_or(0);

        if let Some((row, values)) = self
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != num_cols)
        {
            return Err(ConversionError::Ragged {
                row,
                expected: num_cols,
                found: values.len(),
            });
        }

        let shape = Shape::from([self.len(), num_cols]);
        from_values(self.into_iter().flatten().collect(), shape)
    }
}

/// Flat values in row-major order together with their shape.
impl<E: NdArrayElement, S: AsShape> ArrayLike for (Vec<E>, S) {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        let (values, shape) = self;
        let shape = shape.into_shape()?;

        if shape.num_elements() != values.len() {
            return Err(ConversionError::ShapeMismatch {
                elements: values.len(),
                shape: shape.dims,
            });
        }

        from_values(values, shape)
    }
}

impl ArrayLike for TensorData {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        Ok(NdArrayTensor::from_data(self)?)
    }
}

impl<E, S, D> ArrayLike for ArrayBase<S, D>
where
    E: NdArrayElement,
    S: Data<Elem = E>,
    D: Dimension,
{
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        Ok(E::into_tensor(self.into_owned().into_shared().into_dyn()))
    }
}

impl ArrayLike for NdArrayTensor {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        Ok(self)
    }
}

impl ArrayLike for &NdArrayTensor {
    fn into_ndarray(self) -> Result<NdArrayTensor, ConversionError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use retile_std::{DType, DataError, ShapeError};

    #[test]
    fn should_convert_flat_sequences() {
        let tensor = as_array(vec![1.0f64, 2.0, 3.0]).unwrap();

        assert_eq!(tensor.dtype(), DType::F64);
        assert_eq!(tensor.shape(), Shape::from([3]));
    }

    #[test]
    fn should_convert_slices() {
        let values = [5u8, 6, 7, 8];
        let tensor = as_array(&values[1..]).unwrap();

        tensor
            .into_data()
            .assert_eq(&TensorData::from([6u8, 7, 8]), true);
    }

    #[test]
    fn should_convert_nested_arrays() {
        let tensor = as_array([[1i16, 2, 3], [4, 5, 6]]).unwrap();

        tensor
            .into_data()
            .assert_eq(&TensorData::from([[1i16, 2, 3], [4, 5, 6]]), true);
    }

    #[test]
    fn should_convert_nested_vectors() {
        let tensor = as_array(vec![vec![1u32, 2], vec![3, 4], vec![5, 6]]).unwrap();

        assert_eq!(tensor.shape(), Shape::from([3, 2]));
    }

    #[test]
    fn should_reject_ragged_rows() {
        let err = as_array(vec![vec![1u32, 2], vec![3], vec![5, 6]]).unwrap_err();

        assert_eq!(
            err,
            ConversionError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_nested_vectors_should_be_empty() {
        let tensor = as_array(Vec::<Vec<bool>>::new()).unwrap();

        assert!(tensor.is_empty());
        assert_eq!(tensor.dtype(), DType::Bool);
    }

    #[test]
    fn should_convert_values_with_shape() {
        let tensor = as_array((vec![1i8, 2, 3, 4, 5, 6], [3, 2])).unwrap();

        assert_eq!(tensor.shape(), Shape::from([3, 2]));
    }

    #[test]
    fn should_reject_values_not_matching_shape() {
        let err = as_array((vec![1i8, 2, 3, 4, 5], [3, 2])).unwrap_err();

        assert_eq!(
            err,
            ConversionError::ShapeMismatch {
                elements: 5,
                shape: vec![3, 2]
            }
        );
    }

    #[test]
    fn should_reject_values_with_negative_shape() {
        let err = as_array((vec![1i8, 2], [-1, 2])).unwrap_err();

        assert_eq!(
            err,
            ConversionError::InvalidShape(ShapeError::NegativeDim { axis: 0, size: -1 })
        );
    }

    #[test]
    fn should_reject_invalid_tensor_data() {
        let mut data = TensorData::from([1.0f32, 2.0]);
        data.bytes.pop();

        let err = as_array(data).unwrap_err();

        assert_eq!(
            err,
            ConversionError::InvalidData(DataError::InvalidLength {
                bytes: 7,
                expected: 8
            })
        );
    }

    #[test]
    fn should_reject_tensor_data_with_overflowing_shape() {
        let data = TensorData {
            bytes: vec![],
            shape: vec![usize::MAX, 2],
            dtype: DType::U8,
        };

        let err = as_array(data).unwrap_err();

        assert_eq!(
            err,
            ConversionError::InvalidData(DataError::ShapeOverflow {
                shape: vec![usize::MAX, 2]
            })
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn should_reject_tensor_data_with_wrapping_shape() {
        let data = TensorData {
            bytes: vec![],
            shape: vec![1 << 32, 1 << 32],
            dtype: DType::I32,
        };

        let err = as_array(data).unwrap_err();

        assert!(matches!(err, ConversionError::InvalidData(_)));
    }

    #[test]
    fn should_convert_ndarray_views() {
        let array = ndarray::arr2(&[[1u64, 2, 3], [4, 5, 6]]);
        let tensor = as_array(array.t()).unwrap();

        assert_eq!(tensor.shape(), Shape::from([3, 2]));
        tensor
            .into_data()
            .assert_eq(&TensorData::from([[1u64, 4], [2, 5], [3, 6]]), true);
    }
}
