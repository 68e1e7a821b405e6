use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use half::{bf16, f16};
use serde::{Deserialize, Serialize};

use crate::{DType, DataError, Element, Shape};

/// Data structure for tensors.
///
/// The elements are stored as raw bytes in row-major order, together with the shape and the
/// data type needed to interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorData {
    /// The values of the tensor (as bytes).
    pub bytes: Vec<u8>,

    /// The shape of the tensor.
    pub shape: Vec<usize>,

    /// The data type of the tensor.
    pub dtype: DType,
}

impl TensorData {
    /// Creates a new tensor data structure.
    ///
    /// # Panics
    ///
    /// If the number of values doesn't match the number of elements described by the shape.
    pub fn new<E: Element, S: Into<Vec<usize>>>(value: Vec<E>, shape: S) -> Self {
        let shape = shape.into();
        let num_elements = Shape::new(shape.clone()).checked_num_elements();
        assert_eq!(
            Some(value.len()),
            num_elements,
            "Shape {shape:?} is invalid for input of size {:?}",
            value.len(),
        );

        Self {
            bytes: bytemuck::cast_slice(&value).to_vec(),
            shape,
            dtype: E::dtype(),
        }
    }

    /// Returns the total number of elements of the tensor data.
    pub fn num_elements(&self) -> usize {
        Shape::new(self.shape.clone()).num_elements()
    }

    /// Checks that the number of bytes matches the shape and data type.
    pub fn validate(&self) -> Result<(), DataError> {
        let expected = Shape::new(self.shape.clone())
            .checked_num_elements()
            .and_then(|num_elements| num_elements.checked_mul(self.dtype.size()))
            .ok_or_else(|| DataError::ShapeOverflow {
                shape: self.shape.clone(),
            })?;

        if self.bytes.len() != expected {
            return Err(DataError::InvalidLength {
                bytes: self.bytes.len(),
                expected,
            });
        }

        Ok(())
    }

    /// Returns the tensor data as a vector of scalar values.
    pub fn to_vec<E: Element>(&self) -> Result<Vec<E>, DataError> {
        if E::dtype() != self.dtype {
            return Err(DataError::TypeMismatch {
                expected: E::dtype(),
                found: self.dtype,
            });
        }
        self.validate()?;

        // Bytes aren't guaranteed to be aligned for `E`, elements are read one at a time.
        self.bytes
            .chunks_exact(core::mem::size_of::<E>())
            .map(|chunk| {
                bytemuck::checked::try_pod_read_unaligned::<E>(chunk).map_err(DataError::CastError)
            })
            .collect()
    }

    /// Returns the tensor data as a vector of scalar values.
    pub fn into_vec<E: Element>(self) -> Result<Vec<E>, DataError> {
        self.to_vec()
    }

    /// Returns the values converted to `f64`, whatever the stored data type.
    pub fn to_f64_vec(&self) -> Result<Vec<f64>, DataError> {
        fn convert<E: Element>(data: &TensorData) -> Result<Vec<f64>, DataError> {
            Ok(data.to_vec::<E>()?.into_iter().map(E::to_f64).collect())
        }

        match self.dtype {
            DType::F64 => convert::<f64>(self),
            DType::F32 => convert::<f32>(self),
            DType::F16 => convert::<f16>(self),
            DType::BF16 => convert::<bf16>(self),
            DType::I64 => convert::<i64>(self),
            DType::I32 => convert::<i32>(self),
            DType::I16 => convert::<i16>(self),
            DType::I8 => convert::<i8>(self),
            DType::U64 => convert::<u64>(self),
            DType::U32 => convert::<u32>(self),
            DType::U16 => convert::<u16>(self),
            DType::U8 => convert::<u8>(self),
            DType::Bool => convert::<bool>(self),
        }
    }

    /// Asserts the data is equal to another data.
    ///
    /// # Arguments
    ///
    /// * `other` - The other data.
    /// * `strict` - If true, the data types must be the same. Otherwise, values are compared
    ///   after conversion to `f64`.
    ///
    /// # Panics
    ///
    /// If the data is not equal.
    #[track_caller]
    pub fn assert_eq(&self, other: &Self, strict: bool) {
        if strict {
            assert_eq!(
                self.dtype, other.dtype,
                "Data types differ ({:?} != {:?})",
                self.dtype, other.dtype
            );
        }

        assert_eq!(
            self.shape, other.shape,
            "Shapes differ ({:?} != {:?})",
            self.shape, other.shape
        );

        let (lhs, rhs) = match (self.to_f64_vec(), other.to_f64_vec()) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            (Err(err), _) | (_, Err(err)) => panic!("Invalid tensor data: {err}"),
        };

        let mut message = String::new();
        for (i, (a, b)) in lhs.iter().zip(rhs.iter()).enumerate() {
            let both_nan = a.is_nan() && b.is_nan();
            if a != b && !both_nan {
                message += format!("\n  => Position {i}: {a} != {b}").as_str();
            }
        }

        if !message.is_empty() {
            panic!("Tensors are not eq:{message}");
        }
    }
}

impl<E: Element, const A: usize> From<[E; A]> for TensorData {
    fn from(elems: [E; A]) -> Self {
        TensorData::new(elems.to_vec(), [A])
    }
}

impl<E: Element, const A: usize, const B: usize> From<[[E; B]; A]> for TensorData {
    fn from(elems: [[E; B]; A]) -> Self {
        let mut data = Vec::with_capacity(A * B);
        for elem in elems.into_iter() {
            data.extend(elem);
        }

        TensorData::new(data, [A, B])
    }
}

impl<E: Element, const A: usize, const B: usize, const C: usize> From<[[[E; C]; B]; A]>
    for TensorData
{
    fn from(elems: [[[E; C]; B]; A]) -> Self {
        let mut data = Vec::with_capacity(A * B * C);
        for elem in elems.into_iter().flatten() {
            data.extend(elem);
        }

        TensorData::new(data, [A, B, C])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn should_have_right_num_elements() {
        let data = TensorData::new(vec![0.5f32; 90], [3, 5, 6]);

        assert_eq!(data.num_elements(), 90);
        assert_eq!(data.bytes.len(), 90 * 4);
    }

    #[test]
    fn should_have_right_shape() {
        let data = TensorData::from([[3.0, 5.0, 6.0]]);
        assert_eq!(data.shape, vec![1, 3]);

        let data = TensorData::from([[4.0, 5.0, 8.0], [3.0, 5.0, 6.0]]);
        assert_eq!(data.shape, vec![2, 3]);

        let data = TensorData::from([3.0, 5.0, 6.0]);
        assert_eq!(data.shape, vec![3]);
    }

    #[test]
    fn should_read_values_back() {
        let data = TensorData::from([[[1i16, 2], [3, 4]], [[5, 6], [7, 8]]]);

        assert_eq!(data.to_vec::<i16>().unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn should_reject_wrong_element_type() {
        let data = TensorData::from([1u8, 2, 3]);

        assert_eq!(
            data.to_vec::<i8>(),
            Err(DataError::TypeMismatch {
                expected: DType::I8,
                found: DType::U8
            })
        );
    }

    #[test]
    fn should_reject_invalid_bool_bytes() {
        let mut data = TensorData::from([true, false]);
        data.bytes[1] = 7;

        assert!(matches!(
            data.to_vec::<bool>(),
            Err(DataError::CastError(_))
        ));
    }

    #[test]
    fn should_reject_truncated_bytes() {
        let mut data = TensorData::from([1.0f64, 2.0]);
        data.bytes.pop();

        assert_eq!(
            data.validate(),
            Err(DataError::InvalidLength {
                bytes: 15,
                expected: 16
            })
        );
    }

    #[test]
    fn should_reject_overflowing_element_count() {
        let data = TensorData {
            bytes: vec![],
            shape: vec![usize::MAX, 2],
            dtype: DType::U8,
        };

        assert_eq!(
            data.validate(),
            Err(DataError::ShapeOverflow {
                shape: vec![usize::MAX, 2]
            })
        );
    }

    #[test]
    fn should_reject_overflowing_byte_count() {
        let data = TensorData {
            bytes: vec![],
            shape: vec![usize::MAX / 2],
            dtype: DType::F32,
        };

        assert!(matches!(
            data.to_vec::<f32>(),
            Err(DataError::ShapeOverflow { .. })
        ));
    }

    #[test]
    #[should_panic = "Shape [2, 2] is invalid for input of size 3"]
    fn should_panic_on_shape_mismatch() {
        let _data = TensorData::new(vec![1, 2, 3], [2, 2]);
    }

    #[test]
    fn assert_eq_should_compare_across_dtypes_when_not_strict() {
        let lhs = TensorData::from([1i64, 2, 3]);
        let rhs = TensorData::from([1.0f32, 2.0, 3.0]);

        lhs.assert_eq(&rhs, false);
    }

    #[test]
    #[should_panic = "Data types differ"]
    fn assert_eq_should_check_dtype_when_strict() {
        let lhs = TensorData::from([1i64, 2, 3]);
        let rhs = TensorData::from([1.0f32, 2.0, 3.0]);

        lhs.assert_eq(&rhs, true);
    }

    #[test]
    #[should_panic = "Position 1: 2 != 4"]
    fn assert_eq_should_report_positions() {
        let lhs = TensorData::from([1, 2, 3]);
        let rhs = TensorData::from([1, 4, 3]);

        lhs.assert_eq(&rhs, true);
    }

    #[test]
    fn should_serialize_to_json() {
        let data = TensorData::from([[1u8, 2], [3, 4]]);

        let json = serde_json::to_string(&data).unwrap();
        let restored: TensorData = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, data);
        assert!(json.contains("\"dtype\":\"U8\""));
    }
}
