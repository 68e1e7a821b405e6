use core::fmt::Debug;

use half::{bf16, f16};
use num_traits::{ToPrimitive, Zero};

use crate::DType;

/// Element trait for tensors.
///
/// Every element can be stored in [TensorData](crate::TensorData) as raw bytes, which is why
/// the trait requires the bytemuck casting bounds.
pub trait Element:
    Debug
    + Copy
    + Send
    + Sync
    + PartialEq
    + bytemuck::CheckedBitPattern
    + bytemuck::NoUninit
    + 'static
{
    /// The dtype of the element.
    fn dtype() -> DType;

    /// The additive identity of the element (`false` for booleans).
    fn zero() -> Self;

    /// Converts the element to `f64`, used to compare tensors of different precisions.
    fn to_f64(self) -> f64;
}

macro_rules! make_element {
    (
        numeric $ty:ty,
        dtype $dtype:expr
    ) => {
        impl Element for $ty {
            #[inline(always)]
            fn dtype() -> DType {
                $dtype
            }

            #[inline(always)]
            fn zero() -> Self {
                <$ty as Zero>::zero()
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
            }
        }
    };
}

make_element!(numeric f64, dtype DType::F64);
make_element!(numeric f32, dtype DType::F32);
make_element!(numeric f16, dtype DType::F16);
make_element!(numeric bf16, dtype DType::BF16);
make_element!(numeric i64, dtype DType::I64);
make_element!(numeric i32, dtype DType::I32);
make_element!(numeric i16, dtype DType::I16);
make_element!(numeric i8, dtype DType::I8);
make_element!(numeric u64, dtype DType::U64);
make_element!(numeric u32, dtype DType::U32);
make_element!(numeric u16, dtype DType::U16);
make_element!(numeric u8, dtype DType::U8);

impl Element for bool {
    #[inline(always)]
    fn dtype() -> DType {
        DType::Bool
    }

    #[inline(always)]
    fn zero() -> Self {
        false
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_types_to_dtypes() {
        assert_eq!(f32::dtype(), DType::F32);
        assert_eq!(bf16::dtype(), DType::BF16);
        assert_eq!(u16::dtype(), DType::U16);
        assert_eq!(bool::dtype(), DType::Bool);
    }

    #[test]
    fn zero_should_be_additive_identity() {
        assert_eq!(<f64 as Element>::zero(), 0.0);
        assert_eq!(<f16 as Element>::zero(), f16::from_f32(0.0));
        assert_eq!(<i8 as Element>::zero(), 0);
        assert!(!<bool as Element>::zero());
    }

    #[test]
    fn should_convert_to_f64() {
        assert_eq!(Element::to_f64(3i32), 3.0);
        assert_eq!(Element::to_f64(f16::from_f32(0.5)), 0.5);
        assert_eq!(Element::to_f64(true), 1.0);
    }
}
