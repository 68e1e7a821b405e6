use half::{bf16, f16};
use serde::{Deserialize, Serialize};

use crate::{DType, Element};

/// A single value tagged with its data type.
///
/// The data type of a scalar is the one of the Rust value it was built from: `1.5f64` is a
/// [DType::F64] scalar while `1.5f32` is a [DType::F32] scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// 64-bit floating point value.
    F64(f64),
    /// 32-bit floating point value.
    F32(f32),
    /// 16-bit floating point value.
    F16(f16),
    /// 16-bit brain floating point value.
    BF16(bf16),
    /// 64-bit signed integer value.
    I64(i64),
    /// 32-bit signed integer value.
    I32(i32),
    /// 16-bit signed integer value.
    I16(i16),
    /// 8-bit signed integer value.
    I8(i8),
    /// 64-bit unsigned integer value.
    U64(u64),
    /// 32-bit unsigned integer value.
    U32(u32),
    /// 16-bit unsigned integer value.
    U16(u16),
    /// 8-bit unsigned integer value.
    U8(u8),
    /// Boolean value.
    Bool(bool),
}

impl Scalar {
    /// Returns the data type of the scalar.
    pub fn dtype(&self) -> DType {
        match self {
            Scalar::F64(_) => DType::F64,
            Scalar::F32(_) => DType::F32,
            Scalar::F16(_) => DType::F16,
            Scalar::BF16(_) => DType::BF16,
            Scalar::I64(_) => DType::I64,
            Scalar::I32(_) => DType::I32,
            Scalar::I16(_) => DType::I16,
            Scalar::I8(_) => DType::I8,
            Scalar::U64(_) => DType::U64,
            Scalar::U32(_) => DType::U32,
            Scalar::U16(_) => DType::U16,
            Scalar::U8(_) => DType::U8,
            Scalar::Bool(_) => DType::Bool,
        }
    }

    /// The zero value of the given data type.
    pub fn zero(dtype: DType) -> Self {
        match dtype {
            DType::F64 => Scalar::F64(Element::zero()),
            DType::F32 => Scalar::F32(Element::zero()),
            DType::F16 => Scalar::F16(Element::zero()),
            DType::BF16 => Scalar::BF16(Element::zero()),
            DType::I64 => Scalar::I64(Element::zero()),
            DType::I32 => Scalar::I32(Element::zero()),
            DType::I16 => Scalar::I16(Element::zero()),
            DType::I8 => Scalar::I8(Element::zero()),
            DType::U64 => Scalar::U64(Element::zero()),
            DType::U32 => Scalar::U32(Element::zero()),
            DType::U16 => Scalar::U16(Element::zero()),
            DType::U8 => Scalar::U8(Element::zero()),
            DType::Bool => Scalar::Bool(Element::zero()),
        }
    }

    /// Converts the scalar to `f64`.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Scalar::F64(value) => value,
            Scalar::F32(value) => Element::to_f64(value),
            Scalar::F16(value) => Element::to_f64(value),
            Scalar::BF16(value) => Element::to_f64(value),
            Scalar::I64(value) => Element::to_f64(value),
            Scalar::I32(value) => Element::to_f64(value),
            Scalar::I16(value) => Element::to_f64(value),
            Scalar::I8(value) => Element::to_f64(value),
            Scalar::U64(value) => Element::to_f64(value),
            Scalar::U32(value) => Element::to_f64(value),
            Scalar::U16(value) => Element::to_f64(value),
            Scalar::U8(value) => Element::to_f64(value),
            Scalar::Bool(value) => Element::to_f64(value),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

scalar_from!(
    f64 => F64,
    f32 => F32,
    f16 => F16,
    bf16 => BF16,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
    bool => Bool
);
