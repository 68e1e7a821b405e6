use retile_std::{bf16, f16, Element};

use crate::{NdArrayTensor, SharedArray};

/// An element for the ndarray backend.
pub trait NdArrayElement: Element + Clone {
    /// Wraps an array of this element type into a tensor.
    fn into_tensor(array: SharedArray<Self>) -> NdArrayTensor;

    /// Returns the inner array if the tensor holds elements of this type.
    fn from_tensor(tensor: NdArrayTensor) -> Option<SharedArray<Self>>;
}

macro_rules! make_elem {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl NdArrayElement for $ty {
                #[inline(always)]
                fn into_tensor(array: SharedArray<Self>) -> NdArrayTensor {
                    NdArrayTensor::$variant(array)
                }

                #[inline(always)]
                fn from_tensor(tensor: NdArrayTensor) -> Option<SharedArray<Self>> {
                    match tensor {
                        NdArrayTensor::$variant(array) => Some(array),
                        _ => None,
                    }
                }
            }
        )*
    };
}

make_elem!(
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
