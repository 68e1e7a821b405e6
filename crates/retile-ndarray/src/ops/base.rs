use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use ndarray::{ArcArray, IxDyn};
use retile_std::{Shape, ShapeError};

use crate::{NdArrayElement, SharedArray};

/// Typed operations on the arrays of the ndarray backend.
pub struct NdArrayOps<E> {
    e: PhantomData<E>,
}

impl<E: NdArrayElement> NdArrayOps<E> {
    /// Creates an array of the given shape where every element is `value`.
    pub fn full(shape: Shape, value: E) -> Result<SharedArray<E>, ShapeError> {
        let num_elements = allocation_len::<E>(&shape)?;

        Self::from_vec(shape, vec![value; num_elements])
    }

    /// Creates an array of the given shape from values stored in row-major order.
    pub(crate) fn from_vec(shape: Shape, values: Vec<E>) -> Result<SharedArray<E>, ShapeError> {
        ArcArray::from_shape_vec(IxDyn(&shape.dims), values)
            .map_err(|_| ShapeError::Overflow { dims: shape.dims })
    }
}

/// Returns the number of elements of the shape, making sure an array of `E` of that size can be
/// allocated.
pub(crate) fn allocation_len<E>(shape: &Shape) -> Result<usize, ShapeError> {
    let num_elements = shape.num_elements();

    match num_elements.checked_mul(core::mem::size_of::<E>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(num_elements),
        _ => Err(ShapeError::Overflow {
            dims: shape.dims.clone(),
        }),
    }
}
