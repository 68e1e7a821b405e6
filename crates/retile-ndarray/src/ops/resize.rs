use alloc::borrow::Cow;
use alloc::vec;

use retile_std::{AsShape, Shape, ShapeError};

use crate::ops::base::allocation_len;
use crate::parallel::{chunks_mut_par, run_par};
use crate::{
    execute_with_dtype, full, zeros, IntoResizeInput, NdArrayElement, NdArrayOps, NdArrayTensor,
    ResizeConfig, ResizeError, ResizeInput, SharedArray,
};

/// Returns a new tensor with the given shape, filled with repeated copies of `a`.
///
/// - A scalar fills the whole output.
/// - An empty array gives a tensor of zeros with the data type of the array.
/// - Otherwise, the elements of `a` are read in row-major order and repeated as many times as
///   needed: element `i` of the flattened output is element `i % a.len()` of the flattened input.
///
/// The input is never modified and the output never shares storage with it.
///
/// # Example
/// ```rust
/// use retile_ndarray::{resize, TensorData};
///
/// let output = resize([1, 2, 3], 7usize).unwrap();
///
/// output
///     .into_data()
///     .assert_eq(&TensorData::from([1, 2, 3, 1, 2, 3, 1]), true);
/// ```
pub fn resize<A, S>(a: A, new_shape: S) -> Result<NdArrayTensor, ResizeError>
where
    A: IntoResizeInput,
    S: AsShape,
{
    resize_with_config(a, new_shape, &ResizeConfig::default())
}

/// Same as [resize], with an explicit configuration of the kernel scheduling.
pub fn resize_with_config<A, S>(
    a: A,
    new_shape: S,
    config: &ResizeConfig,
) -> Result<NdArrayTensor, ResizeError>
where
    A: IntoResizeInput,
    S: AsShape,
{
    let input = a.into_resize_input()?;
    let shape = new_shape.into_shape()?;

    let output = match input {
        ResizeInput::Scalar(value) => {
            log::debug!("Filling shape {:?} with scalar {:?}", shape.dims, value);
            full(shape, value)?
        }
        ResizeInput::EmptyArray(dtype) => {
            log::debug!("Filling shape {:?} with zeros of {dtype}", shape.dims);
            zeros(shape, dtype)?
        }
        ResizeInput::NonEmptyArray(tensor) => {
            log::debug!(
                "Tiling {} elements of {} into shape {:?}",
                tensor.num_elements(),
                tensor.dtype(),
                shape.dims
            );
            execute_with_dtype!(tensor, E, array => {
                NdArrayTensor::from(NdArrayOps::<E>::resize(&array, shape, config)?)
            })
        }
    };

    Ok(output)
}

impl<E: NdArrayElement> NdArrayOps<E> {
    /// Tiles the elements of a non-empty array, in row-major order, into a new array of the
    /// given shape.
    ///
    /// # Panics
    ///
    /// If the array is empty and the shape is not.
    pub fn resize(
        array: &SharedArray<E>,
        shape: Shape,
        config: &ResizeConfig,
    ) -> Result<SharedArray<E>, ShapeError> {
        let num_elements = allocation_len::<E>(&shape)?;

        let source: Cow<'_, [E]> = match array.as_slice() {
            Some(values) => Cow::Borrowed(values),
            None => Cow::Owned(array.iter().copied().collect()),
        };

        let mut values = vec![E::zero(); num_elements];
        tile_into(&source, &mut values, config);

        Self::from_vec(shape, values)
    }
}

/// Fills `output` with repeated copies of `source`.
///
/// Outputs of at least `config.parallel_threshold` elements are split in blocks filled in
/// parallel. Every block starts on a multiple of `source.len()`, which makes the result
/// identical to the serial fill.
pub(crate) fn tile_into<E>(source: &[E], output: &mut [E], config: &ResizeConfig)
where
    E: Copy + Send + Sync,
{
    if output.is_empty() {
        return;
    }
    assert!(!source.is_empty(), "Can't tile an empty source");

    if output.len() < config.parallel_threshold {
        log::trace!(
            "Tiling {} elements serially with period {}",
            output.len(),
            source.len()
        );
        tile_block(source, output);
        return;
    }

    let block_len = block_len(source.len(), config.min_block_len);
    log::trace!(
        "Tiling {} elements in parallel with period {} in blocks of {}",
        output.len(),
        source.len(),
        block_len
    );

    run_par!(|| {
        chunks_mut_par!(output, block_len).for_each(|block| tile_block(source, block));
    });
}

/// Smallest multiple of `period` holding at least `min_len` elements.
fn block_len(period: usize, min_len: usize) -> usize {
    let num_periods = min_len.div_ceil(period).max(1);

    num_periods.saturating_mul(period)
}

fn tile_block<E: Copy>(source: &[E], block: &mut [E]) {
    for chunk in block.chunks_mut(source.len()) {
        chunk.copy_from_slice(&source[..chunk.len()]);
    }
}
