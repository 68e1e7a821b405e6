#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Retile ndarray backend.
//!
//! Array creation, conversion of array-like values and the `resize` operation, which tiles
//! the elements of an array into a new shape.

#[macro_use]
extern crate derive_new;

extern crate alloc;

mod parallel;

mod config;
mod convert;
mod element;
mod error;
mod input;
mod ops;
mod tensor;

pub use config::*;
pub use convert::*;
pub use element::*;
pub use error::*;
pub use input::*;
pub use ops::*;
pub use tensor::*;

pub use retile_std::{
    bf16, f16, AsShape, ConversionError, DType, DataError, Element, Scalar, Shape, ShapeError,
    TensorData,
};
