#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Retile Standard Library
//!
//! This library contains the core types shared by the retile backends, including shapes, data
//! types, scalars and tensor data.

#[macro_use]
extern crate derive_new;

extern crate alloc;

mod data;
mod dtype;
mod element;
mod errors;
mod scalar;
mod shape;

pub use data::*;
pub use dtype::*;
pub use element::*;
pub use errors::*;
pub use scalar::*;
pub use shape::*;

// Re-exported types
pub use half::{bf16, f16};
