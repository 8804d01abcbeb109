//! # Malphas Core
//!
//! Core traits, types, and errors for the Malphas archiver.
//!
//! Malphas is named after the 39th demon of the Ars Goetia, a builder of
//! towers - fitting for a codec whose work is raising binary trees.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use malphas_core::Codec;
//! use malphas_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let archive = codec.compress(data)?;
//! let original = codec.decompress(&archive)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;
