//! # Malphas Huffman
//!
//! Byte-oriented Huffman coding engine and archive format.
//!
//! ## Overview
//!
//! Compression runs the classic pipeline: count byte frequencies, build the
//! Huffman tree by greedily merging the two lightest nodes, walk the tree to
//! assign prefix-free codes, pack the concatenated codes into bytes, and
//! frame the payload together with the code table as an archive.
//! Decompression parses the archive, inverts the code table, and greedily
//! matches prefixes until the payload's declared bit count is consumed.
//!
//! The whole input is processed in memory; there is no streaming mode.
//!
//! ## Example
//!
//! ```
//! use malphas_core::{Compressor, Decompressor};
//! use malphas_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let archive = codec.compress(b"abracadabra")?;
//! let original = codec.decompress(&archive)?;
//! assert_eq!(original, b"abracadabra");
//! # Ok::<(), malphas_core::Error>(())
//! ```

pub mod archive;
pub mod bits;
pub mod code;
pub mod codec;
pub mod decoder;
pub mod frequency;
pub mod tree;

// Re-export main types
pub use archive::Archive;
pub use code::{Code, CodeTable};
pub use codec::HuffmanCodec;
pub use decoder::HuffmanDecoder;
pub use frequency::FrequencyTable;
pub use tree::{build_tree, HuffmanNode};

/// Number of possible byte values.
pub const MAX_SYMBOLS: usize = 256;

/// Maximum code length in bits.
///
/// A longer code requires a frequency profile whose total exceeds 2^64
/// bytes, which no in-memory input can reach.
pub const MAX_CODE_BITS: usize = 64;
