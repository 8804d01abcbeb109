//! Huffman codec (combined compressor + decompressor).

use std::fs;
use std::path::Path;

use malphas_core::{Codec, CompressionRatio, Compressor, Decompressor, Error, Result};

use crate::archive::Archive;
use crate::bits::BitWriter;
use crate::code::CodeTable;
use crate::decoder::HuffmanDecoder;
use crate::frequency::FrequencyTable;
use crate::tree::build_tree;

/// Byte-oriented Huffman codec.
///
/// Stateless: every call builds its own tree, table, and buffers, so a
/// single instance can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        HuffmanCodec
    }

    /// Compress `src` into an archive at `dst`.
    ///
    /// The source is read fully into memory and the archive written fully
    /// back out; both handles are scoped to this call and released on every
    /// exit path.
    pub fn compress_file(&self, src: &Path, dst: &Path) -> Result<CompressionRatio> {
        let input = fs::read(src).map_err(|source| Error::SourceUnreadable {
            path: src.to_path_buf(),
            source,
        })?;
        let archive = self.compress(&input)?;
        fs::write(dst, &archive).map_err(|source| Error::DestinationUnwritable {
            path: dst.to_path_buf(),
            source,
        })?;
        Ok(CompressionRatio::new(input.len(), archive.len()))
    }

    /// Read the archive at `src` and write the reconstructed bytes to `dst`.
    ///
    /// Returns the number of reconstructed bytes.
    pub fn decompress_file(&self, src: &Path, dst: &Path) -> Result<usize> {
        let archive = fs::read(src).map_err(|source| Error::SourceUnreadable {
            path: src.to_path_buf(),
            source,
        })?;
        let output = self.decompress(&archive)?;
        fs::write(dst, &output).map_err(|source| Error::DestinationUnwritable {
            path: dst.to_path_buf(),
            source,
        })?;
        Ok(output.len())
    }
}

impl Default for HuffmanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frequencies = FrequencyTable::from_bytes(input);

        let (table, payload, bit_count) = match build_tree(&frequencies) {
            Some(root) => {
                let table = CodeTable::assign(&root)?;
                let mut writer = BitWriter::with_capacity(input.len() / 2 + 1);
                for &byte in input {
                    // Every input byte was counted, so a miss here is an
                    // internal invariant violation and must fail loudly.
                    let code = table.get(byte).ok_or(Error::UnknownSymbol { byte })?;
                    writer.write_bits(code.bits(), code.len());
                }
                let bit_count = writer.bit_len();
                (table, writer.finish(), bit_count)
            }
            // Empty input: a valid archive with no symbols and no payload.
            None => (CodeTable::empty(), Vec::new(), 0),
        };

        Ok(Archive {
            table,
            bit_count,
            payload,
        }
        .to_bytes())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Loose bound: fixed header, a full 256-entry table at its widest
        // (2 bytes plus 8 code bytes each), and a payload at the 64-bit
        // code-length cap.
        15 + 256 * 10 + input_len * 8
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let archive = Archive::parse(input)?;
        let decoder = HuffmanDecoder::from_table(&archive.table);
        decoder.decode(&archive.payload, archive.bit_count)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }
}
