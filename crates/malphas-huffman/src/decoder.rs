//! Greedy prefix decoding of a packed payload.

use std::collections::HashMap;

use malphas_core::{Error, Result};

use crate::bits::BitReader;
use crate::code::CodeTable;

/// Decoder for a packed payload, built from the archive's code table.
///
/// Holds the inverse mapping `(length, bits) -> byte`. Because the codes are
/// prefix-free, growing a candidate one bit at a time and taking the first
/// match is unambiguous and correct.
pub struct HuffmanDecoder {
    inverse: HashMap<(u8, u64), u8>,
    max_len: u8,
}

impl HuffmanDecoder {
    /// Build the inverse mapping from a code table.
    pub fn from_table(table: &CodeTable) -> Self {
        let inverse = table
            .iter()
            .map(|(byte, code)| ((code.len(), code.bits()), byte))
            .collect();
        HuffmanDecoder {
            inverse,
            max_len: table.max_len(),
        }
    }

    /// Decode exactly `bit_count` bits of `payload` back into bytes.
    ///
    /// Any mismatch between payload and table is a corrupt-archive error:
    /// a candidate outgrowing the longest stored code, the payload ending
    /// inside a code, or payload bits present with an empty table.
    pub fn decode(&self, payload: &[u8], bit_count: u64) -> Result<Vec<u8>> {
        if bit_count == 0 {
            return Ok(Vec::new());
        }
        if self.inverse.is_empty() {
            return Err(Error::corrupt("payload bits with an empty code table"));
        }
        if bit_count > payload.len() as u64 * 8 {
            return Err(Error::corrupt(format!(
                "bit count {} exceeds payload of {} bytes",
                bit_count,
                payload.len()
            )));
        }

        let mut reader = BitReader::new(payload, bit_count);
        let mut output = Vec::new();

        while !reader.is_empty() {
            output.push(self.decode_symbol(&mut reader)?);
        }

        Ok(output)
    }

    /// Decode a single symbol by growing a candidate prefix.
    fn decode_symbol(&self, reader: &mut BitReader<'_>) -> Result<u8> {
        let mut candidate = 0u64;
        let mut len = 0u8;

        loop {
            let bit = reader
                .read_bit()
                .map_err(|_| Error::corrupt("payload ended inside a code"))?;
            candidate = (candidate << 1) | u64::from(bit);
            len += 1;

            if let Some(&byte) = self.inverse.get(&(len, candidate)) {
                return Ok(byte);
            }
            if len >= self.max_len {
                return Err(Error::corrupt(format!(
                    "bit sequence {:0width$b} matches no code",
                    candidate,
                    width = len as usize
                )));
            }
        }
    }
}
