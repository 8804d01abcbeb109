//! Property-based tests for the Huffman engine.
//!
//! These verify the invariants that must hold across arbitrary inputs:
//! - compress/decompress is the identity on any byte buffer
//! - generated code tables are prefix-free
//! - heavier symbols never get longer codes than lighter ones
//! - archive serialization round-trips the table losslessly
//!
//! Tie-breaking between equal-frequency nodes is unspecified, so nothing
//! here asserts a particular tree shape or code assignment - only observable
//! behavior.

use proptest::prelude::*;

use malphas_core::{Compressor, Decompressor};
use malphas_huffman::{build_tree, Archive, CodeTable, FrequencyTable, HuffmanCodec};

fn byte_buffer_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2048)
}

/// Buffers drawn from a narrow alphabet compress harder and exercise deeper
/// trees than uniform noise.
fn narrow_alphabet_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), Just(b'd')], 1..4096)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: decompress(compress(B)) == B for all byte buffers B.
    #[test]
    fn prop_roundtrip(input in byte_buffer_strategy()) {
        let codec = HuffmanCodec::new();
        let compressed = codec.compress(&input).unwrap();
        let decompressed = codec.decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, input);
    }

    /// Property: round-trip holds on narrow-alphabet data too.
    #[test]
    fn prop_roundtrip_narrow_alphabet(input in narrow_alphabet_strategy()) {
        let codec = HuffmanCodec::new();
        let compressed = codec.compress(&input).unwrap();
        let decompressed = codec.decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, input);
    }

    /// Property: no generated code is a prefix of another byte's code.
    #[test]
    fn prop_codes_prefix_free(input in byte_buffer_strategy()) {
        prop_assume!(!input.is_empty());

        let root = build_tree(&FrequencyTable::from_bytes(&input)).unwrap();
        let table = CodeTable::assign(&root).unwrap();

        let codes: Vec<_> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(
                        !a.is_prefix_of(b),
                        "{} is a prefix of {}", a, b
                    );
                }
            }
        }
    }

    /// Property: a strictly heavier symbol never gets a longer code.
    #[test]
    fn prop_weight_ordering(input in byte_buffer_strategy()) {
        prop_assume!(!input.is_empty());

        let frequencies = FrequencyTable::from_bytes(&input);
        let root = build_tree(&frequencies).unwrap();
        let table = CodeTable::assign(&root).unwrap();

        let entries: Vec<_> = table.iter().collect();
        for &(a, code_a) in &entries {
            for &(b, code_b) in &entries {
                if frequencies.count(a) > frequencies.count(b) {
                    prop_assert!(
                        code_a.len() <= code_b.len(),
                        "byte 0x{:02x} (count {}) got {} bits, byte 0x{:02x} (count {}) got {}",
                        a, frequencies.count(a), code_a.len(),
                        b, frequencies.count(b), code_b.len()
                    );
                }
            }
        }
    }

    /// Property: every present byte has a code; absent bytes have none.
    #[test]
    fn prop_table_covers_exactly_present_bytes(input in byte_buffer_strategy()) {
        prop_assume!(!input.is_empty());

        let frequencies = FrequencyTable::from_bytes(&input);
        let root = build_tree(&frequencies).unwrap();
        let table = CodeTable::assign(&root).unwrap();

        for byte in 0..=255u8 {
            prop_assert_eq!(
                table.get(byte).is_some(),
                frequencies.count(byte) > 0,
                "coverage mismatch for byte 0x{:02x}", byte
            );
        }
    }

    /// Property: archive serialization preserves the table and payload.
    #[test]
    fn prop_archive_round_trip(input in byte_buffer_strategy()) {
        let codec = HuffmanCodec::new();
        let bytes = codec.compress(&input).unwrap();

        let archive = Archive::parse(&bytes).unwrap();
        let reserialized = archive.to_bytes();
        prop_assert_eq!(bytes, reserialized);
    }

    /// Property: compressed payload bits match the sum of code lengths.
    #[test]
    fn prop_bit_count_matches_code_lengths(input in byte_buffer_strategy()) {
        let codec = HuffmanCodec::new();
        let bytes = codec.compress(&input).unwrap();
        let archive = Archive::parse(&bytes).unwrap();

        let expected: u64 = input
            .iter()
            .map(|&b| u64::from(archive.table.get(b).unwrap().len()))
            .sum();
        prop_assert_eq!(archive.bit_count, expected);
        prop_assert_eq!(archive.payload.len() as u64, expected.div_ceil(8));
    }
}

/// Non-proptest verification of the degenerate cases alongside the
/// properties above.
#[test]
fn test_edge_case_two_equal_symbols() {
    let codec = HuffmanCodec::new();
    let input = b"ababababab";
    let compressed = codec.compress(input).unwrap();

    let archive = Archive::parse(&compressed).unwrap();
    assert_eq!(archive.table.get(b'a').unwrap().len(), 1);
    assert_eq!(archive.table.get(b'b').unwrap().len(), 1);
    assert_eq!(codec.decompress(&compressed).unwrap(), input);
}

#[test]
fn test_edge_case_power_of_two_frequencies() {
    // Worst case for tree depth: frequencies 1, 2, 4, ..., 512.
    let mut input = Vec::new();
    for i in 0..10u8 {
        input.extend(std::iter::repeat(i).take(1usize << i));
    }

    let codec = HuffmanCodec::new();
    let compressed = codec.compress(&input).unwrap();
    assert_eq!(codec.decompress(&compressed).unwrap(), input);
}
