//! Huffman coding is a method of encoding where symbols are assigned a code,
//! and more commonly used symbols get shorter codes, and less commonly
//! used symbols get longer codes. Codes are prefix free, meaning no code
//! is the start of another code.
//!
//! The codes here are kept as strings of '0' and '1' characters. Packing them
//! into real bytes is available through [HuffmanEncoder::encode_packed].

mod code_table;
mod decoder;
mod encoder;
mod tree;

pub use code_table::*;
pub use decoder::*;
pub use encoder::*;
pub use tree::*;

/// Build a tree and code table for `data`, encode it in both the string and the packed
/// form and check that decoding gives back `data`.
///
/// # Panics
/// Panics on any mismatch. Meant to be driven by the fuzzer.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    if data.is_empty() {
        assert_eq!(build_huffman_tree(data), Err(TreeBuildError::EmptyInput));
        return;
    }

    let tree = build_huffman_tree(data).unwrap();
    assert_eq!(tree.weight(), data.len());

    let table = generate_code_table(&tree);
    let encoder = HuffmanEncoder::new(&table);
    let decoder = HuffmanDecoder::new(&tree);

    let encoded = encoder.encode(data).unwrap();
    assert_eq!(decoder.decode(&encoded).unwrap(), data);

    let packed = encoder.encode_packed(data).unwrap();
    assert_eq!(packed.bit_count, encoded.len());
    assert_eq!(decoder.decode_packed(&packed).unwrap(), data);
}

#[test]
fn roundtrip() {
    round_trip(b"");
    round_trip(b"a");
    round_trip(b"aaaa");
    round_trip(b"abracadabra");
    round_trip(&(0..=255).collect::<alloc::vec::Vec<u8>>());

    let mut data = alloc::vec![];
    data.extend(0..32);
    data.extend(0..32);
    data.extend(20..32);
    data.extend(100..255);
    data.extend(20..32);
    round_trip(&data);

    #[cfg(feature = "std")]
    if std::fs::exists("fuzz/artifacts/round_trip").unwrap_or(false) {
        for file in std::fs::read_dir("fuzz/artifacts/round_trip").unwrap() {
            if file.as_ref().unwrap().file_type().unwrap().is_file() {
                let data = std::fs::read(file.unwrap().path()).unwrap();
                round_trip(&data);
            }
        }
    }
}
