use super::code_table::CodeTable;
use crate::common::bit_from_char;
use crate::encoding::bit_writer::BitWriter;
use crate::encoding::PackedBits;
use alloc::string::String;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("Byte 0x{symbol:02X} at position {position} has no code in the code table")]
    UndefinedSymbol { symbol: u8, position: usize },
}

/// Replaces every byte of a text by its code.
pub struct HuffmanEncoder<'table> {
    table: &'table CodeTable,
}

impl<'t> HuffmanEncoder<'t> {
    pub fn new(table: &'t CodeTable) -> HuffmanEncoder<'t> {
        HuffmanEncoder { table }
    }

    fn code(&self, symbol: u8, position: usize) -> Result<&'t str, EncodeError> {
        self.table
            .get(symbol)
            .ok_or(EncodeError::UndefinedSymbol { symbol, position })
    }

    /// Concatenate the codes of all bytes in `data` into a '0'/'1' string
    pub fn encode(&self, data: &[u8]) -> Result<String, EncodeError> {
        let mut encoded = String::new();
        for (position, &symbol) in data.iter().enumerate() {
            encoded.push_str(self.code(symbol, position)?);
        }
        vprintln!("Encoded {} bytes into {} bits", data.len(), encoded.len());
        Ok(encoded)
    }

    /// Same as [HuffmanEncoder::encode] but packs the bits into bytes
    pub fn encode_packed(&self, data: &[u8]) -> Result<PackedBits, EncodeError> {
        let mut writer = BitWriter::new();
        for (position, &symbol) in data.iter().enumerate() {
            // codes only ever hold '0' and '1'
            for bit in self.code(symbol, position)?.chars().filter_map(bit_from_char) {
                writer.write_bit(bit);
            }
        }
        let bit_count = writer.index();
        Ok(PackedBits {
            bytes: writer.dump(),
            bit_count,
        })
    }
}

/// Encode `text` with the codes from `table`.
pub fn encode(text: &[u8], table: &CodeTable) -> Result<String, EncodeError> {
    HuffmanEncoder::new(table).encode(text)
}
