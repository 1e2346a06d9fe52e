//! Reading packed bits back for decoding

pub mod bit_reader;
