//! Errors that can occur anywhere between counting the input and decoding it again.
//!
//! Every stage has its own error type next to its code, [HuffmanError] wraps all of them
//! so callers running the whole pipeline can use `?` throughout.

pub use crate::decoding::bit_reader::GetBitsError;
pub use crate::huffman::{DecodeError, EncodeError, TreeBuildError};
pub use crate::priority_queue::PriorityQueueError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HuffmanError {
    #[error(transparent)]
    TreeBuildError(#[from] TreeBuildError),
    #[error(transparent)]
    EncodeError(#[from] EncodeError),
    #[error(transparent)]
    DecodeError(#[from] DecodeError),
}

impl From<PriorityQueueError> for HuffmanError {
    fn from(err: PriorityQueueError) -> Self {
        HuffmanError::TreeBuildError(err.into())
    }
}
