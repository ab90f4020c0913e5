//! Base64 encoding and decoding built around explicit 8-bit to 6-bit regrouping.
//!
//! ```
//! let encoded = radix64::encode(b"Hello, World!");
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(radix64::decode(&encoded).unwrap(), b"Hello, World!");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{ALPHABET_SIZE, Alphabet, AlphabetError, STANDARD};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET, Settings};
pub use crate::encoders::bits::{join_group, split_group, symbols};
pub use crate::encoders::decode::{DecodeMode, Decoder, decode_with, decoded_len_estimate};
pub use crate::encoders::encode::{encode_into, encode_with, encoded_len};
pub use crate::encoders::streaming::{StreamingDecoder, StreamingEncoder};
pub use crate::encoders::{
    AlphabetNotFoundError, DecodeError, StreamError, find_closest_alphabet,
};

/// Encodes bytes with the standard alphabet and `=` padding.
///
/// Never fails; the output length is `4 * ceil(data.len() / 3)`.
pub fn encode(data: &[u8]) -> String {
    encode_with(data, &STANDARD)
}

/// Decodes standard-alphabet Base64.
///
/// Discarded tail bits are not checked; use [`Decoder`] with
/// [`DecodeMode::Strict`] to reject non-canonical input.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(encoded, &STANDARD)
}

#[cfg(test)]
mod tests;
