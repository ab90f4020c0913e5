//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use radix64::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let alphabet = registry.get_alphabet("base64").unwrap().build().unwrap();
//! assert_eq!(encode_with(b"hi", &alphabet), "aGk=");
//! ```

pub use crate::{
    // Core encoding/decoding
    decode,
    decode_with,
    encode,
    encode_with,

    // Alphabets
    Alphabet,
    AlphabetRegistry,
    STANDARD,

    // Decoder configuration
    DecodeMode,
    Decoder,

    // Errors
    DecodeError,
    StreamError,

    // Streaming
    StreamingDecoder,
    StreamingEncoder,
};
