pub mod bits;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod streaming;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, DecodeError, StreamError, find_closest_alphabet};
