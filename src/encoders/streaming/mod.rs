mod decoder;
mod encoder;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

/// Read buffer size; a multiple of both the byte and the character group size.
const CHUNK_SIZE: usize = 4092;
