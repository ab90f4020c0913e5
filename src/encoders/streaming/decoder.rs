use crate::core::alphabet::Alphabet;
use crate::encoders::bits::SYMBOLS_PER_GROUP;
use crate::encoders::decode::{DecodeMode, Decoder};
use crate::encoders::errors::{DecodeError, StreamError};
use std::io::{self, Read, Write};

use super::CHUNK_SIZE;

/// Streaming decoder for processing large amounts of encoded data efficiently.
///
/// Reads text in chunks and decodes every complete 4-character group as it
/// arrives; at most 3 characters are carried between reads. ASCII whitespace
/// (line breaks in wrapped files) is skipped. Error positions count the
/// non-whitespace characters of the whole stream.
pub struct StreamingDecoder<'a, W: Write> {
    decoder: Decoder<'a>,
    writer: W,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a new lenient streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet used for encoding
    /// * `writer` - The destination for decoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingDecoder {
            decoder: Decoder::new(alphabet),
            writer,
        }
    }

    /// Sets the decode mode.
    pub fn mode(mut self, mode: DecodeMode) -> Self {
        self.decoder = self.decoder.mode(mode);
        self
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Decodes everything `reader` yields.
    ///
    /// Returns the number of bytes written. Output already written when an
    /// error is detected stays written; the error describes the first
    /// violation in the stream.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<u64, StreamError> {
        let alphabet = self.decoder.alphabet();
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut pending: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + SYMBOLS_PER_GROUP);
        let mut out = Vec::with_capacity(CHUNK_SIZE);
        let mut consumed = 0usize;
        let mut padding_at: Option<usize> = None;
        let mut written = 0u64;

        loop {
            let bytes_read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            for (i, &byte) in chunk[..bytes_read].iter().enumerate() {
                if byte.is_ascii_whitespace() {
                    continue;
                }
                if let Some(position) = padding_at {
                    return Err(DecodeError::MalformedPadding { position }.into());
                }
                if !byte.is_ascii() {
                    if let Some(err) = self.first_violation(&pending) {
                        return Err(err.offset_by(consumed).into());
                    }
                    let end = bytes_read.min(i + 4);
                    let c = String::from_utf8_lossy(&chunk[i..end])
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    let context = format!("{}{}", String::from_utf8_lossy(&pending), c);
                    let err = DecodeError::invalid_symbol(
                        c,
                        pending.len(),
                        &context,
                        &alphabet.chars(),
                    );
                    return Err(err.offset_by(consumed).into());
                }
                pending.push(byte);
            }

            let complete = pending.len() / SYMBOLS_PER_GROUP * SYMBOLS_PER_GROUP;
            if complete == 0 {
                continue;
            }

            out.clear();
            let groups = String::from_utf8_lossy(&pending[..complete]);
            self.decoder
                .decode_into(&groups, &mut out)
                .map_err(|e| e.offset_by(consumed))?;

            let pad_byte = alphabet.padding_byte();
            let padding = pending[..complete]
                .iter()
                .rev()
                .take_while(|&&b| b == pad_byte)
                .count();
            if padding > 0 {
                padding_at = Some(consumed + complete - padding);
            }

            self.writer.write_all(&out)?;
            written += out.len() as u64;
            consumed += complete;
            pending.drain(..complete);
        }

        if !pending.is_empty() {
            return Err(DecodeError::MalformedLength {
                actual: consumed + pending.len(),
            }
            .into());
        }

        self.writer.flush()?;
        log::debug!(
            "streaming decode finished: {} characters in, {} bytes out",
            consumed,
            written
        );
        Ok(written)
    }

    /// Reports the first non-member among buffered characters, if any.
    fn first_violation(&self, pending: &[u8]) -> Option<DecodeError> {
        let alphabet = self.decoder.alphabet();
        let index = pending
            .iter()
            .position(|&b| alphabet.byte_to_symbol(b).is_none())?;
        let byte = pending[index];
        if byte == alphabet.padding_byte() {
            return Some(DecodeError::MalformedPadding { position: index });
        }
        let context = String::from_utf8_lossy(pending);
        Some(DecodeError::invalid_symbol(
            byte as char,
            index,
            &context,
            &alphabet.chars(),
        ))
    }
}
