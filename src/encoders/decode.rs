use crate::core::alphabet::Alphabet;

use super::bits::{BYTES_PER_GROUP, SYMBOLS_PER_GROUP, discarded_bits_mask, join_group};
use super::errors::DecodeError;

/// How strictly the decoder treats the unused bits of a padded final group.
///
/// A 1-byte tail encodes 4 bits that carry no data, a 2-byte tail 2 bits.
/// A canonical encoder always sets them to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Ignore the discarded bits
    #[default]
    Lenient,
    /// Reject input whose discarded bits are not zero
    Strict,
}

/// Upper bound on the decoded size of `len` encoded characters.
pub const fn decoded_len_estimate(len: usize) -> usize {
    len / SYMBOLS_PER_GROUP * BYTES_PER_GROUP
}

/// Decodes text with the given alphabet, leniently.
pub fn decode_with(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    Decoder::new(alphabet).decode(encoded)
}

/// Configurable Base64 decoder.
///
/// Validation order, stopping at the first violation:
/// 1. length in characters must be a multiple of 4 (`MalformedLength`)
/// 2. characters before the trailing padding run, left to right: padding is
///    `MalformedPadding`, anything else outside the alphabet `InvalidSymbol`
/// 3. a trailing padding run longer than 2 is `MalformedPadding`
/// 4. in strict mode, non-zero discarded bits are `NonCanonicalTail`
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    mode: DecodeMode,
}

impl<'a> Decoder<'a> {
    /// Creates a lenient decoder for `alphabet`.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Decoder {
            alphabet,
            mode: DecodeMode::Lenient,
        }
    }

    /// Sets the decode mode.
    pub fn mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the alphabet this decoder reads.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Decodes `encoded` into a new buffer.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(decoded_len_estimate(encoded.len()));
        self.decode_into(encoded, &mut out)?;
        Ok(out)
    }

    /// Appends the decoding of `encoded` to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn decode_into(&self, encoded: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        let start = out.len();
        let result = self.decode_groups(encoded, out);
        if result.is_err() {
            out.truncate(start);
        }
        result
    }

    fn decode_groups(&self, encoded: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        if encoded.is_empty() {
            return Ok(());
        }

        let char_len = encoded.chars().count();
        if char_len % SYMBOLS_PER_GROUP != 0 {
            return Err(DecodeError::MalformedLength { actual: char_len });
        }

        let bytes = encoded.as_bytes();
        let pad_byte = self.alphabet.padding_byte();
        let padding = bytes.iter().rev().take_while(|&&b| b == pad_byte).count();
        let body_len = bytes.len() - padding;

        out.reserve(decoded_len_estimate(bytes.len()));

        let groups = bytes[..body_len].chunks_exact(SYMBOLS_PER_GROUP);
        let tail = groups.remainder();

        for (g, group) in groups.enumerate() {
            let base = g * SYMBOLS_PER_GROUP;
            let symbols = [
                self.symbol_at(encoded, group[0], base)?,
                self.symbol_at(encoded, group[1], base + 1)?,
                self.symbol_at(encoded, group[2], base + 2)?,
                self.symbol_at(encoded, group[3], base + 3)?,
            ];
            out.extend_from_slice(&join_group(symbols));
        }

        let tail_start = body_len - tail.len();
        let mut symbols = [0u8; 4];
        for (i, &byte) in tail.iter().enumerate() {
            symbols[i] = self.symbol_at(encoded, byte, tail_start + i)?;
        }

        // Body is all ASCII from here on, so byte offsets are character offsets.
        if padding > 2 || (!tail.is_empty() && tail.len() + padding != SYMBOLS_PER_GROUP) {
            return Err(DecodeError::MalformedPadding { position: body_len });
        }

        if tail.is_empty() {
            return Ok(());
        }

        if self.mode == DecodeMode::Strict {
            let last = tail.len() - 1;
            if symbols[last] & discarded_bits_mask(padding) != 0 {
                return Err(DecodeError::NonCanonicalTail {
                    position: tail_start + last,
                });
            }
        }

        out.extend_from_slice(&join_group(symbols)[..BYTES_PER_GROUP - padding]);
        Ok(())
    }

    /// Looks up the symbol for the byte at `index`.
    ///
    /// Every byte before `index` is a valid alphabet member, so `index` is
    /// both a char boundary and a character index.
    #[inline]
    fn symbol_at(&self, encoded: &str, byte: u8, index: usize) -> Result<u8, DecodeError> {
        match self.alphabet.byte_to_symbol(byte) {
            Some(symbol) => Ok(symbol),
            None => Err(self.reject(encoded, byte, index)),
        }
    }

    #[cold]
    fn reject(&self, encoded: &str, byte: u8, index: usize) -> DecodeError {
        if byte == self.alphabet.padding_byte() {
            return DecodeError::MalformedPadding { position: index };
        }

        let c = encoded[index..].chars().next().unwrap_or(byte as char);
        DecodeError::invalid_symbol(c, index, encoded, &self.alphabet.chars())
    }
}
