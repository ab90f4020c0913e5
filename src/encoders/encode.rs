use crate::core::alphabet::Alphabet;

use super::bits::{BYTES_PER_GROUP, SYMBOLS_PER_GROUP, split_group, tail_symbols};

/// Length of the padded encoding of `len` bytes: `4 * ceil(len / 3)`.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(BYTES_PER_GROUP) * SYMBOLS_PER_GROUP
}

/// Encodes bytes with the given alphabet.
///
/// Total over all inputs. Full 3-byte groups become 4 characters; a 2-byte
/// tail becomes 3 characters and one padding character, a 1-byte tail 2
/// characters and two padding characters. Empty input encodes to "".
pub fn encode_with(data: &[u8], alphabet: &Alphabet) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));
    encode_into(data, alphabet, &mut result);
    result
}

/// Appends the encoding of `data` to `out`.
pub fn encode_into(data: &[u8], alphabet: &Alphabet, out: &mut String) {
    out.reserve(encoded_len(data.len()));

    let groups = data.chunks_exact(BYTES_PER_GROUP);
    let tail = groups.remainder();

    for group in groups {
        for symbol in split_group([group[0], group[1], group[2]]) {
            out.push(alphabet.symbol_to_char(symbol));
        }
    }

    encode_tail(tail, alphabet, out);
}

/// Encodes the final 0-2 bytes, emitting padding for a short group.
pub(crate) fn encode_tail(tail: &[u8], alphabet: &Alphabet, out: &mut String) {
    if tail.is_empty() {
        return;
    }
    debug_assert!(tail.len() < BYTES_PER_GROUP);

    let mut group = [0u8; 3];
    group[..tail.len()].copy_from_slice(tail);

    let used = tail_symbols(tail.len());
    for &symbol in &split_group(group)[..used] {
        out.push(alphabet.symbol_to_char(symbol));
    }
    for _ in used..SYMBOLS_PER_GROUP {
        out.push(alphabet.padding());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::STANDARD;

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 4);
        assert_eq!(encoded_len(2), 4);
        assert_eq!(encoded_len(3), 4);
        assert_eq!(encoded_len(4), 8);
        assert_eq!(encoded_len(6), 8);
    }

    #[test]
    fn test_rfc4648_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (input, expected) in vectors {
            assert_eq!(encode_with(input, &STANDARD), expected);
        }
    }

    #[test]
    fn test_all_ones() {
        assert_eq!(encode_with(&[0xFF; 6], &STANDARD), "////////");
    }

    #[test]
    fn test_worked_example() {
        let data = [0xA3, 0x05, 0x99, 0xCD, 0x81, 0x0F];
        assert_eq!(encode_with(&data, &STANDARD), "owWZzYEP");
    }

    #[test]
    fn test_tail_padding() {
        assert_eq!(encode_with(&[0x00], &STANDARD), "AA==");
        assert_eq!(encode_with(&[0x00, 0x00], &STANDARD), "AAA=");
        assert_eq!(encode_with(&[0xFF], &STANDARD), "/w==");
        assert_eq!(encode_with(&[0xFF, 0xFF], &STANDARD), "//8=");
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("prefix:");
        encode_into(b"foo", &STANDARD, &mut out);
        encode_into(b"f", &STANDARD, &mut out);
        assert_eq!(out, "prefix:Zm9vZg==");
    }

    #[test]
    fn test_custom_alphabet_and_padding() {
        let alphabet = crate::Alphabet::new(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
            '.',
        )
        .unwrap();
        assert_eq!(encode_with(&[0xFB, 0xFF], &alphabet), "-_8.");
        assert_eq!(encode_with(&[0xFB, 0xFF], &STANDARD), "+/8=");
    }
}
