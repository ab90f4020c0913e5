use crate::{
    Alphabet, AlphabetRegistry, DecodeError, DecodeMode, Decoder, STANDARD, decode, decode_with,
    encode, encode_with, encoded_len, symbols,
};
use rand::Rng;

fn generate_blob(max_len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let length = rng.random_range(0..=max_len);
    (0..length).map(|_| rng.random::<u8>()).collect()
}

fn padding_count(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '=').count()
}

#[test]
fn test_encode_decode_empty() {
    let encoded = encode(b"");
    assert_eq!(encoded, "");
    assert_eq!(decode(&encoded).unwrap(), b"");
}

#[test]
fn test_encode_decode_short_lengths() {
    for len in 0..=12 {
        let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        let encoded = encode(&data);
        assert_eq!(decode(&encoded).unwrap(), data, "length {}", len);
    }
}

#[test]
fn test_encode_decode_random_blobs() {
    for _ in 0..200 {
        let blob = generate_blob(100);
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
    }
}

#[test]
fn test_length_law() {
    for _ in 0..100 {
        let blob = generate_blob(64);
        let encoded = encode(&blob);
        assert_eq!(encoded.len(), 4 * blob.len().div_ceil(3));
        assert_eq!(encoded.len(), encoded_len(blob.len()));
        assert_ne!(encoded.len() % 4, 1);
    }
}

#[test]
fn test_padding_count() {
    for len in 0..30 {
        let encoded = encode(&vec![0xAB; len]);
        assert_eq!(padding_count(&encoded), (3 - len % 3) % 3, "length {}", len);
    }
    assert_eq!(padding_count(&encode(b"a")), 2);
    assert_eq!(padding_count(&encode(b"ab")), 1);
    assert_eq!(padding_count(&encode(b"abc")), 0);
}

#[test]
fn test_alphabet_closure() {
    for _ in 0..100 {
        let blob = generate_blob(50);
        let encoded = encode(&blob);
        let body = encoded.trim_end_matches('=');
        assert!(encoded.len() - body.len() <= 2);
        assert!(body.chars().all(|c| STANDARD.char_to_symbol(c).is_some()));
    }
}

#[test]
fn test_decode_rejects_malformed_length() {
    assert_eq!(decode("A"), Err(DecodeError::MalformedLength { actual: 1 }));
    assert_eq!(
        decode("ABCDE"),
        Err(DecodeError::MalformedLength { actual: 5 })
    );
}

#[test]
fn test_decode_never_accepts_length_one_mod_four() {
    for len in [1, 5, 9, 13] {
        let input = "Q".repeat(len);
        assert!(matches!(
            decode(&input),
            Err(DecodeError::MalformedLength { .. })
        ));
    }
}

#[test]
fn test_decode_rejects_bad_symbol() {
    assert!(matches!(
        decode("AB#D"),
        Err(DecodeError::InvalidSymbol { char: '#', .. })
    ));
}

#[test]
fn test_concrete_vectors() {
    assert_eq!(encode(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]), "////////");

    let data = [0xA3, 0x05, 0x99, 0xCD, 0x81, 0x0F];
    assert_eq!(symbols(&data), vec![40, 48, 22, 25, 51, 24, 4, 15]);
    let rendered: String = symbols(&data)
        .into_iter()
        .map(|s| STANDARD.symbol_to_char(s))
        .collect();
    assert_eq!(encode(&data), rendered);
    assert_eq!(encode(&data), "owWZzYEP");
}

#[test]
fn test_hello_world() {
    assert_eq!(encode(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn test_table_idempotence() {
    for v in 0..64u8 {
        assert_eq!(STANDARD.char_to_symbol(STANDARD.symbol_to_char(v)), Some(v));
    }
}

#[test]
fn test_strict_accepts_every_canonical_encoding() {
    let decoder = Decoder::new(&STANDARD).mode(DecodeMode::Strict);
    for _ in 0..100 {
        let blob = generate_blob(40);
        assert_eq!(decoder.decode(&encode(&blob)).unwrap(), blob);
    }
}

#[test]
fn test_registry_alphabet_round_trip() {
    let registry = AlphabetRegistry::from_toml(
        r#"
[alphabets.shuffled]
chars = "zyxwvutsrqponmlkjihgfedcbaZYXWVUTSRQPONMLKJIHGFEDCBA9876543210_-"
padding = "~"
"#,
    )
    .unwrap();
    let alphabet: Alphabet = registry.get_alphabet("shuffled").unwrap().build().unwrap();

    for _ in 0..50 {
        let blob = generate_blob(30);
        let encoded = encode_with(&blob, &alphabet);
        assert!(!encoded.contains('='));
        assert_eq!(decode_with(&encoded, &alphabet).unwrap(), blob);
    }
    assert_eq!(encode_with(b"\x00", &alphabet), "zz~~");
}
