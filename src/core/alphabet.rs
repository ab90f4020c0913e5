use std::fmt;

/// Marker stored in the reverse table for bytes that are not alphabet members.
const INVALID: u8 = 0xFF;

/// Number of symbols in a Base64 alphabet.
pub const ALPHABET_SIZE: usize = 64;

const STANDARD_CHARS: &[u8; ALPHABET_SIZE] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The canonical RFC 4648 alphabet with `=` padding.
pub static STANDARD: Alphabet = Alphabet::STANDARD;

/// Bijective mapping between the 64 symbol values and printable characters.
///
/// An alphabet holds the forward table (symbol to character), the inverse
/// table (character to symbol) and the padding character. Every character is
/// printable ASCII, so both tables are plain byte arrays and the alphabet can
/// be built at compile time.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    encode_table: [u8; ALPHABET_SIZE],
    decode_table: [u8; 256],
    padding: u8,
}

impl Alphabet {
    /// The standard Base64 alphabet: `A-Z`, `a-z`, `0-9`, `+`, `/` and `=` padding.
    pub const STANDARD: Alphabet = Alphabet::from_tables(STANDARD_CHARS, b'=');

    /// Builds the forward and inverse tables without validation.
    ///
    /// Only used for alphabets known to be valid at compile time.
    const fn from_tables(chars: &[u8; ALPHABET_SIZE], padding: u8) -> Alphabet {
        let mut decode_table = [INVALID; 256];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            decode_table[chars[i] as usize] = i as u8;
            i += 1;
        }

        Alphabet {
            encode_table: *chars,
            decode_table,
            padding,
        }
    }

    /// Creates a custom alphabet.
    ///
    /// # Arguments
    ///
    /// * `chars` - Exactly 64 distinct printable ASCII characters, in symbol order
    /// * `padding` - Printable ASCII padding character not present in `chars`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `chars` does not contain exactly 64 characters
    /// - any character is not printable ASCII
    /// - a character appears twice
    /// - the padding character is part of the alphabet
    pub fn new(chars: &str, padding: char) -> Result<Self, AlphabetError> {
        let count = chars.chars().count();
        if count != ALPHABET_SIZE {
            return Err(AlphabetError::WrongLength(count));
        }

        for c in chars.chars().chain(std::iter::once(padding)) {
            if !c.is_ascii() {
                return Err(AlphabetError::NonAscii(c));
            }
            if !c.is_ascii_graphic() {
                return Err(AlphabetError::NonPrintable(c));
            }
        }

        let mut encode_table = [0u8; ALPHABET_SIZE];
        let mut decode_table = [INVALID; 256];
        for (symbol, byte) in chars.bytes().enumerate() {
            if decode_table[byte as usize] != INVALID {
                return Err(AlphabetError::Duplicate(byte as char));
            }
            encode_table[symbol] = byte;
            decode_table[byte as usize] = symbol as u8;
        }

        let padding = padding as u8;
        if decode_table[padding as usize] != INVALID {
            return Err(AlphabetError::PaddingInAlphabet(padding as char));
        }

        Ok(Alphabet {
            encode_table,
            decode_table,
            padding,
        })
    }

    /// Maps a symbol in `[0, 63]` to its character.
    ///
    /// The caller restricts the domain; only the low 6 bits are looked at.
    #[inline]
    pub fn symbol_to_char(&self, symbol: u8) -> char {
        debug_assert!(symbol < 64, "symbol out of range: {}", symbol);
        self.encode_table[(symbol & 0x3F) as usize] as char
    }

    /// Maps a character back to its symbol value.
    ///
    /// Returns `None` for characters outside the alphabet, the padding
    /// character included.
    #[inline]
    pub fn char_to_symbol(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        self.byte_to_symbol(c as u8)
    }

    #[inline]
    pub(crate) fn byte_to_symbol(&self, byte: u8) -> Option<u8> {
        match self.decode_table[byte as usize] {
            INVALID => None,
            symbol => Some(symbol),
        }
    }

    /// Returns the padding character.
    pub fn padding(&self) -> char {
        self.padding as char
    }

    #[inline]
    pub(crate) fn padding_byte(&self) -> u8 {
        self.padding
    }

    /// Returns true if `c` is this alphabet's padding character.
    pub fn is_padding(&self, c: char) -> bool {
        c == self.padding as char
    }

    /// Returns the 64 alphabet characters in symbol order.
    pub fn chars(&self) -> String {
        self.encode_table.iter().map(|&b| b as char).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::STANDARD
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("chars", &self.chars())
            .field("padding", &self.padding())
            .finish()
    }
}

/// Errors raised while building a custom alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not contain exactly 64 characters
    WrongLength(usize),
    /// A character (or the padding) is outside ASCII
    NonAscii(char),
    /// A character (or the padding) is whitespace or a control character
    NonPrintable(char),
    /// The same character maps to two symbols
    Duplicate(char),
    /// The padding character is also an alphabet member
    PaddingInAlphabet(char),
    /// The configured padding is not exactly one character
    PaddingNotSingleChar(String),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::WrongLength(n) => {
                write!(f, "alphabet must have exactly 64 characters, got {}", n)
            }
            AlphabetError::NonAscii(c) => {
                write!(f, "alphabet character {:?} is not ASCII", c)
            }
            AlphabetError::NonPrintable(c) => {
                write!(f, "alphabet character {:?} is not printable", c)
            }
            AlphabetError::Duplicate(c) => {
                write!(f, "duplicate character in alphabet: {}", c)
            }
            AlphabetError::PaddingInAlphabet(c) => {
                write!(f, "padding character '{}' is also an alphabet member", c)
            }
            AlphabetError::PaddingNotSingleChar(s) => {
                write!(f, "padding must be a single character, got {:?}", s)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}
