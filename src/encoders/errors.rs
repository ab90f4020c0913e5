use std::fmt;
use std::io;

/// Characters of input shown on each side of an error position.
const SNIPPET_RADIUS: usize = 30;

/// Errors that can occur during decoding.
///
/// Decoding validates up front and stops at the first violation; no partial
/// output is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the alphabet appears where a symbol is expected
    InvalidSymbol {
        char: char,
        /// Character index into the input
        position: usize,
        /// Input excerpt around `position`
        snippet: String,
        /// Column of the offending character inside `snippet`
        column: usize,
        valid_chars: String,
    },
    /// The input length in characters is not a multiple of 4
    MalformedLength { actual: usize },
    /// A padding character appears outside the trailing 1-2 positions
    MalformedPadding { position: usize },
    /// The bits discarded by a padded group are not zero (strict mode only)
    NonCanonicalTail { position: usize },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context.
    ///
    /// `position` is a character index into `input`.
    pub fn invalid_symbol(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        let start = position.saturating_sub(SNIPPET_RADIUS);
        let body: String = input
            .chars()
            .skip(start)
            .take(SNIPPET_RADIUS * 2 + 1)
            .collect();
        let (snippet, column) = if start > 0 {
            (format!("...{}", body), position - start + 3)
        } else {
            (body, position)
        };

        DecodeError::InvalidSymbol {
            char: c,
            position,
            snippet,
            column,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Character index the error refers to, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidSymbol { position, .. }
            | DecodeError::MalformedPadding { position }
            | DecodeError::NonCanonicalTail { position } => Some(*position),
            DecodeError::MalformedLength { .. } => None,
        }
    }

    /// Shifts the reported position, used when the input is a window of a
    /// larger stream.
    pub(crate) fn offset_by(self, offset: usize) -> Self {
        match self {
            DecodeError::InvalidSymbol {
                char,
                position,
                snippet,
                column,
                valid_chars,
            } => DecodeError::InvalidSymbol {
                char,
                position: position + offset,
                snippet,
                column,
                valid_chars,
            },
            DecodeError::MalformedPadding { position } => DecodeError::MalformedPadding {
                position: position + offset,
            },
            DecodeError::NonCanonicalTail { position } => DecodeError::NonCanonicalTail {
                position: position + offset,
            },
            other => other,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidSymbol {
                char: c,
                position,
                snippet,
                column,
                valid_chars,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character {:?} at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f, "  {}", snippet)?;
                write!(f, "  {}", " ".repeat(*column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;
                write_hint(f, use_color, &format!("valid characters: {}", valid_chars))
            }
            DecodeError::MalformedLength { actual } => {
                write_header(f, use_color, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} characters, expected a multiple of 4",
                    actual
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "add padding (=) or check for missing characters",
                )
            }
            DecodeError::MalformedPadding { position } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid padding at position {}", position),
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "'=' may only appear as the last one or two characters of the input",
                )
            }
            DecodeError::NonCanonicalTail { position } => {
                write_header(
                    f,
                    use_color,
                    &format!("non-zero trailing bits at position {}", position),
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "the input was not produced by a canonical encoder; decode without --strict to accept it",
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised by the streaming adapters.
#[derive(Debug)]
pub enum StreamError {
    /// Reading input or writing output failed
    Io(io::Error),
    /// The encoded stream is invalid
    Decode(DecodeError),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Decode(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        writeln!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color, &format!("alphabet '{}' not found", self.name))?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`radix64 config list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `radix64 config list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
