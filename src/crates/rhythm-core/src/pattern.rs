//! Arpeggiator beat pattern encoding
//!
//! Patterns are written in a 16-step "xox" notation: `'o'` is an onset,
//! `'-'` is a rest, and whitespace groups steps visually into beats of
//! four. Each pattern encodes to a 16-bit mask with bit `i` set iff step
//! `i` is an onset.

use thiserror::Error;

/// Number of steps every beat pattern must contain.
pub const PATTERN_STEPS: usize = 16;

/// Errors produced while encoding a beat pattern string.
///
/// Either error aborts table generation; a malformed literal must stop
/// the build rather than emit a truncated or padded mask.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid pattern length: expected 16 steps, found {found}")]
    InvalidLength { found: usize },

    #[error("unexpected symbol '{symbol}' at position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },
}

pub type Result<T> = std::result::Result<T, PatternError>;

/// Encode a 16-step beat pattern string into a bitmask.
///
/// Scans left to right, ignoring whitespace: an onset sets the bit at the
/// current step index and advances it, a rest only advances it. Exactly
/// 16 steps must remain after stripping whitespace.
///
/// # Examples
/// ```
/// use rhythm_core::pattern::pattern_to_bits;
///
/// let bits = pattern_to_bits("o-o- o-o- o-o- o-o-").unwrap();
/// assert_eq!(bits, 0x5555);
/// ```
pub fn pattern_to_bits(pattern: &str) -> Result<u16> {
    let mut bits = 0u16;
    let mut step = 0usize;

    for (position, symbol) in pattern.chars().enumerate() {
        match symbol {
            'o' => {
                if step < PATTERN_STEPS {
                    bits |= 1 << step;
                }
                step += 1;
            }
            '-' => step += 1,
            c if c.is_whitespace() => {}
            _ => return Err(PatternError::UnexpectedSymbol { symbol, position }),
        }
    }

    if step != PATTERN_STEPS {
        return Err(PatternError::InvalidLength { found: step });
    }

    Ok(bits)
}

/// The stock arpeggiator patterns, in firmware slot order.
pub const ARPEGGIATOR_PATTERNS: [&str; 22] = [
    "o-o- o-o- o-o- o-o-",
    "o-o- oooo o-o- oooo",
    "o-o- oo-o o-o- oo-o",
    "o-o- o-oo o-o- o-oo",
    "o-o- o-o- oo-o -o-o",
    "o-o- o-o- o--o o-o-",
    "o-o- o--o o-o- o--o",
    "o--o ---- o--o ----",
    "o--o --o- -o-- o--o",
    "o--o --o- -o-- o-o-",
    "o--o --o- o--o --o-",
    "o--o o--- o-o- o-oo",
    "oo-o -oo- oo-o -oo-",
    "oo-o o-o- oo-o o-o-",
    "ooo- ooo- ooo- ooo-",
    "ooo- oo-o o-oo -oo-",
    "ooo- o-o- ooo- o-o-",
    "oooo -oo- oooo -oo-",
    "oooo o-oo -oo- ooo-",
    "o--- o--- o--o -o-o",
    "o--- --oo oooo -oo-",
    "o--- ---- o--- o-oo",
];

/// Encode every stock pattern, preserving slot order.
pub fn arpeggiator_table() -> Result<Vec<u16>> {
    ARPEGGIATOR_PATTERNS
        .iter()
        .map(|pattern| pattern_to_bits(pattern))
        .collect()
}
