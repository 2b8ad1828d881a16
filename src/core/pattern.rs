//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess with two bits per position,
//! most significant position first:
//! - 0 = Miss (letter exceeds the answer's remaining budget at this position)
//! - 1 = Present (letter in the answer, not confirmed at this position)
//! - 2 = Hit (exact letter and position match)
//!
//! The textual notation uses one character per position: `'!'` = Hit,
//! `'+'` = Present, `'-'` = Miss, e.g. `"--+-!"`. The all-Hit pattern packs
//! to 682, the reserved sentinel meaning the guess was exactly the answer.

use rustc_hash::FxHashMap;
use std::fmt;

use super::{Word, WORD_LENGTH};

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not available in the answer at this point of the scan
    Miss,
    /// Letter occurs in the answer but not confirmed at this position
    Present,
    /// Exact letter and position match
    Hit,
}

impl Feedback {
    const fn bits(self) -> u16 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_bits(bits: u16) -> Self {
        match bits {
            1 => Self::Present,
            2 => Self::Hit,
            _ => Self::Miss,
        }
    }

    /// The notation character for this symbol
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Miss => '-',
            Self::Present => '+',
            Self::Hit => '!',
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the per-position feedback as a single packed integer.
/// Value range: 0-682, with 682 (all Hits) as the winning sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    /// All Hits (guessed exactly the answer)
    pub const PERFECT: Self = Self(682); // 0b10_10_10_10_10

    /// Create a new pattern from a raw encoded value
    ///
    /// # Panics
    /// Panics in debug mode if value > 682
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!(value <= 682, "Pattern value must be <= 682");
        Self(value)
    }

    /// Get the raw encoded value (0-682)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if this is the winning all-Hit pattern
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Pack an ordered sequence of symbols, leftmost position first
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; WORD_LENGTH]) -> Self {
        let mut value = 0u16;
        for symbol in symbols {
            value = (value << 2) | symbol.bits();
        }
        Self(value)
    }

    /// Unpack into the ordered sequence of symbols, leftmost position first
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LENGTH] {
        let mut symbols = [Feedback::Miss; WORD_LENGTH];
        let mut value = self.0;
        for symbol in symbols.iter_mut().rev() {
            *symbol = Feedback::from_bits(value & 3);
            value >>= 2;
        }
        symbols
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the secret
    ///
    /// # Algorithm
    /// A single left-to-right pass over positions with a per-letter "consumed"
    /// counter tracking how many copies of each letter the guess has already
    /// claimed:
    /// 1. Exact match at position i: Hit, letter consumed.
    /// 2. Otherwise, if fewer copies consumed than the answer holds: Present,
    ///    letter consumed.
    /// 3. Otherwise: Miss.
    ///
    /// This reproduces duplicate-letter handling without a separate pre-pass
    /// reserving Hits, so for a repeated guess letter where an earlier
    /// position is a Present candidate and a later position is the true Hit,
    /// the earlier position can claim the budget first. See the
    /// `repeated_letter_single_pass_scan_order` test.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("pause").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_string(), "--+-!");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut symbols = [Feedback::Miss; WORD_LENGTH];
        let mut consumed: FxHashMap<u8, u8> = FxHashMap::default();

        // Allow: index needed to compare guess[i] with answer[i] and set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                symbols[i] = Feedback::Hit;
                *consumed.entry(letter).or_insert(0) += 1;
            } else if consumed.get(&letter).copied().unwrap_or(0) < answer.letter_count(letter) {
                symbols[i] = Feedback::Present;
                *consumed.entry(letter).or_insert(0) += 1;
            }
        }

        Self::from_symbols(symbols)
    }

    /// Count the number of Hit symbols
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Feedback::Hit)
            .count()
    }

    /// Count the number of Present symbols
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Feedback::Present)
            .count()
    }

    /// Parse a pattern from notation like `"--+-!"`
    ///
    /// Accepts exactly 5 characters drawn from `'!'` (Hit), `'+'` (Present),
    /// `'-'` (Miss). Returns `None` for anything else; malformed notation is
    /// a contract violation since it is only produced by this system and by
    /// trusted test fixtures.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::Pattern;
    ///
    /// let p = Pattern::from_str("!!!!!").unwrap();
    /// assert!(p.is_perfect());
    /// assert!(Pattern::from_str("--*-!").is_none());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut value = 0u16;
        for ch in chars {
            let bits = match ch {
                '!' => 2,
                '+' => 1,
                '-' => 0,
                _ => return None,
            };
            value = (value << 2) | bits;
        }

        Some(Self(value))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_sentinel() {
        assert_eq!(Pattern::PERFECT.value(), 682);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_hits(), 5);
        assert_eq!(Pattern::PERFECT.count_presents(), 0);
        assert_eq!(Pattern::PERFECT.to_string(), "!!!!!");
    }

    #[test]
    fn pattern_abbey_encodes_to_sentinel() {
        assert_eq!(pattern("abbey", "abbey").value(), 682);
    }

    #[test]
    fn pattern_all_miss() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.value(), 0);
        assert_eq!(p.count_hits(), 0);
        assert_eq!(p.count_presents(), 0);
    }

    #[test]
    fn pattern_known_feedback_table() {
        // Ground-truth table for the single-pass scan, including
        // duplicate-letter cases.
        let cases = [
            ("abbey", "abbey", "!!!!!"),
            ("reast", "thorn", "+---+"),
            ("throb", "thorn", "!!++-"),
            ("orate", "thorn", "++-+-"),
            ("roast", "thorn", "++--+"),
            ("court", "thorn", "-+-!+"),
            ("thorn", "thorn", "!!!!!"),
            ("reast", "other", "++--+"),
            ("tutee", "other", "+--!-"),
            ("other", "other", "!!!!!"),
            ("reast", "tacit", "--+-!"),
            ("dough", "tacit", "-----"),
            ("tapis", "tacit", "!!-!-"),
            ("quail", "tacit", "--+!-"),
            ("peony", "tacit", "-----"),
            ("magic", "tacit", "-!-!+"),
            ("tacit", "tacit", "!!!!!"),
            ("crane", "pause", "--+-!"),
            ("taboo", "haloo", "-!-!!"),
            ("taboo", "haloc", "-!-!-"),
        ];

        for (guess, answer, expected) in cases {
            assert_eq!(
                pattern(guess, answer).to_string(),
                expected,
                "{guess} vs {answer}"
            );
        }
    }

    #[test]
    fn pattern_deterministic() {
        let first = pattern("crane", "pause");
        let second = pattern("crane", "pause");
        assert_eq!(first, second);
    }

    #[test]
    fn pattern_all_hit_iff_equal() {
        let words = ["crane", "slate", "abbey", "aaaaa", "haloo"];
        for guess in words {
            for answer in words {
                let p = pattern(guess, answer);
                assert_eq!(p.is_perfect(), guess == answer, "{guess} vs {answer}");
            }
        }
    }

    #[test]
    fn pattern_hit_count_invariant() {
        let words = ["crane", "slate", "speed", "erase", "abbey", "taboo", "haloo"];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                let p = Pattern::calculate(&g, &a);

                let exact_matches = (0..5).filter(|&i| g.char_at(i) == a.char_at(i)).count();
                assert_eq!(p.count_hits(), exact_matches, "{guess} vs {answer}");

                // Hits + Presents for any letter never exceed its count in
                // the answer.
                for letter in b'a'..=b'z' {
                    let claimed = p
                        .symbols()
                        .iter()
                        .enumerate()
                        .filter(|&(i, &s)| g.char_at(i) == letter && s != Feedback::Miss)
                        .count();
                    assert!(
                        claimed <= usize::from(a.letter_count(letter)),
                        "{guess} vs {answer}: letter {} over-claimed",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn repeated_letter_single_pass_scan_order() {
        // The earlier 'a' claims the answer's single 'a' as Present before
        // the scan reaches the true Hit at position 1. A two-pass reference
        // would mark position 0 as Miss instead.
        assert_eq!(pattern("aabbb", "xaxxx").to_string(), "+!---");
    }

    #[test]
    fn pattern_from_str_valid() {
        let p = Pattern::from_str("--+-!").unwrap();
        assert_eq!(p.symbols()[2], Feedback::Present);
        assert_eq!(p.symbols()[4], Feedback::Hit);
        assert_eq!(p.count_hits(), 1);
        assert_eq!(p.count_presents(), 1);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("--+-!!").is_none()); // Too long (6 chars)
        assert!(Pattern::from_str("--+").is_none()); // Too short
        assert!(Pattern::from_str("--x-!").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_round_trip_all_valid_patterns() {
        // Every pattern notation must round-trip exactly through the integer
        // encoding.
        let symbols = ['-', '+', '!'];
        for a in symbols {
            for b in symbols {
                for c in symbols {
                    for d in symbols {
                        for e in symbols {
                            let text: String = [a, b, c, d, e].iter().collect();
                            let p = Pattern::from_str(&text).unwrap();
                            assert_eq!(p.to_string(), text);
                            assert_eq!(Pattern::new(p.value()), p);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn pattern_symbols_round_trip() {
        let p = Pattern::from_str("!+-+!").unwrap();
        assert_eq!(Pattern::from_symbols(p.symbols()), p);
    }

    #[test]
    fn pattern_from_str_trait() {
        let p: Pattern = "--+-!".parse().unwrap();
        assert_eq!(p.to_string(), "--+-!");
        assert!("--*-!".parse::<Pattern>().is_err());
    }
}
