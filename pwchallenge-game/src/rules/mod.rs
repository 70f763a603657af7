//! Rule kinds and predicate dispatch.
//!
//! Each [`RuleKind`] names one pure predicate over the candidate password. The
//! predicates live in three groups: [`numeric`] (digit runs, lengths, code point
//! sums), [`lexical`] (literal characters and words) and [`patterns`] (regexes).
//! Only [`RuleKind::CurrentHour`] consults the injected [`Clock`].
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock::Clock;

pub mod lexical;
pub mod numeric;
pub mod patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MinLength,
    Uppercase,
    CurrentHour,
    PrimeNumber,
    DigitSum,
    RomanNumeral,
    ElementSymbol,
    Emoji,
    Palindrome,
    ChessPiece,
    MathOperator,
    FibonacciLength,
    HexColor,
    NatoWord,
    Ipv4Address,
    PlayingCard,
    Url,
    MusicalNote,
    PasswordTranslation,
    CommitHash,
    CodePointSquare,
    Base64,
    JsonObject,
    ChessMove,
    BinaryError404,
}

impl RuleKind {
    /// Every kind, in the order of the standard catalog.
    pub const ALL: [Self; 25] = [
        Self::MinLength,
        Self::Uppercase,
        Self::CurrentHour,
        Self::PrimeNumber,
        Self::DigitSum,
        Self::RomanNumeral,
        Self::ElementSymbol,
        Self::Emoji,
        Self::Palindrome,
        Self::ChessPiece,
        Self::MathOperator,
        Self::FibonacciLength,
        Self::HexColor,
        Self::NatoWord,
        Self::Ipv4Address,
        Self::PlayingCard,
        Self::Url,
        Self::MusicalNote,
        Self::PasswordTranslation,
        Self::CommitHash,
        Self::CodePointSquare,
        Self::Base64,
        Self::JsonObject,
        Self::ChessMove,
        Self::BinaryError404,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MinLength => "min_length",
            Self::Uppercase => "uppercase",
            Self::CurrentHour => "current_hour",
            Self::PrimeNumber => "prime_number",
            Self::DigitSum => "digit_sum",
            Self::RomanNumeral => "roman_numeral",
            Self::ElementSymbol => "element_symbol",
            Self::Emoji => "emoji",
            Self::Palindrome => "palindrome",
            Self::ChessPiece => "chess_piece",
            Self::MathOperator => "math_operator",
            Self::FibonacciLength => "fibonacci_length",
            Self::HexColor => "hex_color",
            Self::NatoWord => "nato_word",
            Self::Ipv4Address => "ipv4_address",
            Self::PlayingCard => "playing_card",
            Self::Url => "url",
            Self::MusicalNote => "musical_note",
            Self::PasswordTranslation => "password_translation",
            Self::CommitHash => "commit_hash",
            Self::CodePointSquare => "code_point_square",
            Self::Base64 => "base64",
            Self::JsonObject => "json_object",
            Self::ChessMove => "chess_move",
            Self::BinaryError404 => "binary_error404",
        }
    }

    /// Player-facing text shown on the rule card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MinLength => "Your password must be at least 8 characters long",
            Self::Uppercase => "Your password must contain at least one uppercase letter",
            Self::CurrentHour => "Your password must contain the current hour (in 24-hour format)",
            Self::PrimeNumber => "Your password must contain a prime number",
            Self::DigitSum => "The sum of all numbers in your password must be 25",
            Self::RomanNumeral => "Your password must contain a Roman numeral",
            Self::ElementSymbol => "Your password must contain a chemical element symbol",
            Self::Emoji => "Your password must contain an emoji",
            Self::Palindrome => "Your password must contain a palindrome of at least 3 characters",
            Self::ChessPiece => "Your password must contain a chess piece (♔♕♖♗♘♙)",
            Self::MathOperator => "Your password must contain a mathematical operator (+,-,*,/,=)",
            Self::FibonacciLength => "The length of your password must be a Fibonacci number",
            Self::HexColor => "Your password must contain a valid hex color code (e.g., #FF0000)",
            Self::NatoWord => "Your password must contain a word from the NATO phonetic alphabet",
            Self::Ipv4Address => "Your password must contain a valid IPv4 address",
            Self::PlayingCard => "Your password must contain a playing card (e.g., 🂡, 🂢, 🂣)",
            Self::Url => "Your password must contain a valid URL",
            Self::MusicalNote => "Your password must contain a musical note (♩♪♫♬)",
            Self::PasswordTranslation => {
                "Your password must contain a word that means 'password' in another language"
            }
            Self::CommitHash => "Your password must contain a valid Git commit hash",
            Self::CodePointSquare => {
                "The ASCII values of all characters must sum to a perfect square"
            }
            Self::Base64 => "Your password must contain a valid base64 encoded string",
            Self::JsonObject => "Your password must contain a valid JSON object",
            Self::ChessMove => "Your password must contain a valid chess move in algebraic notation",
            Self::BinaryError404 => "Your password must contain 'Error404' written in binary ASCII",
        }
    }

    #[must_use]
    pub const fn uses_clock(self) -> bool {
        matches!(self, Self::CurrentHour)
    }

    /// Evaluate this rule against `input`. Total over every string.
    pub fn check<C: Clock + ?Sized>(self, input: &str, clock: &C) -> bool {
        match self {
            Self::MinLength => numeric::has_min_length(input),
            Self::Uppercase => lexical::has_ascii_uppercase(input),
            Self::CurrentHour => lexical::contains_hour(input, clock.local_hour()),
            Self::PrimeNumber => numeric::contains_prime(input),
            Self::DigitSum => numeric::digits_sum_to_target(input),
            Self::RomanNumeral => lexical::has_roman_numeral(input),
            Self::ElementSymbol => lexical::has_element_symbol(input),
            Self::Emoji => patterns::has_emoji(input),
            Self::Palindrome => lexical::has_palindrome(input),
            Self::ChessPiece => lexical::has_chess_piece(input),
            Self::MathOperator => lexical::has_math_operator(input),
            Self::FibonacciLength => numeric::has_fibonacci_length(input),
            Self::HexColor => patterns::has_hex_color(input),
            Self::NatoWord => lexical::has_nato_word(input),
            Self::Ipv4Address => patterns::has_ipv4_address(input),
            Self::PlayingCard => lexical::has_playing_card(input),
            Self::Url => patterns::has_url(input),
            Self::MusicalNote => lexical::has_musical_note(input),
            Self::PasswordTranslation => lexical::has_password_translation(input),
            Self::CommitHash => patterns::has_commit_hash(input),
            Self::CodePointSquare => numeric::code_point_sum_is_square(input),
            Self::Base64 => patterns::is_base64(input),
            Self::JsonObject => patterns::has_json_object(input),
            Self::ChessMove => patterns::has_chess_move(input),
            Self::BinaryError404 => lexical::has_binary_error404(input),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule kind `{0}`")]
pub struct UnknownRuleKind(pub String);

impl FromStr for RuleKind {
    type Err = UnknownRuleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRuleKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = RuleKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), RuleKind::ALL.len());
        for kind in RuleKind::ALL {
            assert_eq!(kind.key().parse::<RuleKind>(), Ok(kind));
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = "sudoku".parse::<RuleKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rule kind `sudoku`");
    }

    #[test]
    fn every_predicate_is_total_on_empty_input() {
        let clock = FixedClock::at(0);
        let passing: Vec<_> = RuleKind::ALL
            .into_iter()
            .filter(|kind| kind.check("", &clock))
            .collect();
        assert_eq!(passing, vec![RuleKind::CodePointSquare, RuleKind::Base64]);
    }

    #[test]
    fn only_the_hour_rule_reads_the_clock() {
        let input = "09";
        let morning = FixedClock::at(9);
        let evening = FixedClock::at(21);
        for kind in RuleKind::ALL {
            let differs = kind.check(input, &morning) != kind.check(input, &evening);
            assert_eq!(differs, kind.uses_clock(), "{kind}");
        }
    }

    #[test]
    fn reference_examples_hold() {
        let clock = FixedClock::at(12);
        assert!(RuleKind::PrimeNumber.check("7", &clock));
        assert!(!RuleKind::PrimeNumber.check("4", &clock));
        assert!(!RuleKind::PrimeNumber.check("1", &clock));
        assert!(RuleKind::DigitSum.check("10 15", &clock));
        assert!(!RuleKind::DigitSum.check("10 10", &clock));
        assert!(RuleKind::Palindrome.check("abcba", &clock));
        assert!(!RuleKind::Palindrome.check("abcd", &clock));
        assert!(RuleKind::FibonacciLength.check("abcdefgh", &clock));
        assert!(!RuleKind::FibonacciLength.check("abcdefghi", &clock));
        assert!(RuleKind::Base64.check("QUJD", &clock));
        assert!(!RuleKind::Base64.check("QUJD!", &clock));
    }
}
