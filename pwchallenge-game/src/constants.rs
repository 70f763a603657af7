//! Fixed word lists, glyph sets and tuning values shared by the rule predicates.
//!
//! Everything a predicate compares against lives here so the rules themselves
//! stay small and the data can be audited in one place.

// Gating -------------------------------------------------------------------
/// Number of leading catalog rules that are visible regardless of input.
pub const ALWAYS_ACTIVE_RULES: usize = 2;
/// Minimum input length per catalog index before a rule may unlock.
pub const LENGTH_STEP_PER_RULE: usize = 2;

// Numeric rules ------------------------------------------------------------
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const TARGET_DIGIT_SUM: u64 = 25;
pub const FIBONACCI_LENGTHS: [usize; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
pub const MIN_PALINDROME_LENGTH: usize = 3;

// Lexical rules ------------------------------------------------------------
pub const ROMAN_NUMERALS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

pub const ELEMENT_SYMBOLS: [&str; 18] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar",
];

pub const CHESS_PIECES: [char; 6] = ['♔', '♕', '♖', '♗', '♘', '♙'];

pub const MATH_OPERATORS: [char; 5] = ['+', '-', '*', '/', '='];

pub const NATO_ALPHABET: [&str; 26] = [
    "ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT", "GOLF", "HOTEL", "INDIA", "JULIET",
    "KILO", "LIMA", "MIKE", "NOVEMBER", "OSCAR", "PAPA", "QUEBEC", "ROMEO", "SIERRA", "TANGO",
    "UNIFORM", "VICTOR", "WHISKEY", "XRAY", "YANKEE", "ZULU",
];

/// Playing cards U+1F0A1 (ace of spades) through U+1F0AE (king of spades).
pub const PLAYING_CARDS: [char; 14] = [
    '🂡', '🂢', '🂣', '🂤', '🂥', '🂦', '🂧', '🂨', '🂩', '🂪', '🂫', '🂬', '🂭', '🂮',
];

pub const MUSICAL_NOTES: [char; 4] = ['♩', '♪', '♫', '♬'];

pub const PASSWORD_TRANSLATIONS: [&str; 7] = [
    "contraseña",
    "Passwort",
    "mot de passe",
    "パスワード",
    "密码",
    "senha",
    "wachtwoord",
];

/// The binary literal the final rule looks for, kept exactly as the game has always shipped it.
pub const ERROR404_BINARY: &str = "01000101011100100111001001101111011100100110100000110100";
