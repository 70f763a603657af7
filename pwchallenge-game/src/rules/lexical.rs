//! Predicates over literal characters and words.
use crate::clock::hour_token;
use crate::constants::{
    CHESS_PIECES, ELEMENT_SYMBOLS, ERROR404_BINARY, MATH_OPERATORS, MIN_PALINDROME_LENGTH,
    MUSICAL_NOTES, NATO_ALPHABET, PASSWORD_TRANSLATIONS, PLAYING_CARDS, ROMAN_NUMERALS,
};

fn contains_any_char(input: &str, set: &[char]) -> bool {
    input.chars().any(|c| set.contains(&c))
}

#[must_use]
pub fn has_ascii_uppercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_uppercase())
}

#[must_use]
pub fn contains_hour(input: &str, hour: u32) -> bool {
    input.contains(hour_token(hour).as_str())
}

#[must_use]
pub fn has_roman_numeral(input: &str) -> bool {
    contains_any_char(input, &ROMAN_NUMERALS)
}

#[must_use]
pub fn has_element_symbol(input: &str) -> bool {
    ELEMENT_SYMBOLS.iter().any(|symbol| input.contains(symbol))
}

/// Brute force over every substring of at least three characters.
#[must_use]
pub fn has_palindrome(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    (0..len).any(|start| {
        (start + MIN_PALINDROME_LENGTH..=len).any(|end| {
            let window = &chars[start..end];
            window.iter().eq(window.iter().rev())
        })
    })
}

#[must_use]
pub fn has_chess_piece(input: &str) -> bool {
    contains_any_char(input, &CHESS_PIECES)
}

#[must_use]
pub fn has_math_operator(input: &str) -> bool {
    contains_any_char(input, &MATH_OPERATORS)
}

#[must_use]
pub fn has_nato_word(input: &str) -> bool {
    let upper = input.to_uppercase();
    NATO_ALPHABET.iter().any(|word| upper.contains(word))
}

#[must_use]
pub fn has_playing_card(input: &str) -> bool {
    contains_any_char(input, &PLAYING_CARDS)
}

#[must_use]
pub fn has_musical_note(input: &str) -> bool {
    contains_any_char(input, &MUSICAL_NOTES)
}

#[must_use]
pub fn has_password_translation(input: &str) -> bool {
    let lower = input.to_lowercase();
    PASSWORD_TRANSLATIONS
        .iter()
        .any(|word| lower.contains(word.to_lowercase().as_str()))
}

#[must_use]
pub fn has_binary_error404(input: &str) -> bool {
    input.contains(ERROR404_BINARY)
}
