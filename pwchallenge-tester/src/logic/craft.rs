//! Hand-built passwords that push a catalog as far up the gate as it will go.
//!
//! The reference catalog cannot be won (the anchored Base64 rule rejects the
//! spaces and symbols earlier rules demand), so its climb is expected to stall
//! with [`REFERENCE_STALL`] rules on screen. The winnable catalog keeps only
//! rules that can hold at the same time.
use anyhow::{Context, Result, ensure};
use pwchallenge_game::constants::TARGET_DIGIT_SUM;
use pwchallenge_game::rules::numeric::{char_len, code_point_sum};
use pwchallenge_game::{GateConfig, RuleCatalog, RuleKind, hour_token};
use std::ops::RangeInclusive;

/// Active rules once the reference climb stalls on the Base64 rule.
pub const REFERENCE_STALL: usize = 22;

/// Active rules left once the chess glyph is removed from the reference climb.
pub const REFERENCE_WITHOUT_PIECE: usize = 10;

/// Character count before the square-completing tail; plus one makes 55, a Fibonacci length.
const REFERENCE_BODY_LEN: usize = 54;
const FILLER: char = 'z';
const CHESS_GLYPH: char = '♔';
const OPERATOR: char = '+';

/// CJK block used for the tail so any shortfall up to the next square fits in one char.
const SQUARE_TAIL: RangeInclusive<u32> = 0x4E00..=0x9FFF;

/// Rules that a single password can satisfy together.
pub const WINNABLE_KINDS: [RuleKind; 10] = [
    RuleKind::MinLength,
    RuleKind::Uppercase,
    RuleKind::CurrentHour,
    RuleKind::PrimeNumber,
    RuleKind::DigitSum,
    RuleKind::RomanNumeral,
    RuleKind::ElementSymbol,
    RuleKind::Emoji,
    RuleKind::Palindrome,
    RuleKind::MathOperator,
];

#[must_use]
pub fn winnable_catalog() -> RuleCatalog {
    RuleCatalog::from_kinds(&WINNABLE_KINDS)
}

/// Digit runs that contain the hour and the prime 2 and add up to the target sum.
fn digit_runs_for(hour: u32) -> Vec<String> {
    let hour = hour % 24;
    let mut runs = vec![hour_token(hour), "2".to_string()];
    let rest = TARGET_DIGIT_SUM.saturating_sub(u64::from(hour) + 2);
    if rest > 0 {
        runs.push(rest.to_string());
    }
    runs
}

fn pad_to(password: &mut String, len: usize) {
    let missing = len.saturating_sub(char_len(password));
    password.extend(std::iter::repeat_n(FILLER, missing));
}

/// Password satisfying the first [`REFERENCE_STALL`] reference rules at `hour`.
///
/// # Errors
///
/// Returns an error if no single code point can round the code point sum up
/// to a perfect square.
pub fn reference_password(hour: u32) -> Result<String> {
    let runs = digit_runs_for(hour).join("+");
    let mut password = format!("#deadbeef 0.0.0.0 GOLF senha {CHESS_GLYPH}🂡♪ http://p {runs} ");
    ensure!(
        char_len(&password) <= REFERENCE_BODY_LEN,
        "reference body for hour {hour} is longer than {REFERENCE_BODY_LEN} chars"
    );
    pad_to(&mut password, REFERENCE_BODY_LEN);

    let sum = code_point_sum(&password);
    let root = (sum + u64::from(*SQUARE_TAIL.start()) - 1).isqrt() + 1;
    let shortfall = root * root - sum;
    let tail = u32::try_from(shortfall)
        .ok()
        .filter(|code| SQUARE_TAIL.contains(code))
        .and_then(char::from_u32)
        .with_context(|| format!("no tail code point squares the sum {sum}"))?;
    password.push(tail);
    Ok(password)
}

/// Password that wins [`winnable_catalog`] at `hour`.
#[must_use]
pub fn winning_password(hour: u32) -> String {
    let mut password = format!("PasswordC{} aba", digit_runs_for(hour).join("+"));
    let last = WINNABLE_KINDS.len() - 1;
    pad_to(&mut password, GateConfig::default().required_length(last));
    password
}

/// Drops the chess glyph, which relocks everything after the chess rule.
#[must_use]
pub fn without_chess_piece(password: &str) -> String {
    password.chars().filter(|&c| c != CHESS_GLYPH).collect()
}

/// Swaps operators for spaces; digit runs stay intact so only the operator rule breaks.
#[must_use]
pub fn without_operators(password: &str) -> String {
    password.replace(OPERATOR, " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwchallenge_game::{FixedClock, evaluate};

    #[test]
    fn digit_runs_cover_the_hour_and_hit_the_target() {
        for hour in 0..24 {
            let runs = digit_runs_for(hour);
            assert_eq!(runs[0], hour_token(hour));
            let total: u64 = runs.iter().filter_map(|r| r.parse::<u64>().ok()).sum();
            assert_eq!(total, TARGET_DIGIT_SUM, "hour {hour}");
        }
        assert_eq!(digit_runs_for(23), vec!["23", "2"]);
    }

    #[test]
    fn reference_password_stalls_at_base64_for_every_hour() {
        let catalog = RuleCatalog::standard();
        for hour in 0..24 {
            let password = reference_password(hour).expect("craft");
            assert_eq!(char_len(&password), 55);
            let eval = evaluate(catalog, &password, &FixedClock::at(hour));
            assert_eq!(eval.active_count(), REFERENCE_STALL, "hour {hour}");
            assert_eq!(eval.failing().collect::<Vec<_>>(), vec![21], "hour {hour}");
            assert!(!eval.won);
        }
    }

    #[test]
    fn removing_the_piece_relocks_past_the_chess_rule() {
        let catalog = RuleCatalog::standard();
        for hour in 0..24 {
            let password = without_chess_piece(&reference_password(hour).expect("craft"));
            let eval = evaluate(catalog, &password, &FixedClock::at(hour));
            assert_eq!(eval.active_count(), REFERENCE_WITHOUT_PIECE, "hour {hour}");
            assert_eq!(eval.failing().collect::<Vec<_>>(), vec![9]);
        }
    }

    #[test]
    fn winning_password_wins_at_every_hour() {
        let catalog = winnable_catalog();
        for hour in 0..24 {
            let password = winning_password(hour);
            let eval = evaluate(&catalog, &password, &FixedClock::at(hour));
            assert!(eval.won, "hour {hour}: {password:?}");

            let broken = evaluate(&catalog, &without_operators(&password), &FixedClock::at(hour));
            assert!(!broken.won);
            assert_eq!(broken.active_count(), WINNABLE_KINDS.len());
            assert_eq!(broken.failing().collect::<Vec<_>>(), vec![9]);
        }
        assert_eq!(winning_password(13), "PasswordC13+2+10 aba");
        assert_eq!(winning_password(23), "PasswordC23+2 abaz");
    }
}
