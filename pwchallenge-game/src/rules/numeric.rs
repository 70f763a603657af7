//! Predicates that look at numbers: digit runs, lengths and code point sums.
use crate::constants::{FIBONACCI_LENGTHS, MIN_PASSWORD_LENGTH, TARGET_DIGIT_SUM};

/// Input length in characters (Unicode scalar values).
///
/// This is not a UTF-16 unit count: 🂡 counts as one character, not two. The
/// gate, the length rules and the on-screen counter all use this measure.
#[must_use]
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

/// Maximal runs of ASCII digits, in order of appearance.
pub fn digit_runs(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// Value of a digit run, or `None` when it does not fit in a `u64`.
fn run_value(run: &str) -> Option<u64> {
    run.parse().ok()
}

/// Trial division up to the square root. Values below 2 are never prime.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3_u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[must_use]
pub fn has_min_length(input: &str) -> bool {
    char_len(input) >= MIN_PASSWORD_LENGTH
}

#[must_use]
pub fn contains_prime(input: &str) -> bool {
    digit_runs(input).filter_map(run_value).any(is_prime)
}

/// Every digit run summed must land exactly on the target. A run too large to
/// represent can only overshoot, so it fails the rule outright.
#[must_use]
pub fn digits_sum_to_target(input: &str) -> bool {
    digit_runs(input)
        .try_fold(0_u64, |sum, run| run_value(run).and_then(|v| sum.checked_add(v)))
        .is_some_and(|sum| sum == TARGET_DIGIT_SUM)
}

#[must_use]
pub fn has_fibonacci_length(input: &str) -> bool {
    FIBONACCI_LENGTHS.contains(&char_len(input))
}

#[must_use]
pub fn code_point_sum(input: &str) -> u64 {
    input.chars().map(|c| u64::from(u32::from(c))).sum()
}

#[must_use]
pub fn code_point_sum_is_square(input: &str) -> bool {
    let sum = code_point_sum(input);
    let root = sum.isqrt();
    root * root == sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_split_on_non_digits() {
        let runs: Vec<&str> = digit_runs("ab12c3--045x").collect();
        assert_eq!(runs, vec!["12", "3", "045"]);
        assert_eq!(digit_runs("no digits").count(), 0);
    }

    #[test]
    fn primes_follow_trial_division() {
        assert!(contains_prime("7"));
        assert!(!contains_prime("4"));
        assert!(!contains_prime("1"));
        assert!(!contains_prime("0"));
        assert!(contains_prime("x4y13"));
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(!is_prime(91));
        assert!(!is_prime(1_000_000));
    }

    #[test]
    fn oversized_runs_are_not_prime() {
        assert!(!contains_prime("99999999999999999999999"));
    }

    #[test]
    fn digit_sum_counts_whole_runs() {
        assert!(digits_sum_to_target("10 15"));
        assert!(digits_sum_to_target("a10b15c"));
        assert!(!digits_sum_to_target("10 10"));
        assert!(!digits_sum_to_target(""));
        assert!(digits_sum_to_target("0000025"));
    }

    #[test]
    fn digit_sum_overflow_is_a_plain_miss() {
        assert!(!digits_sum_to_target("25 99999999999999999999999"));
        assert!(!digits_sum_to_target("18446744073709551615 18446744073709551615"));
    }

    #[test]
    fn fibonacci_length_counts_characters() {
        assert!(has_fibonacci_length("abcdefgh"));
        assert!(!has_fibonacci_length("abcdefghi"));
        assert!(has_fibonacci_length("ééé"));
        assert!(!has_fibonacci_length(""));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        assert!(has_min_length("12345678"));
        assert!(!has_min_length("ééééééé"));
    }

    #[test]
    fn code_point_sums_detect_squares() {
        assert!(code_point_sum_is_square(""));
        // 'd' is 100
        assert!(code_point_sum_is_square("d"));
        assert!(!code_point_sum_is_square("e"));
        // 'A' (65) + '?' (63) + ' ' (32) + 'a' (97) = 257, not square
        assert!(!code_point_sum_is_square("A? a"));
        // 'y' (121) is 11 squared
        assert!(code_point_sum_is_square("y"));
    }
}
