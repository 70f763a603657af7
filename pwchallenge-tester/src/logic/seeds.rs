use anyhow::{Result, bail};

/// Fallback seed when the CLI list is empty.
pub const DEFAULT_SEED: u64 = 1337;

/// Resolve CLI seed tokens into a de-duplicated list, keeping first-seen order.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hex.
pub fn resolve_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let seed = if let Some(hex) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            match u64::from_str_radix(hex, 16) {
                Ok(value) => value,
                Err(_) => bail!("Unrecognized seed token: {token}"),
            }
        } else if let Ok(value) = token.parse::<i64>() {
            value.unsigned_abs()
        } else if let Ok(value) = token.parse::<u64>() {
            value
        } else {
            bail!("Unrecognized seed token: {token}");
        };

        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn resolves_decimal_negative_and_hex() {
        let seeds = resolve_seeds(&tokens(&["42", "-7", "0xff", u64::MAX.to_string().as_str()]))
            .unwrap();
        assert_eq!(seeds, vec![42, 7, 255, u64::MAX]);
    }

    #[test]
    fn drops_duplicates_and_blanks() {
        let seeds = resolve_seeds(&tokens(&["5", " ", "5", "-5", "6"])).unwrap();
        assert_eq!(seeds, vec![5, 6]);
    }

    #[test]
    fn empty_list_falls_back_to_default() {
        assert_eq!(resolve_seeds(&[]).unwrap(), vec![DEFAULT_SEED]);
    }

    #[test]
    fn rejects_garbage() {
        let err = resolve_seeds(&tokens(&["twelve"])).unwrap_err();
        assert!(err.to_string().contains("twelve"));
        assert!(resolve_seeds(&tokens(&["0xzz"])).is_err());
    }
}
