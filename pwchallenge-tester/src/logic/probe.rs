use anyhow::Result;
use colored::Colorize;
use pwchallenge_game::rules::numeric::char_len;
use pwchallenge_game::{Clock, Evaluation, RuleCatalog, evaluate};
use std::io::Write;

/// Print every catalog rule's verdict for `password`, shown or not.
///
/// Rules the gate keeps hidden are marked `locked`; the trailer reports how
/// many rules are on screen and whether the password wins.
pub fn write_probe<C: Clock + ?Sized>(
    out: &mut dyn Write,
    catalog: &RuleCatalog,
    password: &str,
    clock: &C,
) -> Result<Evaluation> {
    let eval = evaluate(catalog, password, clock);
    let gate = catalog.gate();

    writeln!(
        out,
        "{} {:?} ({} chars, hour {:02})",
        "🔎 Probing".bright_cyan().bold(),
        password,
        char_len(password),
        eval.hour
    )?;

    for (index, rule) in catalog.rules().iter().enumerate() {
        let verdict = if eval.passed(index) {
            "pass".green()
        } else {
            "fail".red()
        };
        let visibility = if eval.is_active(index) {
            "shown ".normal()
        } else {
            "locked".dimmed()
        };
        writeln!(
            out,
            "  {index:>2} [{visibility}] {verdict} {:<22} needs {:>2} chars  {}",
            rule.kind.key(),
            gate.required_length(index),
            rule.description
        )?;
    }

    writeln!(
        out,
        "Active: {}/{}  Won: {}",
        eval.active_count(),
        catalog.len(),
        eval.won
    )?;
    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwchallenge_game::FixedClock;

    #[test]
    fn probe_lists_every_rule_and_the_trailer() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let eval = write_probe(
            &mut buf,
            RuleCatalog::standard(),
            "Password",
            &FixedClock::at(9),
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(eval.active_count(), 3);
        assert_eq!(text.lines().count(), 2 + RuleCatalog::standard().len());
        assert!(text.contains("hour 09"));
        assert!(text.contains("binary_error404"));
        assert!(text.contains("Active: 3/25  Won: false"));
    }

    #[test]
    fn empty_password_shows_only_the_opening_rules() {
        let mut buf = Vec::new();
        let eval = write_probe(&mut buf, RuleCatalog::standard(), "", &FixedClock::at(0)).unwrap();
        assert_eq!(eval.active.as_slice(), &[0, 1]);
        assert!(String::from_utf8(buf).unwrap().contains("(0 chars"));
    }
}
