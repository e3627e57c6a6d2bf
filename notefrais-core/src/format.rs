//! Display formatting for bill rows (short French dates, amounts).

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT_FR: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// Format an ISO calendar date token as the short French form used in bill
/// rows, e.g. "2004-04-04" -> "4 Avr. 04".
pub fn format_date(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("unparseable date {raw:?}"))?;
    let month = MONTHS_SHORT_FR[date.month0() as usize];
    Ok(format!("{} {} {:02}", date.day(), month, date.year() % 100))
}

/// Amount display: whole euros without decimals, cents otherwise.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0} €")
    } else {
        format!("{amount:.2} €")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_short_french() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Janv. 01");
        assert_eq!(format_date("2022-12-31").unwrap(), "31 Déc. 22");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert!(format_date("hier").is_err());
        assert!(format_date("04/04/2004").is_err());
        assert!(format_date("2004-13-01").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(400.0), "400 €");
        assert_eq!(format_amount(37.3), "37.30 €");
    }
}
