//! Receipt and form-field validation for new bills.

use crate::bill::BillCategory;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Percentage applied when the form leaves pct empty.
pub const DEFAULT_PCT: u32 = 20;

fn image_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(jpe?g|png)$").expect("valid receipt regex"))
}

/// Accepted receipt extensions: jpg, jpeg, png (case-insensitive).
pub fn is_image_file_name(name: &str) -> bool {
    image_name_re().is_match(name.trim())
}

/// Raw form fields as captured from the input surface. Everything numeric
/// arrives as text and is validated before submission is attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct BillForm {
    pub category: BillCategory,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: Option<String>,
    pub pct: Option<String>,
    pub commentary: Option<String>,
}

/// Fields of a form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub amount: f64,
    pub vat: Option<f64>,
    pub pct: u32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Amount(String),
    Vat(String),
    Pct(String),
    Date(String),
    MissingReceipt,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Amount(s) => write!(f, "amount {s:?} is not a non-negative number"),
            ValidationError::Vat(s) => write!(f, "vat {s:?} is not a non-negative number"),
            ValidationError::Pct(s) => write!(f, "pct {s:?} is not a whole percentage"),
            ValidationError::Date(s) => {
                write!(f, "date {s:?} is not a valid calendar date (expected YYYY-MM-DD)")
            }
            ValidationError::MissingReceipt => write!(f, "attach a receipt before submitting"),
        }
    }
}

impl std::error::Error for ValidationError {}

fn non_negative(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Check every field before any gateway call is made.
pub fn validate_form(form: &BillForm) -> Result<ValidatedFields, ValidationError> {
    let amount =
        non_negative(&form.amount).ok_or_else(|| ValidationError::Amount(form.amount.clone()))?;

    let vat = match &form.vat {
        None => None,
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => Some(non_negative(raw).ok_or_else(|| ValidationError::Vat(raw.clone()))?),
    };

    let pct = match &form.pct {
        None => DEFAULT_PCT,
        Some(raw) if raw.trim().is_empty() => DEFAULT_PCT,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::Pct(raw.clone()))?,
    };

    let date = form.date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::Date(form.date.clone()))?;

    Ok(ValidatedFields {
        amount,
        vat,
        pct,
        date: date.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BillForm {
        BillForm {
            category: BillCategory::Transport,
            name: "Vol Paris Londres".to_string(),
            amount: "348".to_string(),
            date: "2022-02-15".to_string(),
            vat: Some("70".to_string()),
            pct: Some("20".to_string()),
            commentary: None,
        }
    }

    #[test]
    fn test_receipt_extensions() {
        assert!(is_image_file_name("photo.jpg"));
        assert!(is_image_file_name("scan.JPEG"));
        assert!(is_image_file_name("facture.png"));
        assert!(!is_image_file_name("doc.pdf"));
        assert!(!is_image_file_name("archive.png.zip"));
        assert!(!is_image_file_name("jpg"));
    }

    #[test]
    fn test_valid_form() {
        let fields = validate_form(&form()).unwrap();
        assert_eq!(fields.amount, 348.0);
        assert_eq!(fields.vat, Some(70.0));
        assert_eq!(fields.pct, 20);
        assert_eq!(fields.date, "2022-02-15");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut f = form();
        f.amount = "-12".to_string();
        assert_eq!(validate_form(&f), Err(ValidationError::Amount("-12".to_string())));
    }

    #[test]
    fn test_vat_optional_but_checked() {
        let mut f = form();
        f.vat = None;
        assert_eq!(validate_form(&f).unwrap().vat, None);

        f.vat = Some("".to_string());
        assert_eq!(validate_form(&f).unwrap().vat, None);

        f.vat = Some("-3".to_string());
        assert!(matches!(validate_form(&f), Err(ValidationError::Vat(_))));
    }

    #[test]
    fn test_pct_defaults_to_twenty() {
        let mut f = form();
        f.pct = None;
        assert_eq!(validate_form(&f).unwrap().pct, DEFAULT_PCT);

        f.pct = Some("-5".to_string());
        assert!(matches!(validate_form(&f), Err(ValidationError::Pct(_))));
    }

    #[test]
    fn test_malformed_dates_rejected() {
        for bad in ["15/02/2022", "2022-02-30", "demain", ""] {
            let mut f = form();
            f.date = bad.to_string();
            assert!(matches!(validate_form(&f), Err(ValidationError::Date(_))), "{bad}");
        }
    }
}
