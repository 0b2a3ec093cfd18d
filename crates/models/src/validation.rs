//! Format checks applied before anything reaches the store.
//!
//! These mirror column constraints (lengths, numeric precision) and the
//! email/URL formats; no business rules live here.

use rust_decimal::Decimal;
use url::Url;

use crate::errors::ModelError;

pub const EMAIL_MAX_LEN: usize = 254;

pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(field, "this field may not be blank"));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::invalid(field, format!("ensure this field has no more than {max} characters")));
    }
    Ok(())
}

/// Non-blank, bounded, and shaped like `local@domain.tld`.
pub fn email_address(field: &str, value: &str) -> Result<(), ModelError> {
    require_text(field, value)?;
    max_len(field, value, EMAIL_MAX_LEN)?;
    if !is_email(value) {
        return Err(ModelError::invalid(field, "enter a valid email address"));
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else { return false };
    if local.is_empty() || local.contains('@') || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let label_ok = |l: &&str| {
        !l.is_empty()
            && l.len() <= 63
            && !l.starts_with('-')
            && !l.ends_with('-')
            && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    labels.iter().all(label_ok) && labels.last().is_some_and(|tld| tld.len() >= 2)
}

/// Absolute URL with an http(s)/ftp(s) scheme and a host.
pub fn http_url(field: &str, value: &str) -> Result<(), ModelError> {
    let parsed = Url::parse(value).map_err(|_| ModelError::invalid(field, "enter a valid URL"))?;
    let scheme_ok = matches!(parsed.scheme(), "http" | "https" | "ftp" | "ftps");
    if !scheme_ok || parsed.host_str().map_or(true, str::is_empty) {
        return Err(ModelError::invalid(field, "enter a valid URL"));
    }
    Ok(())
}

/// Check a decimal against a `NUMERIC(max_digits, decimal_places)` column and
/// return it rescaled to exactly `decimal_places`.
pub fn money(field: &str, value: Decimal, max_digits: u32, decimal_places: u32) -> Result<Decimal, ModelError> {
    let normalized = value.normalize();
    if normalized.scale() > decimal_places {
        return Err(ModelError::invalid(
            field,
            format!("ensure that there are no more than {decimal_places} decimal places"),
        ));
    }
    let whole_digits = max_digits - decimal_places;
    if normalized.abs() >= Decimal::from(10u64.pow(whole_digits)) {
        return Err(ModelError::invalid(
            field,
            format!("ensure that there are no more than {whole_digits} digits before the decimal point"),
        ));
    }
    let mut out = normalized;
    out.rescale(decimal_places);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn field_of(err: ModelError) -> String {
        match err {
            ModelError::Validation { field, .. } => field,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("brand", "Porsche").is_ok());
        assert_eq!(field_of(require_text("brand", "   ").unwrap_err()), "brand");
    }

    #[test]
    fn max_len_counts_chars_not_bytes() {
        assert!(max_len("model", "ÄÖÜ", 3).is_ok());
        assert!(max_len("model", "ÄÖÜx", 3).is_err());
    }

    #[test]
    fn accepts_common_emails() {
        for ok in ["driver@example.com", "first.last+tag@sub.domain.io", "a@b.co"] {
            assert!(email_address("user_email", ok).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "plain", "@example.com", "user@", "user@localhost", "us er@example.com", "user@-bad.com", "user@example.c", "a..b@example.com"] {
            assert!(email_address("user_email", bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(http_url("image_url", "https://cdn.example.com/cars/911.png").is_ok());
        assert!(http_url("image_url", "ftp://files.example.com/a.jpg").is_ok());
        assert!(http_url("image_url", "not a url").is_err());
        assert!(http_url("image_url", "mailto:someone@example.com").is_err());
        assert!(http_url("image_url", "/relative/path.png").is_err());
    }

    #[test]
    fn money_is_rescaled_to_two_places() {
        let v = money("daily_rate", Decimal::from(450), 10, 2).unwrap();
        assert_eq!(v.to_string(), "450.00");
        let v = money("daily_rate", Decimal::from_str("99.5").unwrap(), 10, 2).unwrap();
        assert_eq!(v.to_string(), "99.50");
        // trailing zeros beyond the scale are not extra precision
        let v = money("daily_rate", Decimal::from_str("12.3400").unwrap(), 10, 2).unwrap();
        assert_eq!(v.to_string(), "12.34");
    }

    #[test]
    fn money_rejects_excess_precision() {
        assert!(money("total_price", Decimal::from_str("1.005").unwrap(), 10, 2).is_err());
        assert!(money("total_price", Decimal::from_str("99999999.99").unwrap(), 10, 2).is_ok());
        assert!(money("total_price", Decimal::from_str("100000000").unwrap(), 10, 2).is_err());
    }
}
