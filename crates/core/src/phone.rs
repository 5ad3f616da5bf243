//! Telephone number normalization.
//!
//! With the `phonenumber` feature, a number given together with a
//! two-letter region is rewritten in E.164 form (`+31612345678`).
//! Without the feature, or without a region, numbers pass through as-is.

#[cfg(feature = "phonenumber")]
pub fn normalize(raw: &str, region: Option<&str>) -> String {
    use tracing::warn;

    let Some(region) = region else {
        return raw.to_owned();
    };
    let country = match region
        .to_ascii_uppercase()
        .parse::<phonenumber::country::Id>()
    {
        Ok(country) => country,
        Err(_) => {
            warn!(region, "unknown phone region, storing number unmodified");
            return raw.to_owned();
        }
    };
    match phonenumber::parse(Some(country), raw) {
        Ok(number) => number
            .format()
            .mode(phonenumber::Mode::E164)
            .to_string(),
        Err(err) => {
            warn!(region, error = %err, "unparsable phone number, storing it unmodified");
            raw.to_owned()
        }
    }
}

#[cfg(not(feature = "phonenumber"))]
pub fn normalize(raw: &str, region: Option<&str>) -> String {
    if let Some(region) = region {
        tracing::debug!(region, "phone formatting not compiled in, storing number unmodified");
    }
    raw.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_region_keeps_raw_number() {
        assert_eq!(normalize("020 123 4567", None), "020 123 4567");
    }

    #[cfg(feature = "phonenumber")]
    #[test]
    fn test_region_formats_to_e164() {
        assert_eq!(normalize("0612345678", Some("NL")), "+31612345678");
        assert_eq!(normalize("06 12 34 56 78", Some("nl")), "+31612345678");
        assert_eq!(normalize("+32 470 12 34 56", Some("NL")), "+32470123456");
    }

    #[cfg(feature = "phonenumber")]
    #[test]
    fn test_unparsable_number_is_kept() {
        assert_eq!(normalize("", Some("NL")), "");
    }

    #[cfg(not(feature = "phonenumber"))]
    #[test]
    fn test_region_ignored_without_formatting_support() {
        assert_eq!(normalize("0612345678", Some("NL")), "0612345678");
    }
}
