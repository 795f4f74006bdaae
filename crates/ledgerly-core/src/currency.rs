//! Currency to display-locale lookup.

/// Locale used for any currency without a dedicated mapping.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Currencies with a dedicated display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Polish złoty.
    Pln,
    /// Argentine peso.
    Ars,
}

impl Currency {
    /// Parses an ISO 4217 code, ignoring ASCII case. Returns `None` for codes
    /// without a dedicated locale.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "PLN" => Some(Self::Pln),
            "ARS" => Some(Self::Ars),
            _ => None,
        }
    }

    /// The BCP 47 locale used to format amounts in this currency.
    #[must_use]
    pub fn locale(self) -> &'static str {
        match self {
            Self::Usd => "en-US",
            Self::Eur => "de-DE",
            Self::Pln => "pl-PL",
            Self::Ars => "es-AR",
        }
    }
}

/// Returns the display locale for `code`, falling back to
/// [`DEFAULT_LOCALE`] for unrecognized codes. Never fails.
#[must_use]
pub fn currency_locale(code: &str) -> &'static str {
    Currency::from_code(code).map_or(DEFAULT_LOCALE, Currency::locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_locale_is_case_insensitive() {
        assert_eq!(currency_locale("usd"), "en-US");
        assert_eq!(currency_locale("USD"), "en-US");
        assert_eq!(currency_locale("uSd"), currency_locale("USD"));
        assert_eq!(currency_locale("eur"), "de-DE");
    }

    #[test]
    fn test_currency_locale_maps_known_codes() {
        assert_eq!(currency_locale("EUR"), "de-DE");
        assert_eq!(currency_locale("PLN"), "pl-PL");
        assert_eq!(currency_locale("ARS"), "es-AR");
    }

    #[test]
    fn test_currency_locale_falls_back_for_unknown_codes() {
        assert_eq!(currency_locale("XYZ"), DEFAULT_LOCALE);
        assert_eq!(currency_locale(""), DEFAULT_LOCALE);
        assert_eq!(currency_locale(" usd"), DEFAULT_LOCALE);
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(Currency::from_code("pln"), Some(Currency::Pln));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
