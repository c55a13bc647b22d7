use std::fmt;

/// An opaque locale identifier
///
/// The engine never interprets the tag beyond extracting the primary language
/// subtag; all locale-dependent data comes from a [`LocaleService`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a BCP-47 style language tag (e.g. `"de-CH"`)
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The full tag this locale was created from
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`"de"` for `"de-CH"`)
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or("")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locale-dependent data consumed by the formatting engine
///
/// Each method may report the data as unavailable by returning `None`. The
/// amount and currency-symbol elements treat unavailable data as a hard
/// failure for that locale: printing reports an error and parsing cannot
/// match anything.
pub trait LocaleService: Send + Sync {
    /// The character separating the integer and fraction parts
    fn decimal_separator(&self, locale: &Locale) -> Option<char>;

    /// The character separating groups of integer digits
    fn grouping_separator(&self, locale: &Locale) -> Option<char>;

    /// The number of integer digits per group
    fn grouping_size(&self, locale: &Locale) -> Option<usize>;

    /// The symbol used for the given currency in the given locale
    fn currency_symbol(&self, locale: &Locale, currency_code: &str) -> Option<String>;
}

/// Locale data bundled with the crate
///
/// Covers a handful of common language tags, resolving an exact tag first and
/// falling back to the primary language. Hosts with richer locale data can
/// supply their own [`LocaleService`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

struct Numbers {
    decimal: char,
    grouping: char,
    size: usize,
}

fn numbers(locale: &Locale) -> Option<Numbers> {
    // Swiss-style apostrophe grouping wins over the plain language rules.
    if matches!(locale.as_str(), "de-CH" | "de-LI" | "fr-CH" | "it-CH") {
        return Some(Numbers {
            decimal: '.',
            grouping: '\'',
            size: 3,
        });
    }
    let (decimal, grouping) = match locale.language() {
        "en" | "ja" | "ko" | "th" | "zh" => ('.', ','),
        "de" | "es" | "it" | "nl" | "pt" | "id" => (',', '.'),
        "fr" | "pl" | "cs" | "sv" | "nb" | "fi" => (',', '\u{a0}'),
        _ => return None,
    };
    Some(Numbers {
        decimal,
        grouping,
        size: 3,
    })
}

fn symbol(currency_code: &str) -> Option<&'static str> {
    Some(match currency_code {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        // The yen sign is genuinely ambiguous between JPY and CNY; parsing it
        // through the symbol element reports an ambiguity error.
        "JPY" | "CNY" => "\u{a5}",
        "CHF" => "Fr",
        "CAD" => "C$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "SGD" => "S$",
        "BRL" => "R$",
        "INR" => "\u{20b9}",
        "KRW" => "\u{20a9}",
        "THB" => "\u{e3f}",
        "ILS" => "\u{20aa}",
        "PLN" => "z\u{142}",
        "CZK" => "K\u{10d}",
        "SEK" | "NOK" | "DKK" => "kr",
        _ => return None,
    })
}

impl LocaleService for BuiltinLocales {
    fn decimal_separator(&self, locale: &Locale) -> Option<char> {
        numbers(locale).map(|n| n.decimal)
    }

    fn grouping_separator(&self, locale: &Locale) -> Option<char> {
        numbers(locale).map(|n| n.grouping)
    }

    fn grouping_size(&self, locale: &Locale) -> Option<usize> {
        numbers(locale).map(|n| n.size)
    }

    fn currency_symbol(&self, locale: &Locale, currency_code: &str) -> Option<String> {
        // an unknown locale has no symbol data either
        numbers(locale)?;
        symbol(currency_code).map(str::to_owned)
    }
}
