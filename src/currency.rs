use std::collections::BTreeMap;
use std::fmt;

/// Error returned when constructing an invalid [`CurrencyUnit`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// The code is not made of exactly three ASCII letters
    #[error("currency code must be three ASCII letters, got {0:?}")]
    InvalidCode(String),
    /// The decimal-place count is outside the supported range
    #[error("decimal places must be at most 9, got {0}")]
    InvalidDecimalPlaces(u32),
}

/// A unit of currency
///
/// Holds the three letter code, the ISO-4217 numeric code and the number of
/// decimal places conventionally used for amounts in that currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyUnit {
    code: [u8; 3],
    numeric_code: u16,
    decimal_places: u32,
}

impl CurrencyUnit {
    /// Creates a currency unit from its code, numeric code and decimal places
    ///
    /// The code must be exactly three ASCII letters and is normalized to
    /// upper-case. At most 9 decimal places are supported.
    ///
    /// # Errors
    ///
    /// Returns a [`CurrencyError`] if the code or decimal places are invalid.
    pub fn new(code: &str, numeric_code: u16, decimal_places: u32) -> Result<Self, CurrencyError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(code.to_owned()));
        }
        if decimal_places > 9 {
            return Err(CurrencyError::InvalidDecimalPlaces(decimal_places));
        }
        let mut normalized = [0u8; 3];
        for (dst, src) in normalized.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self::from_parts(normalized, numeric_code, decimal_places))
    }

    const fn from_parts(code: [u8; 3], numeric_code: u16, decimal_places: u32) -> Self {
        Self {
            code,
            numeric_code,
            decimal_places,
        }
    }

    /// The three letter currency code (e.g. `"USD"`)
    #[must_use]
    pub fn code(&self) -> &str {
        std::str::from_utf8(&self.code).expect("currency code is validated ASCII")
    }

    /// The ISO-4217 numeric code (e.g. `840` for USD)
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// The number of decimal places conventionally used for this currency
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An immutable table of known currencies
///
/// A registry is built once and then shared by the formatters that resolve
/// currency codes against it. There is deliberately no process wide registry:
/// code that needs a different currency set builds its own value with
/// [`CurrencyRegistry::new`].
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    units: BTreeMap<[u8; 3], CurrencyUnit>,
}

/// Currencies bundled with [`CurrencyRegistry::default`]
///
/// Covers the currencies that account for the vast majority of global FX
/// turnover, plus a few three-decimal currencies.
const BUNDLED: &[(&[u8; 3], u16, u32)] = &[
    (b"USD", 840, 2),
    (b"EUR", 978, 2),
    (b"JPY", 392, 0),
    (b"GBP", 826, 2),
    (b"CNY", 156, 2),
    (b"AUD", 36, 2),
    (b"CAD", 124, 2),
    (b"CHF", 756, 2),
    (b"HKD", 344, 2),
    (b"SGD", 702, 2),
    (b"SEK", 752, 2),
    (b"KRW", 410, 0),
    (b"NOK", 578, 2),
    (b"NZD", 554, 2),
    (b"INR", 356, 2),
    (b"MXN", 484, 2),
    (b"TWD", 901, 2),
    (b"ZAR", 710, 2),
    (b"BRL", 986, 2),
    (b"DKK", 208, 2),
    (b"PLN", 985, 2),
    (b"THB", 764, 2),
    (b"ILS", 376, 2),
    (b"IDR", 360, 2),
    (b"CZK", 203, 2),
    (b"BHD", 48, 3),
    (b"KWD", 414, 3),
    (b"TND", 788, 3),
];

impl CurrencyRegistry {
    /// Creates a registry holding exactly the given currencies
    pub fn new<I>(units: I) -> Self
    where
        I: IntoIterator<Item = CurrencyUnit>,
    {
        Self {
            units: units.into_iter().map(|unit| (unit.code, unit)).collect(),
        }
    }

    /// Resolves a three letter code to a currency unit
    ///
    /// The lookup is case-insensitive. Returns `None` for unknown codes.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<CurrencyUnit> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 {
            return None;
        }
        let mut key = [0u8; 3];
        for (dst, src) in key.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        self.units.get(&key).copied()
    }

    /// The decimal-place count of a currency, or `None` if the code is unknown
    #[must_use]
    pub fn decimal_places(&self, code: &str) -> Option<u32> {
        self.resolve(code).map(|unit| unit.decimal_places())
    }

    /// Iterates over all currencies in the registry, in code order
    pub fn units(&self) -> impl Iterator<Item = &CurrencyUnit> {
        self.units.values()
    }

    /// Number of currencies in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the registry holds no currency at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new(
            BUNDLED
                .iter()
                .map(|&(code, numeric_code, decimal_places)| {
                    CurrencyUnit::from_parts(*code, numeric_code, decimal_places)
                }),
        )
    }
}
