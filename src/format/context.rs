use rust_decimal::Decimal;

use crate::{
    currency::{CurrencyRegistry, CurrencyUnit},
    error::ParseError,
    locale::{Locale, LocaleService},
    money::Money,
};

/// Mutable state threaded through one parse operation
///
/// A fresh context is created for every call to
/// [`MoneyFormatter::parse`](crate::MoneyFormatter::parse) and never shared:
/// all concurrency safety of the formatter comes from contexts being owned by
/// a single in-flight call.
///
/// Indexes are 0-based byte offsets into the parsed text.
#[derive(Clone)]
pub struct ParseContext<'a> {
    locale: Locale,
    text: &'a str,
    registry: &'a CurrencyRegistry,
    locales: &'a dyn LocaleService,
    index: usize,
    error_index: Option<usize>,
    currency: Option<CurrencyUnit>,
    amount: Option<Decimal>,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(
        locale: Locale,
        text: &'a str,
        registry: &'a CurrencyRegistry,
        locales: &'a dyn LocaleService,
    ) -> Self {
        Self {
            locale,
            text,
            registry,
            locales,
            index: 0,
            error_index: None,
            currency: None,
            amount: None,
        }
    }

    /// The locale being parsed with
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The text being parsed
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The current parse position
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The position of the first failure, or `None` if no error occurred
    #[must_use]
    pub fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    /// Whether a parse error has occurred
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_index.is_some()
    }

    /// Whether both a currency and an amount have been determined
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.currency.is_some() && self.amount.is_some()
    }

    /// Whether the whole text has been consumed
    #[must_use]
    pub fn is_fully_parsed(&self) -> bool {
        self.index == self.text.len()
    }

    /// The currency determined so far, if any
    #[must_use]
    pub fn currency(&self) -> Option<CurrencyUnit> {
        self.currency
    }

    /// The amount determined so far, if any
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    /// A bounds-checked view of the text between two byte positions
    ///
    /// Returns `None` if the range is out of bounds, inverted, or does not
    /// fall on character boundaries.
    #[must_use]
    pub fn text_substring(&self, start: usize, end: usize) -> Option<&'a str> {
        self.text.get(start..end)
    }

    /// Converts the accumulated state into a monetary value
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingCurrency`] or [`ParseError::MissingAmount`]
    /// if the corresponding field was never determined.
    pub fn to_money(&self) -> Result<Money, ParseError> {
        let currency = self.currency.ok_or(ParseError::MissingCurrency)?;
        let amount = self.amount.ok_or(ParseError::MissingAmount)?;
        Ok(Money::new(currency, amount))
    }

    /// The unparsed tail of the text
    pub(crate) fn remaining(&self) -> &'a str {
        self.text.get(self.index..).unwrap_or("")
    }

    pub(crate) fn registry(&self) -> &'a CurrencyRegistry {
        self.registry
    }

    pub(crate) fn locales(&self) -> &'a dyn LocaleService {
        self.locales
    }

    pub(crate) fn advance(&mut self, bytes: usize) {
        self.index += bytes;
    }

    /// Records an error at the current position
    pub(crate) fn set_error(&mut self) {
        self.error_index = Some(self.index);
    }

    /// Records an error at an explicit position, used when a mismatch is
    /// detected at a sub-position of a longer scan
    pub(crate) fn set_error_index(&mut self, index: usize) {
        self.error_index = Some(index);
    }

    pub(crate) fn set_currency(&mut self, currency: CurrencyUnit) {
        self.currency = Some(currency);
    }

    pub(crate) fn set_amount(&mut self, amount: Decimal) {
        self.amount = Some(amount);
    }

    /// Creates a sandbox copy for a tentative parse attempt
    ///
    /// The text and lookup services are shared; position, error and
    /// accumulated value are copied by value so the attempt cannot touch the
    /// parent.
    pub(crate) fn create_child(&self) -> Self {
        self.clone()
    }

    /// Merges a child context back, overwriting every mutable field
    ///
    /// Callers must only merge after a successful attempt.
    pub(crate) fn merge_child(&mut self, child: Self) {
        self.locale = child.locale;
        self.index = child.index;
        self.error_index = child.error_index;
        self.currency = child.currency;
        self.amount = child.amount;
    }
}

impl std::fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseContext")
            .field("locale", &self.locale)
            .field("text", &self.text)
            .field("index", &self.index)
            .field("error_index", &self.error_index)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

/// Immutable lookup state available while printing
pub(crate) struct PrintContext<'a> {
    pub(crate) locale: &'a Locale,
    pub(crate) locales: &'a dyn LocaleService,
}
