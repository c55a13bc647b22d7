//! The formatting and parsing engine
//!
//! A [`MoneyFormatter`] is an immutable chain of format elements assembled by
//! a [`MoneyFormatterBuilder`]. Printing pushes a [`Money`] value through the
//! chain into a string; parsing pushes input text through the same chain with
//! a mutable [`ParseContext`] that records position, first failure and the
//! accumulated currency and amount.

mod amount;
mod builder;
mod context;
mod unit;

use std::fmt;
use std::sync::Arc;

pub use amount::AmountStyle;
pub use builder::MoneyFormatterBuilder;
pub use context::ParseContext;

use crate::{
    currency::CurrencyRegistry,
    error::{ParseError, PrintError},
    locale::{Locale, LocaleService},
    money::Money,
};

use context::PrintContext;
use unit::FormatUnit;

/// An immutable, reusable formatter for monetary values
///
/// Built once via [`MoneyFormatterBuilder`], then reused indefinitely. The
/// formatter holds no mutable state: every print or parse call allocates its
/// own output sink or [`ParseContext`], so one instance may be used from any
/// number of threads concurrently.
#[derive(Clone)]
pub struct MoneyFormatter {
    unit: FormatUnit,
    locale: Locale,
    registry: Arc<CurrencyRegistry>,
    locales: Arc<dyn LocaleService>,
}

impl MoneyFormatter {
    pub(crate) fn new(
        unit: FormatUnit,
        locale: Locale,
        registry: Arc<CurrencyRegistry>,
        locales: Arc<dyn LocaleService>,
    ) -> Self {
        Self {
            unit,
            locale,
            registry,
            locales,
        }
    }

    pub(crate) fn unit(&self) -> &FormatUnit {
        &self.unit
    }

    /// The locale this formatter prints and parses with by default
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns a copy of this formatter using a different locale
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Whether every element of the chain can print
    #[must_use]
    pub fn is_printer(&self) -> bool {
        self.unit.is_printer()
    }

    /// Whether every element of the chain can parse
    #[must_use]
    pub fn is_parser(&self) -> bool {
        self.unit.is_parser()
    }

    /// Prints a monetary value to a new string
    ///
    /// # Errors
    ///
    /// Returns a [`PrintError`] if the chain contains a parse-only element or
    /// the locale service lacks data needed by an element. Printing never
    /// fails because of the value itself.
    pub fn print(&self, money: &Money) -> Result<String, PrintError> {
        let mut out = String::new();
        self.print_to(&mut out, money)?;
        Ok(out)
    }

    /// Prints a monetary value by appending to an existing string
    ///
    /// # Errors
    ///
    /// Same conditions as [`MoneyFormatter::print`]. The output may hold a
    /// partial rendering after an error.
    pub fn print_to(&self, out: &mut String, money: &Money) -> Result<(), PrintError> {
        if !self.is_printer() {
            return Err(PrintError::Unsupported);
        }
        let ctx = PrintContext {
            locale: &self.locale,
            locales: self.locales.as_ref(),
        };
        self.unit.print(&ctx, out, money)
    }

    /// Parses text into a monetary value, requiring the whole input to match
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unrecognized`] with the failure index if the
    /// text does not match the format, [`ParseError::TrailingText`] if input
    /// remains after the chain, and a missing-currency/amount error if the
    /// chain matched but did not determine a complete value.
    pub fn parse(&self, text: &str) -> Result<Money, ParseError> {
        let ctx = self.parse_raw(text)?;
        if let Some(index) = ctx.error_index() {
            return Err(ParseError::Unrecognized { index });
        }
        if !ctx.is_fully_parsed() {
            return Err(ParseError::TrailingText { index: ctx.index() });
        }
        ctx.to_money()
    }

    /// Runs the chain and returns the raw parse context
    ///
    /// This is the lenient entry point: no completeness or trailing-input
    /// validation is applied, the caller inspects the context instead.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unsupported`] if the chain contains a print-only
    /// element.
    pub fn parse_raw<'a>(&'a self, text: &'a str) -> Result<ParseContext<'a>, ParseError> {
        if !self.is_parser() {
            return Err(ParseError::Unsupported);
        }
        let mut ctx = ParseContext::new(
            self.locale.clone(),
            text,
            self.registry.as_ref(),
            self.locales.as_ref(),
        );
        self.unit.parse(&mut ctx);
        Ok(ctx)
    }
}

impl fmt::Display for MoneyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.unit.fmt(f)
    }
}

impl fmt::Debug for MoneyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyFormatter")
            .field("format", &self.to_string())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
