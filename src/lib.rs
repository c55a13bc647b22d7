#![deny(future_incompatible, nonstandard_style, unsafe_code, private_interfaces, private_bounds)]
#![warn(rust_2018_idioms, clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! A formatting and parsing library for monetary values
//!
//! Build a reusable [`MoneyFormatter`] with [`MoneyFormatterBuilder`], then
//! use it to render [`Money`] as locale-aware text and to read such text back
//! into an exact decimal value.
//!
//! Amounts are held as [`rust_decimal::Decimal`] (re-exported as [`Decimal`]),
//! so no precision is lost at any point.
//!
//! ```
//! use money_format::{AmountStyle, Decimal, Locale, MoneyFormatterBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let formatter = MoneyFormatterBuilder::new()
//!     .append_currency_code()
//!     .append_literal(" ")
//!     .append_amount(AmountStyle::default())
//!     .to_formatter(Locale::new("en"));
//!
//! let money = formatter.parse("USD 1,234.50")?;
//! assert_eq!(money.currency().code(), "USD");
//! assert_eq!(money.amount(), Decimal::new(123_450, 2));
//!
//! assert_eq!(formatter.print(&money)?, "USD 1,234.50");
//! # Ok(()) }
//! ```
//!
//! Currencies are resolved against an explicitly constructed, immutable
//! [`CurrencyRegistry`], and locale-dependent symbols come from a
//! [`LocaleService`]; bundled implementations of both are used unless
//! [`MoneyFormatterBuilder::to_formatter_with`] is given custom ones.

mod currency;
mod error;
mod format;
mod locale;
mod money;

pub use crate::{
    currency::{CurrencyError, CurrencyRegistry, CurrencyUnit},
    error::{ParseError, PrintError},
    format::{AmountStyle, MoneyFormatter, MoneyFormatterBuilder, ParseContext},
    locale::{BuiltinLocales, Locale, LocaleService},
    money::Money,
};

pub use rust_decimal::Decimal;
