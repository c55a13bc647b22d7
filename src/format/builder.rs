use std::sync::Arc;

use crate::{
    currency::CurrencyRegistry,
    format::{amount::AmountStyle, unit::FormatUnit, MoneyFormatter},
    locale::{BuiltinLocales, Locale, LocaleService},
};

/// Assembles an immutable [`MoneyFormatter`] out of format elements
///
/// Elements are appended in the order they should print and parse. The
/// builder keeps parallel printer and parser slots so that one-sided elements
/// (print-only or parse-only) can be expressed; symmetric elements occupy
/// both sides of their slot.
#[derive(Debug, Default)]
pub struct MoneyFormatterBuilder {
    printers: Vec<Option<FormatUnit>>,
    parsers: Vec<Option<FormatUnit>>,
}

impl MoneyFormatterBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends fixed text
    ///
    /// Adjacent literals are coalesced into a single element. Appending an
    /// empty literal is a no-op.
    #[must_use]
    pub fn append_literal(mut self, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        if literal.is_empty() {
            return self;
        }
        let coalesced = match (self.printers.last_mut(), self.parsers.last_mut()) {
            (
                Some(Some(FormatUnit::Literal(print_side))),
                Some(Some(FormatUnit::Literal(parse_side))),
            ) if print_side == parse_side => {
                print_side.push_str(&literal);
                parse_side.push_str(&literal);
                true
            }
            _ => false,
        };
        if !coalesced {
            self.append_unit(FormatUnit::Literal(literal));
        }
        self
    }

    /// Appends the three letter currency code
    #[must_use]
    pub fn append_currency_code(mut self) -> Self {
        self.append_unit(FormatUnit::CurrencyCode);
        self
    }

    /// Appends the locale-dependent currency symbol
    #[must_use]
    pub fn append_currency_symbol(mut self) -> Self {
        self.append_unit(FormatUnit::CurrencySymbol);
        self
    }

    /// Appends the decimal amount
    #[must_use]
    pub fn append_amount(mut self, style: AmountStyle) -> Self {
        self.append_unit(FormatUnit::Amount(style));
        self
    }

    /// Appends a group whose parse success is optional
    ///
    /// Printing always prints the inner elements. Parsing attempts them
    /// against a sandbox: on failure the group contributes nothing and the
    /// surrounding chain continues from where the group started.
    #[must_use]
    pub fn append_optional(mut self, inner: MoneyFormatterBuilder) -> Self {
        self.append_unit(FormatUnit::Optional(Box::new(inner.into_unit())));
        self
    }

    /// Appends a slot whose print and parse sides are different elements
    ///
    /// A typical use is printing the currency symbol while accepting the
    /// currency code on input.
    #[must_use]
    pub fn append_printer_parser(
        mut self,
        printer: MoneyFormatterBuilder,
        parser: MoneyFormatterBuilder,
    ) -> Self {
        self.printers.push(Some(printer.into_unit()));
        self.parsers.push(Some(parser.into_unit()));
        self
    }

    /// Appends elements that only take part in printing
    #[must_use]
    pub fn append_print_only(mut self, inner: MoneyFormatterBuilder) -> Self {
        self.printers.push(Some(inner.into_unit()));
        self.parsers.push(None);
        self
    }

    /// Appends elements that only take part in parsing
    #[must_use]
    pub fn append_parse_only(mut self, inner: MoneyFormatterBuilder) -> Self {
        self.printers.push(None);
        self.parsers.push(Some(inner.into_unit()));
        self
    }

    /// Appends the whole chain of an already built formatter
    #[must_use]
    pub fn append_formatter(mut self, formatter: &MoneyFormatter) -> Self {
        self.append_unit(formatter.unit().clone());
        self
    }

    fn append_unit(&mut self, unit: FormatUnit) {
        self.printers.push(Some(unit.clone()));
        self.parsers.push(Some(unit));
    }

    fn into_unit(self) -> FormatUnit {
        if self.printers == self.parsers {
            // every slot is symmetric, collapse to a plain chain
            FormatUnit::Composite(self.printers.into_iter().flatten().collect())
        } else {
            FormatUnit::Multi {
                printers: self.printers,
                parsers: self.parsers,
            }
        }
    }

    /// Builds the formatter using the bundled currency registry and locale
    /// data
    #[must_use]
    pub fn to_formatter(self, locale: Locale) -> MoneyFormatter {
        self.to_formatter_with(
            locale,
            Arc::new(CurrencyRegistry::default()),
            Arc::new(BuiltinLocales),
        )
    }

    /// Builds the formatter with explicit collaborators
    ///
    /// The registry and locale service are shared by reference counting, so
    /// the same tables can back any number of formatters.
    #[must_use]
    pub fn to_formatter_with(
        self,
        locale: Locale,
        registry: Arc<CurrencyRegistry>,
        locales: Arc<dyn LocaleService>,
    ) -> MoneyFormatter {
        MoneyFormatter::new(self.into_unit(), locale, registry, locales)
    }
}
