use std::fmt;

use crate::{
    currency::CurrencyUnit,
    error::PrintError,
    format::{
        amount::{self, AmountStyle},
        context::{ParseContext, PrintContext},
    },
    money::Money,
};

/// One element of a formatter chain
///
/// The element set is fixed and enumerable, so the print/parse polymorphism
/// is a closed enum rather than a trait hierarchy. Every variant is an
/// immutable value, safe to share across concurrent formatter invocations.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FormatUnit {
    /// Fixed text, matched case-sensitively when parsing
    Literal(String),
    /// The three letter currency code
    CurrencyCode,
    /// The locale-dependent currency symbol
    CurrencySymbol,
    /// The decimal amount
    Amount(AmountStyle),
    /// An inner chain whose parse success is optional
    Optional(Box<FormatUnit>),
    /// An ordered chain of elements
    Composite(Vec<FormatUnit>),
    /// Parallel print/parse slots, possibly one-sided
    Multi {
        printers: Vec<Option<FormatUnit>>,
        parsers: Vec<Option<FormatUnit>>,
    },
}

impl FormatUnit {
    pub(crate) fn is_printer(&self) -> bool {
        match self {
            FormatUnit::Literal(_)
            | FormatUnit::CurrencyCode
            | FormatUnit::CurrencySymbol
            | FormatUnit::Amount(_) => true,
            FormatUnit::Optional(inner) => inner.is_printer(),
            FormatUnit::Composite(units) => units.iter().all(FormatUnit::is_printer),
            FormatUnit::Multi { printers, .. } => printers
                .iter()
                .all(|slot| slot.as_ref().is_some_and(FormatUnit::is_printer)),
        }
    }

    pub(crate) fn is_parser(&self) -> bool {
        match self {
            FormatUnit::Literal(_)
            | FormatUnit::CurrencyCode
            | FormatUnit::CurrencySymbol
            | FormatUnit::Amount(_) => true,
            FormatUnit::Optional(inner) => inner.is_parser(),
            FormatUnit::Composite(units) => units.iter().all(FormatUnit::is_parser),
            FormatUnit::Multi { parsers, .. } => parsers
                .iter()
                .all(|slot| slot.as_ref().is_some_and(FormatUnit::is_parser)),
        }
    }

    pub(crate) fn print(
        &self,
        ctx: &PrintContext<'_>,
        out: &mut String,
        money: &Money,
    ) -> Result<(), PrintError> {
        match self {
            FormatUnit::Literal(text) => out.push_str(text),
            FormatUnit::CurrencyCode => out.push_str(money.currency().code()),
            FormatUnit::CurrencySymbol => {
                let currency = money.currency();
                let code = currency.code();
                let symbol = ctx.locales.currency_symbol(ctx.locale, code).ok_or_else(|| {
                    PrintError::SymbolUnavailable {
                        code: code.to_owned(),
                        locale: ctx.locale.clone(),
                    }
                })?;
                out.push_str(&symbol);
            }
            FormatUnit::Amount(style) => amount::print(style, ctx, out, money)?,
            FormatUnit::Optional(inner) => inner.print(ctx, out, money)?,
            FormatUnit::Composite(units) => {
                for unit in units {
                    unit.print(ctx, out, money)?;
                }
            }
            FormatUnit::Multi { printers, .. } => {
                for printer in printers.iter().flatten() {
                    printer.print(ctx, out, money)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn parse(&self, ctx: &mut ParseContext<'_>) {
        match self {
            FormatUnit::Literal(text) => {
                if ctx.remaining().starts_with(text.as_str()) {
                    ctx.advance(text.len());
                } else {
                    ctx.set_error();
                }
            }
            FormatUnit::CurrencyCode => parse_currency_code(ctx),
            FormatUnit::CurrencySymbol => parse_currency_symbol(ctx),
            FormatUnit::Amount(style) => amount::parse(style, ctx),
            FormatUnit::Optional(inner) => {
                let mut child = ctx.create_child();
                inner.parse(&mut child);
                // an absent optional leaves the parent bit-for-bit untouched,
                // and its inner error index never surfaces
                if !child.is_error() {
                    ctx.merge_child(child);
                }
            }
            FormatUnit::Composite(units) => {
                for unit in units {
                    unit.parse(ctx);
                    if ctx.is_error() {
                        break;
                    }
                }
            }
            FormatUnit::Multi { parsers, .. } => {
                for parser in parsers.iter().flatten() {
                    parser.parse(ctx);
                    if ctx.is_error() {
                        break;
                    }
                }
            }
        }
    }
}

fn parse_currency_code(ctx: &mut ParseContext<'_>) {
    let start = ctx.index();
    let Some(token) = ctx.text_substring(start, start + 3) else {
        ctx.set_error();
        return;
    };
    if !token.bytes().all(|b| b.is_ascii_alphabetic()) {
        ctx.set_error();
        return;
    }
    match ctx.registry().resolve(token) {
        Some(currency) => {
            ctx.set_currency(currency);
            ctx.advance(3);
        }
        None => ctx.set_error(),
    }
}

fn parse_currency_symbol(ctx: &mut ParseContext<'_>) {
    let rest = ctx.remaining();
    let mut best: Option<(usize, CurrencyUnit)> = None;
    let mut ambiguous = false;
    for unit in ctx.registry().units() {
        let Some(symbol) = ctx.locales().currency_symbol(ctx.locale(), unit.code()) else {
            continue;
        };
        if symbol.is_empty() || !rest.starts_with(symbol.as_str()) {
            continue;
        }
        match best {
            Some((length, found)) if length == symbol.len() && found != *unit => {
                ambiguous = true;
            }
            Some((length, _)) if length >= symbol.len() => {}
            _ => {
                best = Some((symbol.len(), *unit));
                ambiguous = false;
            }
        }
    }
    match best {
        Some((length, currency)) if !ambiguous => {
            ctx.set_currency(currency);
            ctx.advance(length);
        }
        _ => ctx.set_error(),
    }
}

impl fmt::Display for FormatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatUnit::Literal(text) => write!(f, "'{text}'"),
            FormatUnit::CurrencyCode => f.write_str("${code}"),
            FormatUnit::CurrencySymbol => f.write_str("${symbol}"),
            FormatUnit::Amount(_) => f.write_str("${amount}"),
            FormatUnit::Optional(inner) => write!(f, "[{inner}]"),
            FormatUnit::Composite(units) => {
                for unit in units {
                    write!(f, "{unit}")?;
                }
                Ok(())
            }
            FormatUnit::Multi { printers, parsers } => {
                let print_side: String =
                    printers.iter().flatten().map(ToString::to_string).collect();
                let parse_side: String =
                    parsers.iter().flatten().map(ToString::to_string).collect();
                if self.is_printer() && !self.is_parser() {
                    f.write_str(&print_side)
                } else if self.is_parser() && !self.is_printer() {
                    f.write_str(&parse_side)
                } else if print_side == parse_side {
                    f.write_str(&print_side)
                } else {
                    write!(f, "{print_side}:{parse_side}")
                }
            }
        }
    }
}
