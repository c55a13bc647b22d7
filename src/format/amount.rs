use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::PrintError,
    format::context::{ParseContext, PrintContext},
    money::Money,
};

/// Configuration of how the amount element renders and scans digits
///
/// By default grouping is enabled, separators and group size come from the
/// locale service, and the fraction digit count comes from the currency's
/// decimal places. Every aspect can be overridden explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountStyle {
    pub(crate) grouping: bool,
    pub(crate) force_decimal_point: bool,
    pub(crate) fraction_digits: Option<(u32, u32)>,
    pub(crate) decimal_separator: Option<char>,
    pub(crate) grouping_separator: Option<char>,
    pub(crate) grouping_size: Option<usize>,
}

impl Default for AmountStyle {
    fn default() -> Self {
        Self {
            grouping: true,
            force_decimal_point: false,
            fraction_digits: None,
            decimal_separator: None,
            grouping_separator: None,
            grouping_size: None,
        }
    }
}

impl AmountStyle {
    /// Same as [`AmountStyle::default`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables grouping of integer digits
    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Forces a trailing decimal separator even when the fraction is empty
    #[must_use]
    pub fn with_forced_decimal_point(mut self, forced: bool) -> Self {
        self.force_decimal_point = forced;
        self
    }

    /// Sets an explicit minimum and maximum number of fraction digits
    ///
    /// Without this the currency's decimal-place count is used for both.
    /// `max` is raised to `min` if lower.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.fraction_digits = Some((min, max.max(min)));
        self
    }

    /// Overrides the locale's decimal separator
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = Some(separator);
        self
    }

    /// Overrides the locale's grouping separator
    #[must_use]
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        self
    }

    /// Overrides the locale's grouping size
    #[must_use]
    pub fn with_grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = Some(size.max(1));
        self
    }
}

pub(crate) fn print(
    style: &AmountStyle,
    ctx: &PrintContext<'_>,
    out: &mut String,
    money: &Money,
) -> Result<(), PrintError> {
    let locale_unavailable = || PrintError::LocaleUnavailable {
        locale: ctx.locale.clone(),
    };
    let decimal_separator = match style.decimal_separator {
        Some(separator) => separator,
        None => ctx
            .locales
            .decimal_separator(ctx.locale)
            .ok_or_else(locale_unavailable)?,
    };
    let grouping = if style.grouping {
        let separator = match style.grouping_separator {
            Some(separator) => separator,
            None => ctx
                .locales
                .grouping_separator(ctx.locale)
                .ok_or_else(locale_unavailable)?,
        };
        let size = match style.grouping_size {
            Some(size) => size,
            None => ctx
                .locales
                .grouping_size(ctx.locale)
                .ok_or_else(locale_unavailable)?,
        };
        Some((separator, size.max(1)))
    } else {
        None
    };

    let (min_digits, max_digits) = style.fraction_digits.unwrap_or_else(|| {
        let places = money.currency().decimal_places();
        (places, places)
    });
    let mut value = money
        .amount()
        .round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero);
    if value.scale() < min_digits {
        value.rescale(min_digits);
    }

    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    let rendered = value.abs().to_string();
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let width = integer.len();
    for (position, digit) in integer.chars().enumerate() {
        if let Some((separator, size)) = grouping {
            if position > 0 && (width - position) % size == 0 {
                out.push(separator);
            }
        }
        out.push(digit);
    }
    if fraction.is_empty() {
        if style.force_decimal_point {
            out.push(decimal_separator);
        }
    } else {
        out.push(decimal_separator);
        out.push_str(fraction);
    }
    Ok(())
}

pub(crate) fn parse(style: &AmountStyle, ctx: &mut ParseContext<'_>) {
    let Some(decimal_separator) = style
        .decimal_separator
        .or_else(|| ctx.locales().decimal_separator(ctx.locale()))
    else {
        // locale data unavailable, nothing can match
        ctx.set_error();
        return;
    };
    let grouping_separator = if style.grouping {
        let separator = style
            .grouping_separator
            .or_else(|| ctx.locales().grouping_separator(ctx.locale()));
        let Some(separator) = separator else {
            ctx.set_error();
            return;
        };
        Some(separator)
    } else {
        None
    };

    let start = ctx.index();
    let mut iter = ctx.remaining().char_indices().peekable();
    let mut negative = false;
    if let Some(&(_, sign)) = iter.peek() {
        if sign == '+' || sign == '-' {
            negative = sign == '-';
            iter.next();
        }
    }
    let mut mantissa: i128 = 0;
    let mut digits = 0u32;
    let mut scale = 0u32;
    let mut seen_point = false;
    let mut consumed = 0usize;
    while let Some(&(position, ch)) = iter.peek() {
        if let Some(digit) = ch.to_digit(10) {
            let Some(next) = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit)))
            else {
                ctx.set_error_index(start);
                return;
            };
            mantissa = next;
            digits += 1;
            if seen_point {
                scale += 1;
            }
            iter.next();
            consumed = position + ch.len_utf8();
        } else if grouping_separator == Some(ch) && digits > 0 && !seen_point {
            // a grouping separator only belongs to the number when digits
            // follow it
            let mut lookahead = iter.clone();
            lookahead.next();
            if lookahead.peek().is_some_and(|&(_, c)| c.is_ascii_digit()) {
                iter.next();
                consumed = position + ch.len_utf8();
            } else {
                break;
            }
        } else if ch == decimal_separator && digits > 0 && !seen_point {
            seen_point = true;
            iter.next();
            consumed = position + ch.len_utf8();
        } else {
            break;
        }
    }

    if digits == 0 {
        ctx.set_error();
        return;
    }
    if negative {
        mantissa = -mantissa;
    }
    match Decimal::try_from_i128_with_scale(mantissa, scale) {
        Ok(amount) => {
            ctx.set_amount(amount);
            ctx.advance(consumed);
        }
        Err(_) => ctx.set_error_index(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_digits_max_raised_to_min() {
        let style = AmountStyle::new().with_fraction_digits(4, 2);
        assert_eq!(style.fraction_digits, Some((4, 4)));
    }

    #[test]
    fn grouping_size_never_zero() {
        let style = AmountStyle::new().with_grouping_size(0);
        assert_eq!(style.grouping_size, Some(1));
    }
}
