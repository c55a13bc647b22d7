#![allow(missing_docs)]

use money_format::{AmountStyle, Locale, MoneyFormatterBuilder};

#[test]
fn symmetric_chain_renders_once() {
    let formatter = MoneyFormatterBuilder::new()
        .append_currency_code()
        .append_literal(" ")
        .append_amount(AmountStyle::default())
        .to_formatter(Locale::new("en"));
    assert_eq!(formatter.to_string(), "${code}' '${amount}");
}

#[test]
fn adjacent_literals_coalesce() {
    let formatter = MoneyFormatterBuilder::new()
        .append_literal("a")
        .append_literal("b")
        .append_literal("")
        .append_literal("c")
        .to_formatter(Locale::new("en"));
    assert_eq!(formatter.to_string(), "'abc'");
}

#[test]
fn optional_groups_render_in_brackets() {
    let formatter = MoneyFormatterBuilder::new()
        .append_literal("(")
        .append_optional(MoneyFormatterBuilder::new().append_amount(AmountStyle::default()))
        .append_literal(")")
        .to_formatter(Locale::new("en"));
    assert_eq!(formatter.to_string(), "'('[${amount}]')'");
}

#[test]
fn one_sided_slots_render_both_sides() {
    let formatter = MoneyFormatterBuilder::new()
        .append_print_only(MoneyFormatterBuilder::new().append_currency_symbol())
        .append_parse_only(MoneyFormatterBuilder::new().append_currency_code())
        .to_formatter(Locale::new("en"));
    assert!(!formatter.is_printer());
    assert!(!formatter.is_parser());
    assert_eq!(formatter.to_string(), "${symbol}:${code}");
}

#[test]
fn asymmetric_pair_renders_both_sides() {
    let formatter = MoneyFormatterBuilder::new()
        .append_printer_parser(
            MoneyFormatterBuilder::new().append_currency_symbol(),
            MoneyFormatterBuilder::new().append_currency_code(),
        )
        .append_amount(AmountStyle::default())
        .to_formatter(Locale::new("en"));
    assert_eq!(
        formatter.to_string(),
        "${symbol}${amount}:${code}${amount}"
    );
}

#[test]
fn changing_the_locale_keeps_the_format() {
    let formatter = MoneyFormatterBuilder::new()
        .append_currency_code()
        .to_formatter(Locale::new("en"));
    let relocated = formatter.with_locale(Locale::new("de"));
    assert_eq!(relocated.locale(), &Locale::new("de"));
    assert_eq!(relocated.to_string(), formatter.to_string());
}

#[test]
fn empty_formatter_renders_nothing() {
    let formatter = MoneyFormatterBuilder::new().to_formatter(Locale::new("en"));
    assert_eq!(formatter.to_string(), "");
}
