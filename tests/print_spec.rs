#![allow(missing_docs)]

use std::sync::Arc;

use rstest::rstest;

use money_format::{
    AmountStyle, BuiltinLocales, CurrencyRegistry, CurrencyUnit, Decimal, Locale, Money,
    MoneyFormatter, MoneyFormatterBuilder, PrintError,
};

#[rstest]
#[case("USD", Decimal::new(12_345, 1), "USD 1,234.50")]
#[case("USD", Decimal::ZERO, "USD 0.00")]
#[case("USD", Decimal::new(-12_345, 1), "USD -1,234.50")]
#[case("USD", Decimal::new(1_234_567, 0), "USD 1,234,567.00")]
#[case("JPY", Decimal::new(100, 0), "JPY 100")]
#[case("BHD", Decimal::new(1_234_567, 3), "BHD 1,234.567")]
fn should_print_with_currency_decimal_places(
    #[case] code: &str,
    #[case] amount: Decimal,
    #[case] expected: &str,
) {
    let formatter = code_amount_formatter("en");
    let actual = formatter.print(&money(code, amount)).expect("printing should succeed");
    assert_eq!(actual, expected);
}

#[rstest]
#[case("de", "EUR", Decimal::new(12_345, 1), "EUR 1.234,50")]
#[case("de-CH", "CHF", Decimal::new(123_456_789, 2), "CHF 1'234'567.89")]
#[case("fr", "EUR", Decimal::new(12_345, 1), "EUR 1\u{a0}234,50")]
fn should_print_with_locale_separators(
    #[case] locale: &str,
    #[case] code: &str,
    #[case] amount: Decimal,
    #[case] expected: &str,
) {
    let formatter = code_amount_formatter(locale);
    let actual = formatter.print(&money(code, amount)).expect("printing should succeed");
    assert_eq!(actual, expected);
}

#[rstest]
#[case(AmountStyle::new().with_fraction_digits(0, 0), "USD 1,235")]
#[case(AmountStyle::new().with_grouping(false), "USD 1234.50")]
#[case(AmountStyle::new().with_fraction_digits(1, 3), "USD 1,234.5")]
#[case(AmountStyle::new().with_fraction_digits(0, 0).with_forced_decimal_point(true), "USD 1,235.")]
#[case(AmountStyle::new().with_decimal_separator(';'), "USD 1,234;50")]
#[case(AmountStyle::new().with_grouping_separator('_'), "USD 1_234.50")]
fn should_apply_amount_style(#[case] style: AmountStyle, #[case] expected: &str) {
    let formatter = MoneyFormatterBuilder::new()
        .append_currency_code()
        .append_literal(" ")
        .append_amount(style)
        .to_formatter(Locale::new("en"));
    let actual = formatter
        .print(&money("USD", Decimal::new(12_345, 1)))
        .expect("printing should succeed");
    assert_eq!(actual, expected);
}

#[test]
fn should_group_with_custom_size() {
    let formatter = MoneyFormatterBuilder::new()
        .append_amount(AmountStyle::new().with_grouping_size(2).with_fraction_digits(0, 0))
        .to_formatter(Locale::new("en"));
    let actual = formatter
        .print(&money("USD", Decimal::new(1_234_567, 0)))
        .expect("printing should succeed");
    assert_eq!(actual, "1,23,45,67");
}

#[rstest]
#[case("en", "USD", "$1,234.50")]
#[case("de", "EUR", "\u{20ac}1.234,50")]
fn should_print_currency_symbol(#[case] locale: &str, #[case] code: &str, #[case] expected: &str) {
    let formatter = MoneyFormatterBuilder::new()
        .append_currency_symbol()
        .append_amount(AmountStyle::default())
        .to_formatter(Locale::new(locale));
    let actual = formatter
        .print(&money(code, Decimal::new(12_345, 1)))
        .expect("printing should succeed");
    assert_eq!(actual, expected);
}

#[test]
fn should_fail_when_symbol_unavailable() {
    let xts = CurrencyUnit::new("XTS", 963, 2).expect("valid currency");
    let formatter = MoneyFormatterBuilder::new()
        .append_currency_symbol()
        .append_amount(AmountStyle::default())
        .to_formatter_with(
            Locale::new("en"),
            Arc::new(CurrencyRegistry::new([xts])),
            Arc::new(BuiltinLocales),
        );
    let result = formatter.print(&Money::new(xts, Decimal::ONE));
    assert_eq!(
        result,
        Err(PrintError::SymbolUnavailable {
            code: "XTS".into(),
            locale: Locale::new("en"),
        })
    );
}

#[test]
fn should_fail_for_unknown_locale() {
    let formatter = code_amount_formatter("en").with_locale(Locale::new("xx"));
    let result = formatter.print(&money("USD", Decimal::ONE));
    assert_eq!(
        result,
        Err(PrintError::LocaleUnavailable {
            locale: Locale::new("xx"),
        })
    );
}

#[test]
fn should_refuse_to_print_a_parse_only_chain() {
    let formatter = MoneyFormatterBuilder::new()
        .append_parse_only(MoneyFormatterBuilder::new().append_currency_code())
        .to_formatter(Locale::new("en"));
    assert!(!formatter.is_printer());
    let result = formatter.print(&money("USD", Decimal::ONE));
    assert_eq!(result, Err(PrintError::Unsupported));
}

#[test]
fn should_append_to_an_existing_buffer() {
    let formatter = code_amount_formatter("en");
    let mut out = String::from("total: ");
    formatter
        .print_to(&mut out, &money("USD", Decimal::new(500, 2)))
        .expect("printing should succeed");
    assert_eq!(out, "total: USD 5.00");
}

#[rstest]
#[case("en", "USD", Decimal::new(123_456, 2))]
#[case("en", "JPY", Decimal::new(5_000_000, 0))]
#[case("de", "EUR", Decimal::new(-98_765, 2))]
#[case("de-CH", "CHF", Decimal::new(123_456_789, 2))]
#[case("en", "BHD", Decimal::new(1, 3))]
fn print_parse_roundtrip(#[case] locale: &str, #[case] code: &str, #[case] amount: Decimal) {
    let formatter = code_amount_formatter(locale);
    let original = money(code, amount);
    let text = formatter.print(&original).expect("printing should succeed");
    let reparsed = formatter.parse(&text).expect("round-trip parse should succeed");
    assert_eq!(reparsed, original);
}

fn code_amount_formatter(locale: &str) -> MoneyFormatter {
    MoneyFormatterBuilder::new()
        .append_currency_code()
        .append_literal(" ")
        .append_amount(AmountStyle::default())
        .to_formatter(Locale::new(locale))
}

fn money(code: &str, amount: Decimal) -> Money {
    let currency = CurrencyRegistry::default()
        .resolve(code)
        .expect("currency should be in the bundled registry");
    Money::new(currency, amount)
}
