#![allow(missing_docs)]

use rstest::rstest;

use money_format::{BuiltinLocales, Locale, LocaleService};

#[rstest]
#[case("en", '.', ',')]
#[case("en-AU", '.', ',')]
#[case("en_GB", '.', ',')]
#[case("de", ',', '.')]
#[case("de-AT", ',', '.')]
#[case("de-CH", '.', '\'')]
#[case("fr", ',', '\u{a0}')]
#[case("ja", '.', ',')]
fn number_symbols_resolve_by_tag_then_language(
    #[case] tag: &str,
    #[case] expected_decimal: char,
    #[case] expected_grouping: char,
) {
    let locale = Locale::new(tag);
    assert_eq!(
        BuiltinLocales.decimal_separator(&locale),
        Some(expected_decimal)
    );
    assert_eq!(
        BuiltinLocales.grouping_separator(&locale),
        Some(expected_grouping)
    );
    assert_eq!(BuiltinLocales.grouping_size(&locale), Some(3));
}

#[test]
fn unknown_locale_has_no_data() {
    let locale = Locale::new("xx");
    assert_eq!(BuiltinLocales.decimal_separator(&locale), None);
    assert_eq!(BuiltinLocales.grouping_separator(&locale), None);
    assert_eq!(BuiltinLocales.grouping_size(&locale), None);
    assert_eq!(BuiltinLocales.currency_symbol(&locale, "USD"), None);
}

#[rstest]
#[case("en", "USD", Some("$"))]
#[case("de", "EUR", Some("\u{20ac}"))]
#[case("en", "GBP", Some("\u{a3}"))]
#[case("en", "CAD", Some("C$"))]
#[case("en", "TND", None)]
fn currency_symbols(#[case] tag: &str, #[case] code: &str, #[case] expected: Option<&str>) {
    let actual = BuiltinLocales.currency_symbol(&Locale::new(tag), code);
    assert_eq!(actual.as_deref(), expected);
}

#[rstest]
#[case("de-CH", "de")]
#[case("en_GB", "en")]
#[case("fr", "fr")]
#[case("", "")]
fn language_subtag(#[case] tag: &str, #[case] expected: &str) {
    assert_eq!(Locale::new(tag).language(), expected);
}
