use crate::locale::Locale;

/// Error returned when parsing monetary text fails
///
/// Positional variants carry the 0-based byte index into the input text at
/// which the failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum ParseError {
    /// The text did not match the format at the given index
    #[error("unable to parse the text at index {index}")]
    Unrecognized {
        /// Byte index of the first unrecognized character
        index: usize,
    },
    /// The format matched but some input text was left unconsumed
    #[error("unparsed text remains starting at index {index}")]
    TrailingText {
        /// Byte index of the first unconsumed character
        index: usize,
    },
    /// Parsing completed without determining a currency
    #[error("no currency was found in the parsed text")]
    MissingCurrency,
    /// Parsing completed without determining an amount
    #[error("no amount was found in the parsed text")]
    MissingAmount,
    /// The formatter contains a print-only element and cannot parse
    #[error("the formatter is not configured for parsing")]
    Unsupported,
}

/// Error returned when printing a monetary value fails
///
/// Printing succeeds for every well-formed value; these errors signal a
/// misconfigured formatter or missing locale data, not a property of the
/// value itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum PrintError {
    /// The locale service has no symbol for the value's currency
    #[error("no currency symbol is available for {code} in locale {locale}")]
    SymbolUnavailable {
        /// The currency code the symbol was requested for
        code: String,
        /// The locale the symbol was requested in
        locale: Locale,
    },
    /// The locale service has no numeric formatting data for the locale
    #[error("no numeric formatting data is available for locale {locale}")]
    LocaleUnavailable {
        /// The locale the data was requested for
        locale: Locale,
    },
    /// The formatter contains a parse-only element and cannot print
    #[error("the formatter is not configured for printing")]
    Unsupported,
}
