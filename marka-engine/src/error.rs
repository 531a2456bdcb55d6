//! Error types for markup operations

use std::fmt;

/// Errors raised while turning raw configuration into styles or while
/// building an engine from them. Fatal: a caller seeing one of these must
/// refuse to activate the markup feature and report the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration could not be read or parsed
    Read(String),
    /// Configuration contains no style list
    NoStyles,
    /// A style entry lacks a required key
    MissingField(&'static str),
    /// A style's markup mixes more than one distinct character
    MixedMarkup(String),
    /// A style's markup character is in the reserved set
    ReservedCharacter { name: String, character: char },
    /// A style's markup did not compile into a pattern
    Pattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(msg) => write!(f, "Cannot read configuration: {msg}"),
            ConfigError::NoStyles => write!(f, "Configuration contains no 'styles'"),
            ConfigError::MissingField(field) => write!(
                f,
                "Styles require 'name', 'markup' and 'classnames'; missing '{field}'"
            ),
            ConfigError::MixedMarkup(markup) => write!(
                f,
                "A style's 'markup' can only repeat one character, got '{markup}'"
            ),
            ConfigError::ReservedCharacter { name, character } => write!(
                f,
                "Style '{name}' uses reserved 'markup' character '{character}'"
            ),
            ConfigError::Pattern(msg) => write!(f, "Style pattern failed to compile: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised when an operation is asked to transform text that is
/// unsafe to transform. Recoverable: the caller shows the message and
/// leaves the text untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMarkup {
    /// A delimited span contains a line-break sequence
    LineBreak,
    /// A delimited span contains an inline HTML construct
    InlineHtml,
    /// The pattern engine gave up scanning the text
    Scan(String),
}

impl fmt::Display for InvalidMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMarkup::LineBreak => {
                write!(f, "Marked text cannot contain line-breaks")
            }
            InvalidMarkup::InlineHtml => {
                write!(f, "Marked text cannot contain HTML")
            }
            InvalidMarkup::Scan(msg) => write!(f, "Text could not be scanned: {msg}"),
        }
    }
}

impl std::error::Error for InvalidMarkup {}
