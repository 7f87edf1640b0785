use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Counter placeholder: {num} or {num:0<width>d}
// Examples: "file_{num}", "document_{num:02d}", "photo_{num}_backup"
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{num(?::([^{}]*))?\}").unwrap());

// The only format specifier accepted inside the placeholder: zero-padded width
static SPECIFIER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0(\d+)d$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern cannot be empty")]
    Empty,

    #[error("Pattern must contain the {{num}} placeholder")]
    MissingPlaceholder,

    #[error("Pattern must contain exactly one {{num}} placeholder")]
    MultiplePlaceholders,

    #[error("Invalid format specifier '{0}' (expected {{num}} or {{num:0Nd}})")]
    BadSpecifier(String),

    #[error("Unexpected '{{' or '}}' outside the {{num}} placeholder")]
    StrayBrace,
}

/// A compiled naming template.
///
/// Rendering is total once compilation succeeds: every malformed template is
/// rejected up front, before any filesystem mutation. The file extension is
/// never part of the pattern; the planner appends it separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    prefix: String,
    suffix: String,
    width: usize,
}

impl Pattern {
    pub fn compile(template: &str) -> Result<Pattern, PatternError> {
        if template.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut matches = PLACEHOLDER_REGEX.captures_iter(template);

        let captures = match matches.next() {
            Some(c) => c,
            None => return Err(PatternError::MissingPlaceholder),
        };

        if matches.next().is_some() {
            return Err(PatternError::MultiplePlaceholders);
        }

        let placeholder = match captures.get(0) {
            Some(m) => m,
            None => return Err(PatternError::MissingPlaceholder),
        };

        let width = match captures.get(1) {
            None => 0,
            Some(spec) => parse_width(spec.as_str())
                .ok_or_else(|| PatternError::BadSpecifier(spec.as_str().to_string()))?,
        };

        let prefix = &template[..placeholder.start()];
        let suffix = &template[placeholder.end()..];

        // Braces only mean something inside the placeholder
        if prefix.contains(&['{', '}'][..]) || suffix.contains(&['{', '}'][..]) {
            return Err(PatternError::StrayBrace);
        }

        Ok(Pattern {
            source: template.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            width,
        })
    }

    /// Render the base name for a counter value, without extension.
    pub fn render(&self, counter: usize) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            counter,
            self.suffix,
            width = self.width
        )
    }

    /// The template string this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

fn parse_width(spec: &str) -> Option<usize> {
    let captures = SPECIFIER_REGEX.captures(spec)?;
    captures.get(1)?.as_str().parse().ok()
}
