//! `%(field)s` log line templates
//!
//! A template such as `%(asctime)s - %(levelname)s - %(message)s` is parsed
//! once into segments and then rendered for every record. Placeholders take
//! an optional `-` (left align) and a minimum width before the conversion
//! character, e.g. `%(levelname)-8s`. `%%` renders a literal percent sign.

use super::error::{LoggerError, Result};
use std::fmt;
use std::str::FromStr;

/// Default template used when no format is configured.
pub const DEFAULT_TEMPLATE: &str = "%(levelname)s:%(name)s:%(message)s";

/// A record attribute a placeholder can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AscTime,
    LevelName,
    LevelNo,
    Message,
    Name,
    Thread,
    ThreadName,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asctime" => Ok(Field::AscTime),
            "levelname" => Ok(Field::LevelName),
            "levelno" => Ok(Field::LevelNo),
            "message" => Ok(Field::Message),
            "name" => Ok(Field::Name),
            "thread" => Ok(Field::Thread),
            "threadName" => Ok(Field::ThreadName),
            _ => Err(format!("unknown placeholder '{}'", s)),
        }
    }
}

impl Field {
    /// Whether the `d` conversion applies to this field.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::LevelNo | Field::Thread)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        field: Field,
        width: usize,
        left_align: bool,
    },
}

/// A parsed log line template
///
/// # Examples
///
/// ```
/// use basic_logging::core::FormatTemplate;
///
/// let template: FormatTemplate = "%(levelname)s - %(message)s".parse().unwrap();
/// assert!(!template.uses_asctime());
/// assert!("%(bogus)s".parse::<FormatTemplate>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            match chars.next() {
                Some((_, '%')) => literal.push('%'),
                Some((_, '(')) => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, ')')) => break,
                            Some((_, ch)) => name.push(ch),
                            None => {
                                return Err(invalid(
                                    source,
                                    format!("unterminated placeholder at {}", pos),
                                ))
                            }
                        }
                    }
                    let field = name.parse::<Field>().map_err(|e| invalid(source, e))?;

                    let left_align = matches!(chars.peek(), Some((_, '-')));
                    if left_align {
                        chars.next();
                    }
                    let mut width = 0usize;
                    while let Some(digit) = chars.peek().and_then(|(_, ch)| ch.to_digit(10)) {
                        width = width.saturating_mul(10).saturating_add(digit as usize);
                        chars.next();
                    }

                    match chars.next() {
                        Some((_, 's')) => {}
                        Some((_, 'd')) if field.is_numeric() => {}
                        Some((_, other)) => {
                            return Err(invalid(
                                source,
                                format!("unsupported conversion '{}' for '{}'", other, name),
                            ))
                        }
                        None => {
                            return Err(invalid(
                                source,
                                format!("missing conversion for '{}'", name),
                            ))
                        }
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field {
                        field,
                        width,
                        left_align,
                    });
                }
                Some((_, other)) => {
                    return Err(invalid(
                        source,
                        format!("unexpected '%{}' at {}", other, pos),
                    ))
                }
                None => return Err(invalid(source, "trailing '%'")),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if !segments.iter().any(|s| matches!(s, Segment::Field { .. })) {
            return Err(invalid(source, "no placeholders"));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether rendering needs a formatted timestamp.
    pub fn uses_asctime(&self) -> bool {
        self.fields().any(|f| f == Field::AscTime)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { field, .. } => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Render the template, resolving each placeholder through `value`.
    pub fn render<F>(&self, mut value: F) -> String
    where
        F: FnMut(Field) -> String,
    {
        let mut out = String::with_capacity(self.source.len() + 64);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field {
                    field,
                    width,
                    left_align,
                } => {
                    let text = value(*field);
                    let pad = width.saturating_sub(text.chars().count());
                    if !*left_align {
                        out.extend(std::iter::repeat(' ').take(pad));
                    }
                    out.push_str(&text);
                    if *left_align {
                        out.extend(std::iter::repeat(' ').take(pad));
                    }
                }
            }
        }
        out
    }
}

fn invalid(source: &str, message: impl Into<String>) -> LoggerError {
    LoggerError::formatter(format!("template '{}'", source), message)
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Field {
                    field: Field::LevelName,
                    width: 0,
                    left_align: false,
                },
                Segment::Literal(":".to_string()),
                Segment::Field {
                    field: Field::Name,
                    width: 0,
                    left_align: false,
                },
                Segment::Literal(":".to_string()),
                Segment::Field {
                    field: Field::Message,
                    width: 0,
                    left_align: false,
                },
            ],
        }
    }
}

impl FromStr for FormatTemplate {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_fixed(template: &str) -> String {
        FormatTemplate::parse(template)
            .expect("valid template")
            .render(|field| match field {
                Field::AscTime => "2025-01-08 10:30:45,123".to_string(),
                Field::LevelName => "ERROR".to_string(),
                Field::LevelNo => "40".to_string(),
                Field::Message => "This is an error message".to_string(),
                Field::Name => "root".to_string(),
                Field::Thread => "140213".to_string(),
                Field::ThreadName => "main".to_string(),
            })
    }

    #[test]
    fn test_demo_template() {
        assert_eq!(
            render_fixed("%(asctime)s - %(levelname)s - %(message)s"),
            "2025-01-08 10:30:45,123 - ERROR - This is an error message"
        );
    }

    #[test]
    fn test_default_template_matches_parsed() {
        let parsed = FormatTemplate::parse(DEFAULT_TEMPLATE).expect("valid template");
        assert_eq!(parsed, FormatTemplate::default());
        assert_eq!(render_fixed(DEFAULT_TEMPLATE), "ERROR:root:This is an error message");
    }

    #[test]
    fn test_width_and_alignment() {
        assert_eq!(render_fixed("[%(levelname)-8s]"), "[ERROR   ]");
        assert_eq!(render_fixed("[%(levelname)8s]"), "[   ERROR]");
        assert_eq!(render_fixed("%(levelno)d"), "40");
        assert_eq!(render_fixed("%(thread)8d"), "  140213");
    }

    #[test]
    fn test_numeric_conversion_only_for_numeric_fields() {
        for bad in ["%(message)d", "%(levelname)-8d", "%(asctime)d"] {
            let err = FormatTemplate::parse(bad).expect_err(bad);
            assert!(err.to_string().contains("unsupported conversion 'd'"), "{}", err);
        }
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(render_fixed("100%% %(name)s"), "100% root");
    }

    #[test]
    fn test_rejects_malformed_templates() {
        for bad in [
            "%(nope)s",
            "%(message",
            "%(message)",
            "%(message)x",
            "50% done",
            "trailing %",
        ] {
            let err = FormatTemplate::parse(bad).expect_err(bad);
            assert!(matches!(err, LoggerError::FormatterError { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_uses_asctime() {
        let with = FormatTemplate::parse("%(asctime)s %(message)s").expect("valid template");
        assert!(with.uses_asctime());
        assert!(!FormatTemplate::default().uses_asctime());
    }

    #[test]
    fn test_template_without_placeholders_is_rejected() {
        for bad in ["static line", "", "100%% sure"] {
            let err = FormatTemplate::parse(bad).expect_err(bad);
            assert!(matches!(err, LoggerError::FormatterError { .. }), "{}", bad);
            assert!(err.to_string().contains("no placeholders"), "{}", err);
        }
    }
}
