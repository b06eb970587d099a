//! Rendering of the free-text comment attached to each change batch.
//!
//! Templates are plain text with `{fqdn}` and `{timestamp}` placeholders.
//! `{{` and `}}` produce literal braces.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{0}}}` in comment template")]
    UnknownPlaceholder(String),

    #[error("unclosed `{{` at byte {0} in comment template")]
    Unclosed(usize),

    #[error("unmatched `}}` at byte {0} in comment template")]
    Unmatched(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Fqdn,
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    segments: Vec<Segment>,
}

impl CommentTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed(pos));
                    }

                    let segment = match name.trim() {
                        "fqdn" => Segment::Fqdn,
                        "timestamp" => Segment::Timestamp,
                        other => {
                            return Err(TemplateError::UnknownPlaceholder(other.to_string()))
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(TemplateError::Unmatched(pos)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn render(&self, fqdn: &str, now: DateTime<Utc>) -> String {
        let timestamp = format_timestamp(now);
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Fqdn => fqdn,
                Segment::Timestamp => timestamp.as_str(),
            })
            .collect()
    }
}

/// RFC 2822 date, e.g. `Fri, 16 Oct 2026 09:15:00 +0000`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc2822()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 15, 0).unwrap()
    }

    #[test]
    fn test_render_default_template() {
        let template =
            CommentTemplate::parse("Updating Route53 record for {fqdn} at {timestamp}").unwrap();
        let comment = template.render("home.example.com.", fixed_time());
        assert_eq!(
            comment,
            "Updating Route53 record for home.example.com. at Fri, 16 Oct 2026 09:15:00 +0000"
        );
    }

    #[test]
    fn test_escaped_braces() {
        let template = CommentTemplate::parse("{{{fqdn}}}").unwrap();
        assert_eq!(template.render("a.example.com", fixed_time()), "{a.example.com}");
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = CommentTemplate::parse("set {zone}").unwrap_err();
        assert_eq!(err, TemplateError::UnknownPlaceholder("zone".to_string()));
    }

    #[test]
    fn test_unknown_placeholder_reports_trimmed_name() {
        let err = CommentTemplate::parse("set { zone }").unwrap_err();
        assert_eq!(err, TemplateError::UnknownPlaceholder("zone".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown placeholder `{zone}` in comment template"
        );
    }

    #[test]
    fn test_padded_placeholder_is_accepted() {
        let template = CommentTemplate::parse("{ fqdn }").unwrap();
        assert_eq!(template.render("a.example.com", fixed_time()), "a.example.com");
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(
            CommentTemplate::parse("at {timestamp").unwrap_err(),
            TemplateError::Unclosed(3)
        );
        assert_eq!(
            CommentTemplate::parse("oops }").unwrap_err(),
            TemplateError::Unmatched(5)
        );
    }
}
