//! PII redaction.
//!
//! Redaction splices each detected span out of the original content and puts
//! a replacement in its place. Spans are processed from the highest start
//! offset down, so lower spans are still valid when their turn comes. Text
//! outside the spans is copied through untouched.

use serde::{Deserialize, Serialize};

use crate::types::DetectedItem;

/// Redaction style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionStyle {
    /// Replace with the category placeholder (e.g., `[SSN REDACTED]`).
    #[default]
    Placeholder,
    /// Replace every character with an asterisk.
    Asterisks,
    /// Partially mask (show first/last two characters).
    PartialMask,
}

/// A PII redactor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Redactor {
    /// Redaction style.
    style: RedactionStyle,
}

impl Redactor {
    /// Create a redactor using category placeholders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: RedactionStyle::Placeholder,
        }
    }

    /// Set the redaction style.
    #[must_use]
    pub const fn style(mut self, style: RedactionStyle) -> Self {
        self.style = style;
        self
    }

    /// The configured style.
    #[must_use]
    pub const fn redaction_style(&self) -> RedactionStyle {
        self.style
    }

    /// Redact `items` from `content`.
    ///
    /// Returns `content` unchanged when `items` is empty. An item with an
    /// empty span, whose span does not select its value in `content`, or that
    /// overlaps an item already applied, is skipped.
    #[must_use]
    pub fn redact(&self, content: &str, items: &[DetectedItem]) -> String {
        if items.is_empty() {
            return content.to_string();
        }

        let mut ordered: Vec<&DetectedItem> = items.iter().collect();
        ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

        let mut result = content.to_string();
        let mut floor = content.len();
        for item in ordered {
            let span = item.span;
            if span.is_empty()
                || span.end > floor
                || content.get(span.start..span.end) != Some(item.value.as_str())
            {
                tracing::warn!(
                    category = %item.category,
                    start = span.start,
                    end = span.end,
                    "skipping item that does not match the content"
                );
                continue;
            }
            result.replace_range(span.start..span.end, &self.replacement(item));
            floor = span.start;
        }
        result
    }

    /// Get the replacement string for an item.
    fn replacement(&self, item: &DetectedItem) -> String {
        match self.style {
            RedactionStyle::Placeholder => item.category.placeholder().to_string(),
            RedactionStyle::Asterisks => "*".repeat(item.value.chars().count()),
            RedactionStyle::PartialMask => partial_mask(&item.value),
        }
    }
}

/// Create a partial mask (show first 2 and last 2 characters).
fn partial_mask(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible = 2;
    let hidden = chars.len() - (visible * 2);

    format!(
        "{}{}{}",
        chars[..visible].iter().collect::<String>(),
        "*".repeat(hidden),
        chars[chars.len() - visible..].iter().collect::<String>()
    )
}

/// Redact with category placeholders.
#[must_use]
pub fn redact(content: &str, items: &[DetectedItem]) -> String {
    Redactor::new().redact(content, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PiiCategory, Span};

    fn found(content: &str, value: &str, category: PiiCategory) -> DetectedItem {
        let start = content.find(value).unwrap();
        DetectedItem::new(category, value, Span::new(start, start + value.len()), 0.95)
    }

    #[test]
    fn redact_ssn() {
        let content = "SSN: 123-45-6789";
        let items = [found(content, "123-45-6789", PiiCategory::Ssn)];
        assert_eq!(redact(content, &items), "SSN: [SSN REDACTED]");
    }

    #[test]
    fn empty_items_is_noop() {
        assert_eq!(redact("anything at all", &[]), "anything at all");
    }

    #[test]
    fn unsorted_items_are_applied_back_to_front() {
        let content = "a@b.com and (555) 123-4567 end";
        let items = [
            found(content, "a@b.com", PiiCategory::Email),
            found(content, "(555) 123-4567", PiiCategory::Phone),
        ];
        assert_eq!(
            redact(content, &items),
            "[EMAIL REDACTED] and [PHONE REDACTED] end"
        );
    }

    #[test]
    fn redact_asterisks() {
        let content = "SSN: 123-45-6789";
        let items = [found(content, "123-45-6789", PiiCategory::Ssn)];
        let result = Redactor::new()
            .style(RedactionStyle::Asterisks)
            .redact(content, &items);
        assert_eq!(result, "SSN: ***********");
    }

    #[test]
    fn partial_mask_keeps_edges() {
        let content = "Email: user@example.com";
        let items = [found(content, "user@example.com", PiiCategory::Email)];
        let result = Redactor::new()
            .style(RedactionStyle::PartialMask)
            .redact(content, &items);
        assert_eq!(result, "Email: us************om");
        assert_eq!(partial_mask("abcd"), "****");
    }

    #[test]
    fn mismatched_item_is_skipped() {
        let content = "short";
        let items = [DetectedItem::new(PiiCategory::Email, "x@y.zz", Span::new(2, 40), 0.95)];
        assert_eq!(redact(content, &items), "short");
    }

    #[test]
    fn zero_width_items_are_skipped() {
        let items = [
            DetectedItem::new(PiiCategory::Ssn, "", Span::new(3, 3), 0.95),
            DetectedItem::new(PiiCategory::Ssn, "", Span::new(3, 3), 0.95),
        ];
        assert_eq!(redact("abcdef", &items), "abcdef");
    }

    #[test]
    fn zero_width_item_does_not_block_neighbour() {
        let content = "SSN: 123-45-6789";
        let items = [
            found(content, "123-45-6789", PiiCategory::Ssn),
            DetectedItem::new(PiiCategory::Email, "", Span::new(16, 16), 0.95),
        ];
        assert_eq!(redact(content, &items), "SSN: [SSN REDACTED]");
    }

    #[test]
    fn unicode_neighbours_survive() {
        let content = "Grüße, call 555-123-4567 — danke";
        let items = [found(content, "555-123-4567", PiiCategory::Phone)];
        assert_eq!(redact(content, &items), "Grüße, call [PHONE REDACTED] — danke");
    }
}
