//! The fixed PII pattern catalog.
//!
//! Every detection rule is a row in [`RULE_SPECS`]: a category, a regex, the
//! capture group that holds the reported value, a fixed confidence and a
//! description. Rules are compiled once on first use and never change at
//! runtime. Confidence never depends on the matched content.
//!
//! Word boundaries are ASCII-only (`(?-u:\b)`), so a value glued to a
//! non-ASCII letter such as `é` is still found.
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::pii::catalog;
//! use portfolio_pii::PiiCategory;
//!
//! let email_rules: Vec<_> = catalog::rules_for(PiiCategory::Email).collect();
//! assert_eq!(email_rules.len(), 1);
//! assert_eq!(email_rules[0].find_spans("mail a@b.com").len(), 1);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ssn;
use crate::types::{PiiCategory, Span};

/// Street suffixes recognised after a numbered street name.
macro_rules! street_suffix {
    () => {
        r"(?:Street|St|Avenue|Ave|Boulevard|Blvd|Road|Rd|Drive|Dr|Lane|Ln|Way|Court|Ct|Circle|Cir|Place|Pl|Terrace|Ter|Highway|Hwy|Parkway|Pkwy)"
    };
}

/// House number followed by one to four capitalised words.
macro_rules! street_name {
    () => {
        r"[0-9]{1,6}\s+(?:[A-Z][A-Za-z0-9'.-]*\s+){1,4}"
    };
}

/// `City, ST 12345` or `City, ST 12345-6789`.
macro_rules! city_state_zip {
    () => {
        r"[A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*, ?[A-Z]{2} +[0-9]{5}(?:-[0-9]{4})?"
    };
}

/// Numeric or month-name calendar dates with a four-digit year.
macro_rules! any_date {
    () => {
        r"(?:(?:0?[1-9]|1[0-2])/(?:0?[1-9]|[12][0-9]|3[01])/(?:19|20)[0-9]{2}|(?:0?[1-9]|1[0-2])-(?:0?[1-9]|[12][0-9]|3[01])-(?:19|20)[0-9]{2}|(?:19|20)[0-9]{2}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])|(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.? +(?:0?[1-9]|[12][0-9]|3[01]),? +(?:19|20)[0-9]{2})"
    };
}

/// Static description of a rule before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Stable rule identifier.
    pub name: &'static str,
    /// Category reported for matches.
    pub category: PiiCategory,
    /// Regex source.
    pub pattern: &'static str,
    /// Capture group holding the reported value; `0` is the whole match.
    pub group: usize,
    /// Fixed confidence (0.0 - 1.0].
    pub confidence: f32,
    /// Description of what the rule detects.
    pub description: &'static str,
    /// Extra check a candidate must pass.
    pub validate: Option<fn(&str) -> bool>,
}

/// The catalog, in evaluation order.
pub const RULE_SPECS: &[RuleSpec] = &[
    // ======= Phone =======
    RuleSpec {
        name: "phone_parenthesized",
        category: PiiCategory::Phone,
        pattern: r"\([0-9]{3}\) ?[0-9]{3}-[0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "US phone number, (XXX) XXX-XXXX",
        validate: None,
    },
    RuleSpec {
        name: "phone_dashed",
        category: PiiCategory::Phone,
        pattern: r"(?-u:\b)[0-9]{3}-[0-9]{3}-[0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.90,
        description: "US phone number, XXX-XXX-XXXX",
        validate: None,
    },
    RuleSpec {
        name: "phone_dotted",
        category: PiiCategory::Phone,
        pattern: r"(?-u:\b)[0-9]{3}\.[0-9]{3}\.[0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.90,
        description: "US phone number, XXX.XXX.XXXX",
        validate: None,
    },
    RuleSpec {
        name: "phone_international",
        category: PiiCategory::Phone,
        pattern: r"\+1[0-9]{10}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "US phone number in +1XXXXXXXXXX form",
        validate: None,
    },
    RuleSpec {
        name: "phone_long_distance",
        category: PiiCategory::Phone,
        pattern: r"(?-u:\b)1-[0-9]{3}-[0-9]{3}-[0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "US phone number with trunk prefix, 1-XXX-XXX-XXXX",
        validate: None,
    },
    // ======= Address =======
    RuleSpec {
        name: "address_full",
        category: PiiCategory::Address,
        pattern: concat!(
            r"(?-u:\b)",
            street_name!(),
            street_suffix!(),
            r"(?-u:\b)\.?,?\s+",
            city_state_zip!(),
            r"(?-u:\b)"
        ),
        group: 0,
        confidence: 0.95,
        description: "Full postal address: number, street, city, state and ZIP",
        validate: None,
    },
    RuleSpec {
        name: "address_street",
        category: PiiCategory::Address,
        pattern: concat!(r"(?-u:\b)", street_name!(), street_suffix!(), r"(?-u:\b)\.?"),
        group: 0,
        confidence: 0.85,
        description: "Numbered street with a street suffix",
        validate: None,
    },
    RuleSpec {
        name: "address_city_state_zip",
        category: PiiCategory::Address,
        pattern: concat!(r"(?-u:\b)", city_state_zip!(), r"(?-u:\b)"),
        group: 0,
        confidence: 0.90,
        description: "City, two-letter state and ZIP or ZIP+4",
        validate: None,
    },
    RuleSpec {
        name: "address_po_box",
        category: PiiCategory::Address,
        pattern: r"(?i)(?-u:\b)P\.? ?O\.? *Box +[0-9]+(?-u:\b)",
        group: 0,
        confidence: 0.90,
        description: "Post office box",
        validate: None,
    },
    // ======= SSN =======
    RuleSpec {
        name: "ssn_dashed",
        category: PiiCategory::Ssn,
        pattern: r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "Social Security Number, XXX-XX-XXXX",
        validate: None,
    },
    RuleSpec {
        name: "ssn_bare",
        category: PiiCategory::Ssn,
        pattern: r"(?-u:\b)[0-9]{9}(?-u:\b)",
        group: 0,
        confidence: 0.70,
        description: "Nine bare digits in a valid SSA range",
        validate: Some(ssn::is_valid_bare),
    },
    // ======= Email =======
    RuleSpec {
        name: "email",
        category: PiiCategory::Email,
        pattern: r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "Email address",
        validate: None,
    },
    // ======= Date of birth =======
    RuleSpec {
        name: "dob_labeled",
        category: PiiCategory::Dob,
        pattern: concat!(
            r"(?i)(?-u:\b)(?:DOB|D\.O\.B\.?|date +of +birth|birth *date|born(?: +on)?)(?-u:\b)\.? *[:\-]? *(",
            any_date!(),
            r")(?-u:\b)"
        ),
        group: 1,
        confidence: 0.95,
        description: "Date preceded by a DOB, Date of Birth or Born label",
        validate: None,
    },
    RuleSpec {
        name: "dob_numeric",
        category: PiiCategory::Dob,
        pattern: r"(?-u:\b)(?:(?:0?[1-9]|1[0-2])/(?:0?[1-9]|[12][0-9]|3[01])/(?:19|20)[0-9]{2}|(?:0?[1-9]|1[0-2])-(?:0?[1-9]|[12][0-9]|3[01])-(?:19|20)[0-9]{2})(?-u:\b)",
        group: 0,
        confidence: 0.75,
        description: "Date in MM/DD/YYYY or MM-DD-YYYY form",
        validate: None,
    },
    RuleSpec {
        name: "dob_iso",
        category: PiiCategory::Dob,
        pattern: r"(?-u:\b)(?:19|20)[0-9]{2}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])(?-u:\b)",
        group: 0,
        confidence: 0.70,
        description: "ISO date, YYYY-MM-DD",
        validate: None,
    },
    RuleSpec {
        name: "dob_month_name",
        category: PiiCategory::Dob,
        pattern: r"(?i)(?-u:\b)(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.? +(?:0?[1-9]|[12][0-9]|3[01]),? +(?:19|20)[0-9]{2}(?-u:\b)",
        group: 0,
        confidence: 0.80,
        description: "Date written as Month DD, YYYY",
        validate: None,
    },
    // ======= Financial =======
    RuleSpec {
        name: "card_major_network",
        category: PiiCategory::Financial,
        pattern: r"(?-u:\b)(?:4[0-9]{3}|5[1-5][0-9]{2}|3[47][0-9]{2}|6(?:011|5[0-9]{2}))(?:[- ]?[0-9]{4}){3}(?-u:\b)",
        group: 0,
        confidence: 0.95,
        description: "16-digit card with a Visa, Mastercard, Amex or Discover prefix",
        validate: None,
    },
    RuleSpec {
        name: "card_grouped",
        category: PiiCategory::Financial,
        pattern: r"(?-u:\b)[0-9]{4}[- ][0-9]{4}[- ][0-9]{4}[- ][0-9]{4}(?-u:\b)",
        group: 0,
        confidence: 0.85,
        description: "Any 4-4-4-4 digit grouping",
        validate: None,
    },
    RuleSpec {
        name: "account_number",
        category: PiiCategory::Financial,
        pattern: r"(?i)(?-u:\b)(?:account|acct)\.? *(?:#|no\.?|num(?:ber)?) *:? *([0-9]{8,17})(?-u:\b)",
        group: 1,
        confidence: 0.90,
        description: "Bank account number labeled as account #",
        validate: None,
    },
    RuleSpec {
        name: "routing_number",
        category: PiiCategory::Financial,
        pattern: r"(?i)(?-u:\b)(?:routing|ABA)(?: *(?:#|no\.?|num(?:ber)?|transit))? *:? *([0-9]{9})(?-u:\b)",
        group: 1,
        confidence: 0.90,
        description: "Nine-digit routing number labeled as routing or ABA",
        validate: None,
    },
];

/// A compiled detection rule.
pub struct PatternRule {
    spec: &'static RuleSpec,
    regex: Regex,
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.spec.name)
            .field("category", &self.spec.category)
            .field("confidence", &self.spec.confidence)
            .finish()
    }
}

impl PatternRule {
    fn compile(spec: &'static RuleSpec) -> Self {
        let regex = Regex::new(spec.pattern).unwrap_or_else(|e| {
            panic!("catalog pattern `{}` is a valid regex: {e}", spec.name)
        });
        Self { spec, regex }
    }

    /// Stable rule identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Category reported for matches.
    #[must_use]
    pub const fn category(&self) -> PiiCategory {
        self.spec.category
    }

    /// Fixed confidence of this rule.
    #[must_use]
    pub const fn confidence(&self) -> f32 {
        self.spec.confidence
    }

    /// What the rule detects.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.spec.description
    }

    /// Every non-overlapping occurrence of this rule in `content`.
    ///
    /// Offsets are byte offsets on `char` boundaries, so
    /// `&content[span.start..span.end]` is always the matched value.
    #[must_use]
    pub fn find_spans(&self, content: &str) -> Vec<Span> {
        let candidates: Vec<Span> = if self.spec.group == 0 {
            self.regex
                .find_iter(content)
                .map(|m| Span::new(m.start(), m.end()))
                .collect()
        } else {
            self.regex
                .captures_iter(content)
                .filter_map(|caps| caps.get(self.spec.group))
                .map(|m| Span::new(m.start(), m.end()))
                .collect()
        };

        match self.spec.validate {
            Some(validate) => candidates
                .into_iter()
                .filter(|span| validate(&content[span.start..span.end]))
                .collect(),
            None => candidates,
        }
    }
}

static RULES: LazyLock<Vec<PatternRule>> =
    LazyLock::new(|| RULE_SPECS.iter().map(PatternRule::compile).collect());

/// The compiled catalog, in evaluation order.
#[must_use]
pub fn rules() -> &'static [PatternRule] {
    &RULES
}

/// Compiled rules of a single category.
pub fn rules_for(category: PiiCategory) -> impl Iterator<Item = &'static PatternRule> {
    rules().iter().filter(move |rule| rule.category() == category)
}

/// Look up a rule by name.
#[must_use]
pub fn rule(name: &str) -> Option<&'static PatternRule> {
    rules().iter().find(|rule| rule.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(name: &str, content: &str) -> Vec<String> {
        rule(name)
            .unwrap()
            .find_spans(content)
            .into_iter()
            .map(|span| content[span.start..span.end].to_string())
            .collect()
    }

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(rules().len(), RULE_SPECS.len());
    }

    #[test]
    fn every_category_is_covered() {
        for category in PiiCategory::ALL {
            assert!(rules_for(category).next().is_some(), "{category} has no rules");
        }
    }

    #[test]
    fn confidences_are_in_range() {
        for rule in rules() {
            assert!(rule.confidence() > 0.0 && rule.confidence() <= 1.0);
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = rules().iter().map(PatternRule::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULE_SPECS.len());
    }

    #[test]
    fn category_confidence_contracts() {
        for rule in rules_for(PiiCategory::Phone) {
            assert!((0.90..=0.95).contains(&rule.confidence()));
        }
        for rule in rules_for(PiiCategory::Address) {
            assert!((0.85..=0.95).contains(&rule.confidence()));
        }
        for rule in rules_for(PiiCategory::Dob) {
            assert!((0.70..=0.95).contains(&rule.confidence()));
        }
        for rule in rules_for(PiiCategory::Financial) {
            assert!((0.85..=0.95).contains(&rule.confidence()));
        }
        assert!((rule("ssn_dashed").unwrap().confidence() - 0.95).abs() < f32::EPSILON);
        assert!((rule("ssn_bare").unwrap().confidence() - 0.70).abs() < f32::EPSILON);
        assert!((rule("email").unwrap().confidence() - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn phone_shapes() {
        assert_eq!(hits("phone_parenthesized", "call (555) 123-4567"), ["(555) 123-4567"]);
        assert_eq!(hits("phone_dashed", "call 555-123-4567 now"), ["555-123-4567"]);
        assert_eq!(hits("phone_dotted", "call 555.123.4567"), ["555.123.4567"]);
        assert_eq!(hits("phone_international", "call +15551234567"), ["+15551234567"]);
        assert_eq!(hits("phone_long_distance", "call 1-800-555-0199"), ["1-800-555-0199"]);
    }

    #[test]
    fn ssn_shapes() {
        assert_eq!(hits("ssn_dashed", "SSN: 123-45-6789"), ["123-45-6789"]);
        assert_eq!(hits("ssn_bare", "id 123456789"), ["123456789"]);
        assert!(hits("ssn_bare", "id 000456789").is_empty());
        assert!(hits("ssn_bare", "id 666456789").is_empty());
        assert!(hits("ssn_bare", "id 912456789").is_empty());
        assert!(hits("ssn_bare", "id 1234567890").is_empty());
    }

    #[test]
    fn values_after_non_ascii_letters() {
        assert_eq!(hits("ssn_dashed", "é123-45-6789 ok"), ["123-45-6789"]);
        assert_eq!(hits("ssn_bare", "ñ123456789"), ["123456789"]);
        assert_eq!(hits("phone_dashed", "appelé555-123-4567"), ["555-123-4567"]);
        assert_eq!(hits("dob_iso", "né1990-01-15"), ["1990-01-15"]);
        assert!(hits("ssn_dashed", "a123-45-6789").is_empty());
    }

    #[test]
    fn email_shape() {
        assert_eq!(
            hits("email", "write to jane.doe+cv@mail.example.org today"),
            ["jane.doe+cv@mail.example.org"]
        );
    }

    #[test]
    fn address_shapes() {
        assert_eq!(hits("address_street", "at 742 Evergreen Terrace"), ["742 Evergreen Terrace"]);
        assert_eq!(hits("address_street", "at 12 Main St. today"), ["12 Main St."]);
        assert_eq!(
            hits("address_city_state_zip", "in Springfield, IL 62704-1234"),
            ["Springfield, IL 62704-1234"]
        );
        assert_eq!(
            hits("address_full", "at 100 Main St, Springfield, IL 62704 now"),
            ["100 Main St, Springfield, IL 62704"]
        );
        assert_eq!(hits("address_po_box", "mail to po box 42"), ["po box 42"]);
        assert_eq!(hits("address_po_box", "mail to P.O. Box 42"), ["P.O. Box 42"]);
    }

    #[test]
    fn dob_shapes() {
        assert_eq!(hits("dob_numeric", "on 01/15/1990"), ["01/15/1990"]);
        assert_eq!(hits("dob_numeric", "on 1-5-1990"), ["1-5-1990"]);
        assert_eq!(hits("dob_iso", "on 1990-01-15"), ["1990-01-15"]);
        assert_eq!(hits("dob_month_name", "on january 15, 1990"), ["january 15, 1990"]);
        assert_eq!(hits("dob_month_name", "on Sept. 3 1985"), ["Sept. 3 1985"]);
        assert_eq!(hits("dob_labeled", "DOB: 01/15/1990"), ["01/15/1990"]);
        assert_eq!(hits("dob_labeled", "Date of Birth - March 3, 1985"), ["March 3, 1985"]);
        assert_eq!(hits("dob_labeled", "born on 1985-03-03."), ["1985-03-03"]);
    }

    #[test]
    fn financial_shapes() {
        assert_eq!(hits("card_major_network", "card 4111111111111111"), ["4111111111111111"]);
        assert_eq!(
            hits("card_major_network", "card 5500 0000 0000 0004"),
            ["5500 0000 0000 0004"]
        );
        assert_eq!(hits("card_grouped", "ref 1234-5678-9012-3456"), ["1234-5678-9012-3456"]);
        assert_eq!(hits("account_number", "Account #: 12345678901"), ["12345678901"]);
        assert_eq!(hits("account_number", "acct number 87654321"), ["87654321"]);
        assert_eq!(hits("routing_number", "Routing: 021000021"), ["021000021"]);
        assert_eq!(hits("routing_number", "ABA # 021000021"), ["021000021"]);
    }

    #[test]
    fn spans_use_byte_offsets_with_unicode() {
        let content = "Größe → mail: juergen@example.com ✓";
        let spans = rule("email").unwrap().find_spans(content);
        assert_eq!(spans.len(), 1);
        let span = spans[0];
        assert!(content.is_char_boundary(span.start));
        assert!(content.is_char_boundary(span.end));
        assert_eq!(&content[span.start..span.end], "juergen@example.com");
    }
}
