use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::VifError;

/// Built-in day tokens, 0 = Monday. Declaration order is discovery order.
pub const DEFAULT_WEEKDAY_TOKENS: &[(&str, u8)] = &[
    ("monday", 0), ("mon", 0),
    ("tuesday", 1), ("tue", 1), ("tues", 1),
    ("wednesday", 2), ("wed", 2),
    ("thursday", 3), ("thu", 3), ("thurs", 3),
    ("friday", 4), ("fri", 4),
    ("saturday", 5), ("sat", 5),
    ("sunday", 6), ("sun", 6),
];

/// Built-in keyword -> glyph table, first match wins.
pub const DEFAULT_GLYPHS: &[(&str, &str)] = &[
    ("exercise", "💪"),
    ("workout", "🏋️"),
    ("yoga", "🧘"),
    ("meditation", "🧘‍♀️"),
    ("reading", "📚"),
    ("study", "📖"),
    ("summary", "📝"),
    ("review", "📋"),
    ("planning", "📅"),
    ("cleaning", "🧹"),
    ("cooking", "👨‍🍳"),
    ("shopping", "🛒"),
];

pub const DEFAULT_FALLBACK_GLYPH: &str = "📋";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekdayToken {
    pub token: String,
    pub ordinal: u8,
}

/// Day-name tokens and their Monday-based ordinals.
///
/// Tokens are stored lowercase so lookups against lowercased input are
/// case-insensitive by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayLexicon {
    tokens: Vec<WeekdayToken>,
}

impl WeekdayLexicon {
    pub fn new<I, S>(entries: I) -> Result<Self, VifError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for (token, ordinal) in entries {
            let token = token.as_ref().trim().to_lowercase();
            if token.is_empty() {
                return Err(VifError::EmptyToken);
            }
            if ordinal > 6 {
                return Err(VifError::InvalidOrdinal { token, ordinal });
            }
            tokens.push(WeekdayToken { token, ordinal });
        }
        Ok(Self { tokens })
    }

    /// Appends aliases after the existing tokens. An alias that is already
    /// known keeps its first ordinal for lookups.
    pub fn extend(mut self, extra: &[WeekdayToken]) -> Result<Self, VifError> {
        let added = Self::new(extra.iter().map(|t| (t.token.as_str(), t.ordinal)))?;
        for entry in added.tokens {
            match self.lookup(&entry.token) {
                Some(ordinal) if ordinal == entry.ordinal => continue,
                Some(ordinal) => {
                    warn!("Weekday alias '{}' already maps to {}, ignoring {}", entry.token, ordinal, entry.ordinal);
                    continue;
                }
                None => self.tokens.push(entry),
            }
        }
        Ok(self)
    }

    pub fn tokens(&self) -> &[WeekdayToken] {
        &self.tokens
    }

    pub fn lookup(&self, token: &str) -> Option<u8> {
        let token = token.to_lowercase();
        self.tokens.iter().find(|t| t.token == token).map(|t| t.ordinal)
    }
}

impl Default for WeekdayLexicon {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_WEEKDAY_TOKENS
                .iter()
                .map(|(token, ordinal)| WeekdayToken { token: token.to_string(), ordinal: *ordinal })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlyphRule {
    pub keyword: String,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphTable {
    rules: Vec<GlyphRule>,
    fallback: String,
}

impl GlyphTable {
    pub fn new(rules: Vec<GlyphRule>, fallback: impl Into<String>) -> Self {
        Self { rules, fallback: fallback.into() }
    }

    /// Returns a table whose `rules` are consulted before the existing ones.
    pub fn with_overrides(mut self, mut rules: Vec<GlyphRule>) -> Self {
        rules.append(&mut self.rules);
        self.rules = rules;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn rules(&self) -> &[GlyphRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    // Case-sensitive containment, declaration order.
    pub fn lookup(&self, text: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| text.contains(rule.keyword.as_str()))
            .map(|rule| rule.glyph.as_str())
            .unwrap_or(&self.fallback)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        let rules = DEFAULT_GLYPHS
            .iter()
            .map(|(keyword, glyph)| GlyphRule { keyword: keyword.to_string(), glyph: glyph.to_string() })
            .collect();
        Self::new(rules, DEFAULT_FALLBACK_GLYPH)
    }
}
