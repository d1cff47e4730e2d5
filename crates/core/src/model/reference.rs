use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── CATEGORY / LEVEL ──────────────────────────────────────────────────────────
//

/// Content area of a reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    QualitySystems,
    QualityTools,
    SixSigma,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::QualitySystems => "Quality systems",
            Category::QualityTools => "Quality tools",
            Category::SixSigma => "Six Sigma",
        }
    }

    /// Parses a CLI-friendly name such as `systems`, `tools` or `six-sigma`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "systems" | "quality-systems" => Some(Category::QualitySystems),
            "tools" | "quality-tools" => Some(Category::QualityTools),
            "six-sigma" | "sixsigma" => Some(Category::SixSigma),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough difficulty of an interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "basic" => Some(Level::Basic),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── REFERENCE ENTRY ───────────────────────────────────────────────────────────
//

/// One interview Q&A entry from the study reference collection.
///
/// These entries live outside the quiz state machine: they are browsed and
/// filtered, never answered or scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub category: Category,
    pub level: Level,
    pub question: String,
    pub answer: String,
}

impl ReferenceEntry {
    #[must_use]
    pub fn new(
        category: Category,
        level: Level,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            category,
            level,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_accepts_cli_names() {
        assert_eq!(Category::parse("tools"), Some(Category::QualityTools));
        assert_eq!(Category::parse("Six-Sigma"), Some(Category::SixSigma));
        assert_eq!(Category::parse("systems"), Some(Category::QualitySystems));
        assert_eq!(Category::parse("metrology"), None);
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(Level::parse("BASIC"), Some(Level::Basic));
        assert_eq!(Level::parse("advanced"), Some(Level::Advanced));
        assert_eq!(Level::parse("expert"), None);
    }
}
