use quiz_core::model::{Category, Level, ReferenceEntry};

/// Read-only browsing over the interview Q&A collection.
///
/// Category and level filtering lives here, outside the session state
/// machine; the entries themselves are never mutated.
#[derive(Debug, Clone)]
pub struct ReferenceService {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceService {
    #[must_use]
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Categories in first-appearance order, without duplicates.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&ReferenceEntry> {
        self.filter(Some(category), None)
    }

    #[must_use]
    pub fn by_level(&self, level: Level) -> Vec<&ReferenceEntry> {
        self.filter(None, Some(level))
    }

    /// Entries matching every provided filter, in collection order.
    #[must_use]
    pub fn filter(&self, category: Option<Category>, level: Option<Level>) -> Vec<&ReferenceEntry> {
        self.entries
            .iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .filter(|e| level.is_none_or(|l| e.level == l))
            .collect()
    }
}
