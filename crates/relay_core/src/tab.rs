pub type TabId = u64;

/// Immutable snapshot of the clicked tab, taken at click time and used once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContext {
    pub id: TabId,
    pub url: Option<String>,
}

impl TabContext {
    pub fn new(id: TabId, url: Option<String>) -> Self {
        Self { id, url }
    }

    /// The tab URL, with an absent URL read as the empty string.
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}
