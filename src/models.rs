use crate::config::MISSING_ID;

/// One page of the dump, reduced to what the import files need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    pub title: String,
    /// Page-level id; never a revision or contributor id
    pub id: Option<String>,
    /// Distinct link targets in the order they first appear in the page text
    pub links: Vec<String>,
}

impl PageRecord {
    /// Link targets that become edges: everything except links back to the page itself.
    pub fn edge_targets(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .map(String::as_str)
            .filter(move |target| *target != self.title)
    }

    pub fn id_or_sentinel(&self) -> &str {
        self.id.as_deref().unwrap_or(MISSING_ID)
    }
}
