/// Counters collected while converting a dump
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionStats {
    pub pages_processed: u64,
    pub links_found: u64,
    pub edges_written: u64,
    pub missing_ids: u64,
    pub missing_titles: u64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_pages(&mut self) {
        self.pages_processed += 1;
    }

    pub fn add_edges(&mut self, count: u64) {
        self.edges_written += count;
    }

    pub fn inc_missing_ids(&mut self) {
        self.missing_ids += 1;
    }

    pub fn inc_missing_titles(&mut self) {
        self.missing_titles += 1;
    }

    pub fn pages(&self) -> u64 {
        self.pages_processed
    }

    /// Distinct links per page body, summed; includes self links.
    pub fn links(&self) -> u64 {
        self.links_found
    }

    pub fn edges(&self) -> u64 {
        self.edges_written
    }

    pub fn missing_ids(&self) -> u64 {
        self.missing_ids
    }

    pub fn missing_titles(&self) -> u64 {
        self.missing_titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_zero() {
        let stats = ExtractionStats::new();
        assert_eq!(stats.pages(), 0);
        assert_eq!(stats.links(), 0);
        assert_eq!(stats.edges(), 0);
        assert_eq!(stats.missing_ids(), 0);
        assert_eq!(stats.missing_titles(), 0);
    }

    #[test]
    fn mixed_operations() {
        let mut stats = ExtractionStats::new();
        stats.inc_pages();
        stats.add_edges(10);
        stats.inc_pages();
        stats.add_edges(5);
        stats.inc_missing_ids();
        stats.inc_missing_titles();
        stats.inc_missing_titles();

        assert_eq!(stats.pages(), 2);
        assert_eq!(stats.edges(), 15);
        assert_eq!(stats.missing_ids(), 1);
        assert_eq!(stats.missing_titles(), 2);
    }
}
