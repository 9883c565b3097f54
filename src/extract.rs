use crate::config::PROGRESS_N;
use crate::output::{EdgeWriter, NodeWriter};
use crate::scanner::DumpScanner;
use crate::stats::ExtractionStats;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Report progress every N pages (0 disables reporting)
    pub progress_interval: u64,
    /// Stop after this many pages; `Some(0)` writes headers only
    pub limit: Option<u64>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            progress_interval: PROGRESS_N,
            limit: None,
        }
    }
}

/// Receives periodic (pages processed, links found) updates.
pub trait ProgressSink {
    fn report(&mut self, pages: u64, links: u64);
}

/// Reports progress through `tracing`.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, pages: u64, links: u64) {
        info!(pages, links, "Progress");
    }
}

/// Spinner for interactive runs; progress is also logged.
pub struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Scanning dump");
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SpinnerProgress {
    fn report(&mut self, pages: u64, links: u64) {
        self.pb
            .set_message(format!("Pages processed: {pages}, links found: {links}"));
        info!(pages, links, "Progress");
    }
}

/// Converts a dump into the node and relationship import files in a single pass.
///
/// Rows are written in the order pages close in the dump. Both writers are flushed
/// before returning; any read, parse or write error aborts the run.
pub fn run_extraction<R, N, E>(
    input: R,
    nodes_out: N,
    edges_out: E,
    config: &ExtractConfig,
    progress: &mut dyn ProgressSink,
) -> Result<ExtractionStats>
where
    R: BufRead,
    N: Write,
    E: Write,
{
    let mut scanner = DumpScanner::new(input);
    let mut nodes = NodeWriter::new(nodes_out)?;
    let mut edges = EdgeWriter::new(edges_out)?;
    let mut stats = ExtractionStats::new();

    loop {
        if config.limit.is_some_and(|limit| stats.pages() >= limit) {
            info!(limit = stats.pages(), "Page limit reached");
            break;
        }
        let Some(page) = scanner.next() else { break };
        let page = page?;

        if page.id.is_none() {
            debug!(title = page.title.as_str(), "Page has no page-level id");
            stats.inc_missing_ids();
        }
        if page.title.is_empty() {
            debug!(id = page.id_or_sentinel(), "Page has no title");
            stats.inc_missing_titles();
        }

        nodes.write_page(&page)?;
        stats.add_edges(edges.write_edges(&page)?);
        stats.inc_pages();

        let pages = stats.pages();
        if config.progress_interval > 0 && pages % config.progress_interval == 0 {
            progress.report(pages, scanner.links_found());
        }
    }

    stats.links_found = scanner.links_found();

    nodes.finish()?;
    edges.finish()?;

    info!(
        pages = stats.pages(),
        links = stats.links(),
        edges = stats.edges(),
        "Extraction finished"
    );

    Ok(stats)
}
