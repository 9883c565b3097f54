use crate::config::{EDGE_HEADER, NODE_HEADER};
use crate::models::PageRecord;
use anyhow::{anyhow, Context, Result};
use csv::Writer;
use std::io::Write;

/// Node import file: `title:ID,id`, one row per page.
pub struct NodeWriter<W: Write> {
    inner: Writer<W>,
    rows: u64,
}

impl<W: Write> NodeWriter<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut inner = Writer::from_writer(out);
        inner
            .write_record(NODE_HEADER)
            .context("Failed to write node CSV header")?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write_page(&mut self, page: &PageRecord) -> Result<()> {
        self.inner
            .write_record([page.title.as_str(), page.id_or_sentinel()])
            .with_context(|| format!("Failed to write node row for {:?}", page.title))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes buffered rows and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        into_inner(self.inner)
    }
}

/// Relationship import file: `:START_ID,:END_ID`, one row per link.
pub struct EdgeWriter<W: Write> {
    inner: Writer<W>,
    rows: u64,
}

impl<W: Write> EdgeWriter<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut inner = Writer::from_writer(out);
        inner
            .write_record(EDGE_HEADER)
            .context("Failed to write edge CSV header")?;
        Ok(Self { inner, rows: 0 })
    }

    /// Writes one row per link of `page` except links back to itself.
    /// Returns the number of rows written.
    pub fn write_edges(&mut self, page: &PageRecord) -> Result<u64> {
        let mut written = 0;
        for target in page.edge_targets() {
            self.inner
                .write_record([page.title.as_str(), target])
                .with_context(|| format!("Failed to write edge {:?} -> {:?}", page.title, target))?;
            written += 1;
        }
        self.rows += written;
        Ok(written)
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn finish(self) -> Result<W> {
        into_inner(self.inner)
    }
}

fn into_inner<W: Write>(mut writer: Writer<W>) -> Result<W> {
    writer.flush().context("Failed to flush CSV output")?;
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))
}
