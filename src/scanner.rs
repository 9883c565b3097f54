use crate::links::extract_links;
use crate::models::PageRecord;
use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::BufRead;
use tracing::trace;

/// The elements the scanner reacts to, matched on their local (unprefixed) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Page,
    Revision,
    Title,
    Id,
    Text,
    Other,
}

impl Tag {
    fn from_local_name(name: &[u8]) -> Self {
        match name {
            b"page" => Tag::Page,
            b"revision" => Tag::Revision,
            b"title" => Tag::Title,
            b"id" => Tag::Id,
            b"text" => Tag::Text,
            _ => Tag::Other,
        }
    }

    fn captures_text(self) -> bool {
        matches!(self, Tag::Title | Tag::Id | Tag::Text)
    }
}

/// Scratch state for the page currently being read. Reset at every `<page>`.
#[derive(Debug, Default)]
pub(crate) struct PageState {
    title: String,
    id: Option<String>,
    in_revision: bool,
    links: Vec<String>,
}

impl PageState {
    /// Once set, stays set until the page closes: every later `<id>` belongs to
    /// a revision or its contributor.
    pub(crate) fn enter_revision(&mut self) {
        self.in_revision = true;
    }

    pub(crate) fn set_title(&mut self, text: &str) {
        self.title = text.trim().to_string();
    }

    /// Accepts the id only outside a revision, and only the first one.
    pub(crate) fn offer_id(&mut self, text: &str) -> bool {
        let id = text.trim();
        if self.in_revision || self.id.is_some() || id.is_empty() {
            return false;
        }
        self.id = Some(id.to_string());
        true
    }

    pub(crate) fn set_links(&mut self, links: Vec<String>) {
        self.links = links;
    }

    pub(crate) fn finish(self) -> PageRecord {
        PageRecord {
            title: self.title,
            id: self.id,
            links: self.links,
        }
    }
}

/// Streams page records out of a MediaWiki XML export.
///
/// Only the current page's fields are held in memory; the event buffer is reused
/// and the body text is dropped as soon as its links have been extracted.
pub struct DumpScanner<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    text: String,
    capturing: bool,
    page: Option<PageState>,
    depth: usize,
    seen_root: bool,
    finished: bool,
    pages_scanned: u64,
    links_found: u64,
}

impl<R: BufRead> DumpScanner<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.trim_text(false);
        reader.check_end_names(true);

        Self {
            reader,
            buf: Vec::with_capacity(8192),
            text: String::new(),
            capturing: false,
            page: None,
            depth: 0,
            seen_root: false,
            finished: false,
            pages_scanned: 0,
            links_found: 0,
        }
    }

    pub fn pages_scanned(&self) -> u64 {
        self.pages_scanned
    }

    /// Running total of distinct links over every page body seen so far.
    pub fn links_found(&self) -> u64 {
        self.links_found
    }

    fn next_page(&mut self) -> Result<Option<PageRecord>> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .with_context(|| {
                    format!("Malformed XML at byte {}", self.reader.buffer_position())
                })?;

            match event {
                Event::Start(e) => {
                    let tag = Tag::from_local_name(e.local_name().as_ref());
                    self.depth += 1;
                    self.seen_root = true;
                    self.open(tag);
                }
                Event::Empty(e) => {
                    let tag = Tag::from_local_name(e.local_name().as_ref());
                    self.seen_root = true;
                    self.open(tag);
                    if let Some(record) = self.close(tag) {
                        return Ok(Some(record));
                    }
                }
                Event::End(e) => {
                    let tag = Tag::from_local_name(e.local_name().as_ref());
                    self.depth = self.depth.saturating_sub(1);
                    if let Some(record) = self.close(tag) {
                        return Ok(Some(record));
                    }
                }
                Event::Text(e) => {
                    if self.capturing {
                        let text = e.unescape().with_context(|| {
                            format!(
                                "Invalid text content at byte {}",
                                self.reader.buffer_position()
                            )
                        })?;
                        self.text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if self.capturing {
                        let bytes = e.into_inner();
                        let text = std::str::from_utf8(&bytes).with_context(|| {
                            format!(
                                "CDATA is not valid UTF-8 at byte {}",
                                self.reader.buffer_position()
                            )
                        })?;
                        self.text.push_str(text);
                    }
                }
                Event::Eof => {
                    if !self.seen_root {
                        bail!("No root element found in dump");
                    }
                    if self.depth > 0 {
                        bail!(
                            "Unexpected end of dump with {} element(s) still open",
                            self.depth
                        );
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }

    fn open(&mut self, tag: Tag) {
        match tag {
            Tag::Page => self.page = Some(PageState::default()),
            Tag::Revision => {
                if let Some(page) = self.page.as_mut() {
                    page.enter_revision();
                }
            }
            _ => {}
        }
        self.capturing = self.page.is_some() && tag.captures_text();
        self.text.clear();
    }

    fn close(&mut self, tag: Tag) -> Option<PageRecord> {
        self.capturing = false;

        match tag {
            Tag::Title => {
                if let Some(page) = self.page.as_mut() {
                    page.set_title(&self.text);
                }
            }
            Tag::Id => {
                if let Some(page) = self.page.as_mut() {
                    if !page.offer_id(&self.text) {
                        trace!(id = self.text.as_str(), "Ignoring nested id");
                    }
                }
            }
            Tag::Text => {
                let body = std::mem::take(&mut self.text);
                if let Some(page) = self.page.as_mut() {
                    if !body.is_empty() {
                        let links = extract_links(&body);
                        self.links_found += links.len() as u64;
                        page.set_links(links);
                    }
                }
            }
            Tag::Page => {
                if let Some(page) = self.page.take() {
                    self.pages_scanned += 1;
                    self.text.clear();
                    return Some(page.finish());
                }
            }
            Tag::Revision | Tag::Other => {}
        }

        self.text.clear();
        None
    }
}

impl<R: BufRead> Iterator for DumpScanner<R> {
    type Item = Result<PageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_page() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
