//! wiki2neo: Wikipedia dump to Neo4j bulk-import CSV converter
//!
//! Streams a MediaWiki XML export once, from start to end, and writes two files for
//! `neo4j-admin import`:
//!
//! - **Nodes** (`title:ID,id`) -- one row per page, keyed by title
//! - **Relationships** (`:START_ID,:END_ID`) -- one row per distinct wikilink of a page,
//!   source title to target title
//!
//! Link targets are written as raw titles. Targets with no matching page node are left
//! for the importer to drop (`--ignore-missing-nodes`).
//!
//! # Architecture
//!
//! - **Streaming XML parsing** -- quick-xml pull reader; memory is bounded by the largest
//!   single page body, not by the dump
//! - **Typed page state** -- per-page scratch state reset at every `<page>`; ids seen
//!   inside `<revision>` never replace the page id
//! - **Shared link matcher** -- one compiled regex reused for every page body
//!
//! # Key Modules
//!
//! - [`scanner`] -- XML events to page records
//! - [`links`] -- wikilink target extraction
//! - [`output`] -- node and relationship CSV writers
//! - [`extract`] -- the single-pass pipeline and progress reporting
//! - [`input`] -- dump opening (file, `.bz2`, or stdin)
//! - [`models`] -- the page record type
//! - [`stats`] -- run counters
//! - [`config`] -- constants
//!
//! # Example Usage
//!
//! ```bash
//! # Read a compressed dump, write pages.csv and links.csv
//! wiki2neo enwiki-latest-pages-articles-multistream.xml.bz2
//!
//! # Read from stdin with custom output names
//! bzcat dump.xml.bz2 | wiki2neo -p nodes.csv -l edges.csv
//! ```

pub mod config;
pub mod extract;
pub mod input;
pub mod links;
pub mod models;
pub mod output;
pub mod scanner;
pub mod stats;
