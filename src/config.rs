/// Default node (page) CSV output file
pub const PAGES_CSV_FILENAME: &str = "pages.csv";

/// Default relationship (link) CSV output file
pub const LINKS_CSV_FILENAME: &str = "links.csv";

/// Progress report interval (report every N pages)
pub const PROGRESS_N: u64 = 100_000;

/// Header of the node import file: `title` is the node key, `id` a plain property
pub const NODE_HEADER: [&str; 2] = ["title:ID", "id"];

/// Header of the relationship import file
pub const EDGE_HEADER: [&str; 2] = [":START_ID", ":END_ID"];

/// Written in place of the page id when a page carries none
pub const MISSING_ID: &str = "-1";

/// Buffer capacity for reading the dump
pub const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Buffer capacity for each CSV writer
pub const CSV_BUFFER_SIZE: usize = 128 * 1024;
