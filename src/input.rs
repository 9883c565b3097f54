use crate::config::READ_BUFFER_SIZE;
use anyhow::{Context, Result};
use bzip2::read::MultiBzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Opens the dump for sequential reading.
///
/// `None` reads standard input. A path ending in `.bz2` is decompressed on the fly;
/// multistream archives (`pages-articles-multistream.xml.bz2`) are read to the end.
pub fn open_dump(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        info!("Reading dump from stdin");
        return Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            io::stdin(),
        )));
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open wiki dump at: {}", path.display()))?;

    if is_bz2(path) {
        info!(path = %path.display(), "Reading bz2 compressed dump");
        Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            MultiBzDecoder::new(file),
        )))
    } else {
        info!(path = %path.display(), "Reading dump");
        Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}

fn is_bz2(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bz2"))
}
