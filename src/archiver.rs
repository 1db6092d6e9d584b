use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::Review;

/// Serialize with 4-space indentation.
pub fn to_json(reviews: &[Review]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    reviews.serialize(&mut ser)?;
    Ok(buf)
}

pub fn save_to_file(reviews: &[Review], path: &Path) -> Result<()> {
    let json = to_json(reviews)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(&json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), reviews = reviews.len(), "Wrote reviews");
    Ok(())
}
