use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::TownData;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write one town per line to `path`, creating parent directories as needed.
pub fn flush_towns_to_jsonl(towns: &[TownData], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_jsonl(path, towns.iter())
}

/// Read towns written by [`flush_towns_to_jsonl`]. Blank lines are skipped.
pub fn read_towns_from_jsonl(path: &Path) -> io::Result<Vec<TownData>> {
    let reader = BufReader::new(File::open(path)?);
    let mut towns = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        towns.push(serde_json::from_str(&line)?);
    }
    Ok(towns)
}
