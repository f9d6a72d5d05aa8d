use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::debug;

use crate::metadata::PostRecord;

pub(crate) fn load_index(index_path: &Path) -> anyhow::Result<Vec<PostRecord>> {
    let fd = File::open(index_path).with_context(|| format!("while opening {index_path:?}"))?;
    let reader = BufReader::new(fd);
    let records: Vec<PostRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("while reading records from {index_path:?}"))?;
    debug!("{} records loaded from {index_path:?}", records.len());

    Ok(records)
}

pub(crate) fn save_index(index_path: &Path, records: &[PostRecord]) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(index_path)
        .with_context(|| format!("while opening {index_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    Ok(())
}
