use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes `data` as csv to `path`, or to stdout when no path is given.
pub fn dump_data_to_csv<T: Serialize>(
    data: &[T],
    path: Option<&Path>,
) -> Result<(), csv::Error> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = csv::Writer::from_writer(writer);
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
