//! CSV source and sink adapters.
//!
//! The reconciliation core works on generic tables; this module binds it
//! to CSV files using standard `Read` and `Write` traits so callers can
//! use files, stdin/stdout, or in-memory buffers.

use crate::error::Result;
use crate::report::{NamedTable, ReportBundle};
use crate::source::Table;
use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a CSV record set into a generic [`Table`].
///
/// Header names are trimmed. Rows may be shorter or longer than the
/// header; short rows read as empty cells downstream.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use gstrecon::csv_format::read_table;
///
/// let mut file = File::open("gstr2b.csv")?;
/// let table = read_table(&mut file)?;
/// println!("{} rows", table.rows.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_table<R: Read>(reader: &mut R) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Write one named table as CSV: header line first, then data rows.
/// A zero-row table writes just its header line.
pub fn write_table<W: Write>(table: &NamedTable, writer: &mut W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(table.columns)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write all five report tables into a directory, one `<name>.csv` each.
pub fn write_report<P: AsRef<Path>>(report: &ReportBundle, dir: P) -> Result<()> {
    for table in report.tables() {
        let path = dir.as_ref().join(format!("{}.csv", table.name));
        let mut file = File::create(path)?;
        write_table(table, &mut file)?;
    }
    Ok(())
}
