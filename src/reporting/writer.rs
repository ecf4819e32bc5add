use std::fs::File;
use std::io::Write;
use std::path::Path;
use csv::{Terminator, WriterBuilder};
use crate::errors::S2pError;
use super::formatter::Table;
use tracing::info;

#[cfg(windows)]
const LINE_TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const LINE_TERMINATOR: Terminator = Terminator::Any(b'\n');

/// Encode `table` as CSV into `sink`: the header row, then every data row.
pub fn render_csv<W: Write>(table: &Table, sink: W) -> Result<(), S2pError> {
    let mut writer = WriterBuilder::new()
        .terminator(LINE_TERMINATOR)
        .from_writer(sink);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file. A failure part way
/// through can leave a partial file behind.
pub fn write_csv(path: &Path, table: &Table) -> Result<usize, S2pError> {
    let file = File::create(path).map_err(|e| S2pError::file_access(path, e))?;
    render_csv(table, file).map_err(|e| output_error(path, e))?;
    info!(path = %path.display(), rows = table.rows.len(), "Report written");
    Ok(table.rows.len())
}

/// I/O failures while writing the report are failures to write `path`.
fn output_error(path: &Path, err: S2pError) -> S2pError {
    match err {
        S2pError::Io(source) => S2pError::file_access(path, source),
        S2pError::Csv(err) if err.is_io_error() => match err.into_kind() {
            csv::ErrorKind::Io(source) => S2pError::file_access(path, source),
            _ => S2pError::file_access(path, std::io::Error::other("CSV write failed")),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut buf = Vec::new();
        render_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let table = Table::new(["Region", "VPC", "Subnet"]);
        assert_eq!(render(&table).lines().collect::<Vec<_>>(), vec!["Region,VPC,Subnet"]);
    }

    #[test]
    fn test_empty_cells_render_as_empty_fields() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row(["1", "", "X"]);
        let out = render(&table);
        assert_eq!(out.lines().nth(1), Some("1,,X"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut table = Table::new(["name"]);
        table.push_row(["my,bucket"]);
        assert!(render(&table).contains("\"my,bucket\""));
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let table = Table::new(["a"]);
        let err = write_csv(Path::new("/nonexistent-dir/out.csv"), &table).unwrap_err();
        assert_eq!(err.classify().error_type, "FileAccessError");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_is_file_access_error() {
        let mut table = Table::new(["a"]);
        table.push_row(["1"]);
        let err = write_csv(Path::new("/dev/full"), &table).unwrap_err();
        match err {
            S2pError::FileAccess { path, .. } => assert_eq!(path, Path::new("/dev/full")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
