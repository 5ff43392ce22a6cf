use crate::model::HourlyRecord;
use std::path::Path;
use std::{fs, string::FromUtf8Error};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV Error")]
    Csv(#[from] csv::Error),

    #[error("FS Error")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Serialize records to an in-memory CSV table with the header row
/// `date,day,hour,number_of_transactions,total_amount`.
pub fn to_csv_string(records: &[HourlyRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let buf = writer.into_inner().map_err(|err| err.into_error())?;

    Ok(String::from_utf8(buf)?)
}

/// Write records as a CSV table, fully overwriting `path`.
///
/// Missing parent directories are created. The table is serialized in memory
/// first, so the file is never left holding a partial row set.
pub fn write_csv(path: impl AsRef<Path>, records: &[HourlyRecord]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let table = to_csv_string(records)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("Writing {} rows to {path:?}", records.len());
    fs::write(path, table)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TotalAmount;
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    fn sample_records() -> Vec<HourlyRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        vec![
            HourlyRecord::new(date, 0, 4521, TotalAmount::from_f64(1234.5).unwrap()),
            HourlyRecord::new(date, 1, 0, TotalAmount::from_f64(0.0).unwrap()),
        ]
    }

    #[test]
    fn test_header_and_row_shape() {
        let table = to_csv_string(&sample_records()).unwrap();
        let mut lines = table.lines();

        assert_eq!(
            lines.next(),
            Some("date,day,hour,number_of_transactions,total_amount"),
        );
        assert_eq!(lines.next(), Some("2024-01-01,Monday,0,4521,1234.50"));
        assert_eq!(lines.next(), Some("2024-01-01,Monday,1,0,0.00"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    #[traced_test]
    fn test_write_creates_parent_dirs_and_overwrites() {
        let _ = tracing_log::LogTracer::init();

        let dir = std::env::temp_dir().join(format!(
            "txgen-export-test-{}-{}",
            std::process::id(),
            line!(),
        ));
        let path = dir.join("nested").join("data.csv");

        write_csv(&path, &sample_records()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert_eq!(first, to_csv_string(&sample_records()).unwrap());

        // A second run replaces the file wholesale.
        let shorter = &sample_records()[..1];
        write_csv(&path, shorter).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(second, to_csv_string(shorter).unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }
}
