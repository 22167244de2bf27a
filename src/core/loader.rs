use crate::domain::model::BerDataset;
use crate::utils::error::{PlotError, Result};
use serde::Deserialize;
use std::path::Path;

pub const COL_EB_N0: &str = "EbN0_dB";
pub const COL_BER_INFO: &str = "BER_info";
pub const COL_BER_BPSK: &str = "BER_bpsk";

#[derive(Debug, Deserialize)]
struct BerRow {
    #[serde(rename = "EbN0_dB")]
    eb_n0_db: f64,
    #[serde(rename = "BER_info")]
    ber_info: f64,
    #[serde(rename = "BER_bpsk")]
    ber_bpsk: f64,
}

/// Read the selected CSV into three aligned sequences, preserving file order.
/// The header is checked up front so a missing column surfaces as a schema
/// problem rather than a row-level deserialization failure; extra columns are
/// ignored. No range or monotonicity validation happens here.
pub fn load_dataset(path: &Path) -> Result<BerDataset> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in [COL_EB_N0, COL_BER_INFO, COL_BER_BPSK] {
        if !headers.iter().any(|h| h == required) {
            return Err(PlotError::SchemaError {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut dataset = BerDataset::default();
    for row in reader.deserialize::<BerRow>() {
        let row = row?;
        dataset.eb_n0_db.push(row.eb_n0_db);
        dataset.ber_info.push(row.ber_info);
        dataset.ber_bpsk.push(row.ber_bpsk);
    }

    tracing::debug!(
        "loaded {} operating points from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("ldpc_ber_N1024_wc3_wr6_iter50_data.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_well_formed_file_yields_aligned_sequences() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(
            &temp,
            "EbN0_dB,BER_info,BER_bpsk\n\
             0.0,1.0e-1,7.9e-2\n\
             1.0,4.0e-2,5.6e-2\n\
             2.0,9.0e-3,3.8e-2\n",
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.ber_info.len(), 3);
        assert_eq!(dataset.ber_bpsk.len(), 3);
        assert_eq!(dataset.eb_n0_db, vec![0.0, 1.0, 2.0]);
        assert!((dataset.ber_info[2] - 9.0e-3).abs() < 1e-15);
    }

    #[test]
    fn test_rows_are_kept_in_file_order() {
        let temp = TempDir::new().unwrap();
        // deliberately descending; the loader must not sort
        let path = write_csv(
            &temp,
            "EbN0_dB,BER_info,BER_bpsk\n\
             3.0,1e-3,1e-2\n\
             1.0,1e-1,1e-1\n",
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.eb_n0_db, vec![3.0, 1.0]);
    }

    #[test]
    fn test_each_missing_column_is_a_schema_error() {
        let temp = TempDir::new().unwrap();

        for (content, missing) in [
            ("BER_info,BER_bpsk\n1e-2,1e-2\n", COL_EB_N0),
            ("EbN0_dB,BER_bpsk\n0.0,1e-2\n", COL_BER_INFO),
            ("EbN0_dB,BER_info\n0.0,1e-2\n", COL_BER_BPSK),
        ] {
            let path = write_csv(&temp, content);
            let err = load_dataset(&path).unwrap_err();
            match err {
                PlotError::SchemaError { column, .. } => assert_eq!(column, missing),
                other => panic!("expected SchemaError, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(
            &temp,
            "EbN0_dB,BER_info,BER_code,BER_bpsk,frames\n\
             0.0,1e-1,2e-1,8e-2,1000\n",
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!((dataset.ber_bpsk[0] - 8e-2).abs() < 1e-15);
    }

    #[test]
    fn test_malformed_cell_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(
            &temp,
            "EbN0_dB,BER_info,BER_bpsk\n\
             0.0,not-a-number,8e-2\n",
        );

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, PlotError::ParseError(_)));
    }

    #[test]
    fn test_short_row_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(
            &temp,
            "EbN0_dB,BER_info,BER_bpsk\n\
             0.0,1e-1\n",
        );

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, PlotError::ParseError(_)));
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(&temp, "EbN0_dB,BER_info,BER_bpsk\n");

        let dataset = load_dataset(&path).unwrap();
        assert!(dataset.is_empty());
    }
}
