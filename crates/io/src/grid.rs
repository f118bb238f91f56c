//! Reading gridded depth-duration-frequency tables.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use sluice_idf::{GridRecord, PrecipGrid};
use tracing::{debug, info};

use crate::config::DelimitedConfig;
use crate::error::IoError;

/// Accepted header names per field, matched case-insensitively. The first
/// alias is the canonical name, which is also the positional order used
/// when the file has no header.
const COLUMNS: [&[&str]; 5] = [
    &["lat", "latitude"],
    &["lon", "longitude"],
    &["RP", "return_period"],
    &["duration", "duration_min"],
    &["precip_mm", "precip"],
];

/// Reads gridded precipitation records from a delimited file.
///
/// With a header, columns are located by name (`lat`, `lon`, `RP`,
/// `duration`, `precip_mm`, or their long aliases) and extra columns are
/// ignored. Without one, the first five columns are taken in that order.
/// Fields may be quoted, and `\n` or `\r\n` line endings are accepted.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::InvalidConfig`] | unusable delimiter or comment prefix |
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::MissingColumn`] | a required header name is absent |
/// | [`IoError::Parse`] | a short row or a non-numeric field |
/// | [`IoError::Csv`] | malformed quoting or invalid UTF-8 |
pub fn read_grid_csv(path: &Path, config: &DelimitedConfig) -> Result<Vec<GridRecord>, IoError> {
    let file = File::open(path).map_err(|e| IoError::io(path, e))?;
    let records = parse_grid(BufReader::new(file), config, path)?;
    info!(path = %path.display(), n_records = records.len(), "grid records read");
    Ok(records)
}

/// Reads a delimited file straight into a [`PrecipGrid`].
///
/// # Errors
///
/// See [`read_grid_csv`]; also [`IoError::Idf`] if the records do not form a
/// valid grid.
pub fn read_precip_grid(path: &Path, config: &DelimitedConfig) -> Result<PrecipGrid, IoError> {
    Ok(PrecipGrid::new(read_grid_csv(path, config)?)?)
}

fn parse_grid<R: Read>(
    reader: R,
    config: &DelimitedConfig,
    path: &Path,
) -> Result<Vec<GridRecord>, IoError> {
    let mut csv_reader = config.reader_builder()?.from_reader(reader);

    let indices: [usize; 5] = if config.has_header() {
        let headers = csv_reader.headers().map_err(|e| IoError::csv(path, e))?;
        column_indices(headers, path)?
    } else {
        [0, 1, 2, 3, 4]
    };
    debug!(?indices, "grid columns located");

    let needed = indices.iter().copied().max().unwrap_or(0) + 1;
    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| IoError::csv(path, e))?;
        // Whitespace-only lines trim to a single empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record.position().map_or(0, |p| p.line() as usize);
        if record.len() < needed {
            return Err(IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("expected at least {needed} fields, got {}", record.len()),
            });
        }
        let value = |col: usize| -> Result<f64, IoError> {
            let raw = record.get(indices[col]).unwrap_or_default();
            raw.parse::<f64>().map_err(|_| IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("cannot parse '{raw}' as {}", COLUMNS[col][0]),
            })
        };
        records.push(GridRecord {
            lat: value(0)?,
            lon: value(1)?,
            return_period: value(2)?,
            duration_min: value(3)?,
            precip_mm: value(4)?,
        });
    }
    Ok(records)
}

fn column_indices(headers: &StringRecord, path: &Path) -> Result<[usize; 5], IoError> {
    let mut indices = [0usize; 5];
    for (slot, aliases) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| aliases.iter().any(|a| h.eq_ignore_ascii_case(a)))
            .ok_or_else(|| IoError::MissingColumn {
                name: aliases[0].to_string(),
                path: path.to_path_buf(),
            })?;
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<GridRecord>, IoError> {
        parse_grid(content.as_bytes(), &DelimitedConfig::default(), Path::new("t.csv"))
    }

    #[test]
    fn header_order_is_free() {
        let recs = parse("precip_mm,RP,lon,lat,duration,extra\n12.5,2,-73.5,45.5,30,x\n").unwrap();
        assert_eq!(
            recs,
            vec![GridRecord {
                lat: 45.5,
                lon: -73.5,
                return_period: 2.0,
                duration_min: 30.0,
                precip_mm: 12.5,
            }]
        );
    }

    #[test]
    fn aliases_and_case() {
        let recs = parse("Latitude,LONGITUDE,return_period,Duration_Min,Precip\n1,2,3,4,5\n").unwrap();
        assert_eq!(recs[0].duration_min, 4.0);
        assert_eq!(recs[0].precip_mm, 5.0);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let recs = parse("# source: test\nlat,lon,RP,duration,precip_mm\n\n1,2,3,4,5\n# end\n").unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn positional_without_header() {
        let cfg = DelimitedConfig::default()
            .with_header(false)
            .with_delimiter('\t');
        let recs = parse_grid("1\t2\t3\t4\t5\n".as_bytes(), &cfg, Path::new("t.tsv")).unwrap();
        assert_eq!(recs[0].lat, 1.0);
        assert_eq!(recs[0].precip_mm, 5.0);
    }

    #[test]
    fn missing_column_named() {
        let err = parse("lat,lon,RP,duration\n1,2,3,4\n").unwrap_err();
        match err {
            IoError::MissingColumn { name, .. } => assert_eq!(name, "precip_mm"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_reports_line() {
        let err = parse("lat,lon,RP,duration,precip_mm\n1,2,3,4,5\n1,2,3,four,5\n").unwrap_err();
        match err {
            IoError::Parse { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("'four'"));
                assert!(reason.contains("duration"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_parse_error() {
        let err = parse("lat,lon,RP,duration,precip_mm\n1,2,3\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }

    #[test]
    fn quoted_header_and_fields() {
        let expected = GridRecord {
            lat: 45.5,
            lon: -73.5,
            return_period: 2.0,
            duration_min: 30.0,
            precip_mm: 12.5,
        };
        let quoted_header =
            parse("\"lat\",\"lon\",\"RP\",\"duration\",\"precip_mm\"\n45.5,-73.5,2,30,12.5\n")
                .unwrap();
        assert_eq!(quoted_header, vec![expected]);

        let quoted_fields =
            parse("lat,lon,RP,duration,precip_mm\n\"45.5\",\"-73.5\",2,30,12.5\n").unwrap();
        assert_eq!(quoted_fields, vec![expected]);
    }

    #[test]
    fn quoted_field_may_hold_delimiter() {
        let recs = parse("lat,lon,RP,duration,precip_mm,station\n1,2,3,4,5,\"Dorval, QC\"\n").unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].precip_mm, 5.0);
    }

    #[test]
    fn crlf_line_endings() {
        let recs = parse("lat,lon,RP,duration,precip_mm\r\n1,2,3,4,5\r\n6,7,8,9,10\r\n").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].precip_mm, 10.0);

        let err = parse("lat,lon,RP,duration,precip_mm\r\n1,2,3,4,5\r\n1,2,x,4,5\r\n").unwrap_err();
        match err {
            IoError::Parse { reason, .. } => assert!(reason.contains("'x'"), "{reason}"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
