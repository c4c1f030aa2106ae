//! Spline table import
//!
//! Reads pre-computed spline points from comma separated text, one record per
//! line, no header:
//!
//! ```text
//! time,   x,       y,      z,         a,      b,      c,      time_mark
//! 1.0000, 44.9624, 8.7501, 1119.9937, 9.2796, 0.0000, 0.0000, 0.0000
//! ```
//!
//! Fields beyond the eighth are ignored. Blank lines are skipped. A UTF-8 byte
//! order mark on the first line is dropped and fields may be wrapped in double
//! quotes. Quoted fields cannot contain commas.

use kukakit_core::{AuxFlags, E6Pos, TableError, Trajectory};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;

/// Column names in record order
pub const TABLE_COLUMNS: [&str; 8] = ["time", "x", "y", "z", "a", "b", "c", "time_mark"];

/// How unparsable numeric fields are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    /// Any unparsable field fails the import
    #[default]
    Strict,
    /// Unparsable fields read as 0.0 and are logged
    Lenient,
}

/// Parser turning table records into spline points
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser {
    policy: FieldPolicy,
}

impl TableParser {
    pub fn new(policy: FieldPolicy) -> Self {
        Self { policy }
    }

    /// Parse a whole table held in memory
    pub fn parse_str(&self, text: &str) -> Result<Trajectory, TableError> {
        let mut points = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            self.push_line(&mut points, line_idx + 1, line)?;
        }
        Ok(points)
    }

    /// Parse a table from any buffered reader
    pub fn parse_reader<R: BufRead>(
        &self,
        reader: R,
        source: &str,
    ) -> Result<Trajectory, TableError> {
        let mut points = Vec::new();
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| TableError::Read {
                path: source.to_string(),
                reason: e.to_string(),
            })?;
            self.push_line(&mut points, line_idx + 1, &line)?;
        }
        Ok(points)
    }

    /// Parse a table file
    pub fn parse_file(&self, path: &Path) -> Result<Trajectory, TableError> {
        let file = std::fs::File::open(path).map_err(|e| TableError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let points = self.parse_reader(std::io::BufReader::new(file), &path.display().to_string())?;
        tracing::debug!("Read {} points from {}", points.len(), path.display());
        Ok(points)
    }

    /// Parse pre-split records. Indices follow record order starting at 1.
    pub fn parse_records<S: AsRef<str>>(
        &self,
        records: &[Vec<S>],
    ) -> Result<Trajectory, TableError> {
        records
            .iter()
            .enumerate()
            .map(|(i, fields)| {
                let fields: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
                self.parse_record(i + 1, i + 1, &fields)
            })
            .collect()
    }

    fn push_line(
        &self,
        points: &mut Trajectory,
        line: usize,
        text: &str,
    ) -> Result<(), TableError> {
        let text = if line == 1 {
            text.strip_prefix('\u{feff}').unwrap_or(text)
        } else {
            text
        };
        if text.trim().is_empty() {
            return Ok(());
        }
        let fields: Vec<&str> = text.split(',').collect();
        let point = self.parse_record(points.len() + 1, line, &fields)?;
        points.push(point);
        Ok(())
    }

    fn parse_record(
        &self,
        index: usize,
        line: usize,
        fields: &[&str],
    ) -> Result<E6Pos, TableError> {
        if fields.len() < TABLE_COLUMNS.len() {
            return Err(TableError::ShortRecord {
                line,
                found: fields.len(),
                expected: TABLE_COLUMNS.len(),
            });
        }

        let mut values = [0.0f64; 8];
        for (col, value) in values.iter_mut().enumerate() {
            *value = self.parse_field(line, col, fields[col])?;
        }
        let [time_code, x, y, z, a, b, c, time_mark] = values;

        Ok(E6Pos {
            index,
            time_code,
            time_mark,
            x,
            y,
            z,
            a,
            b,
            c,
            s: AuxFlags::TABLE.s,
            t: AuxFlags::TABLE.t,
            ..E6Pos::default()
        })
    }

    fn parse_field(&self, line: usize, col: usize, raw: &str) -> Result<f64, TableError> {
        let trimmed = raw.trim();
        let text = trimmed
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .map_or(trimmed, str::trim);
        match text.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => match self.policy {
                FieldPolicy::Strict => Err(TableError::InvalidField {
                    line,
                    column: TABLE_COLUMNS[col].to_string(),
                    value: text.to_string(),
                }),
                FieldPolicy::Lenient => {
                    tracing::warn!(
                        "Line {}: invalid {} value '{}', using 0.0",
                        line,
                        TABLE_COLUMNS[col],
                        text
                    );
                    Ok(0.0)
                }
            },
        }
    }
}

/// Parse a table with the strict field policy
pub fn parse_table(text: &str) -> Result<Trajectory, TableError> {
    TableParser::default().parse_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let points = TableParser::default()
            .parse_str("1.0,44.9624,8.7501,1119.9937,9.2796,0.0,0.0,0.0")
            .unwrap();

        assert_eq!(points.len(), 1);
        let p = points[0];
        assert_eq!(p.index, 1);
        assert_eq!(p.time_code, 1.0);
        assert_eq!(p.x, 44.9624);
        assert_eq!(p.y, 8.7501);
        assert_eq!(p.z, 1119.9937);
        assert_eq!(p.a, 9.2796);
        assert_eq!(p.b, 0.0);
        assert_eq!(p.c, 0.0);
        assert_eq!(p.time_mark, 0.0);
        assert_eq!(p.flags(), AuxFlags::TABLE);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let points = TableParser::default()
            .parse_str(" 2.5 , 1 ,2, 3 ,4,5,6 , 0.5 \n")
            .unwrap();
        assert_eq!(points[0].time_code, 2.5);
        assert_eq!(points[0].z, 3.0);
        assert_eq!(points[0].time_mark, 0.5);
    }

    #[test]
    fn test_quoted_fields_and_bom() {
        let text = "\u{feff}\"1.0\",\"44.9624\",8.7501,\" 1119.9937\",9.2796,0.0,0.0,\"0.0\"\n\
                    \"2.0\",1,2,3,4,5,6,\"1.5\"\n";
        let points = TableParser::default().parse_str(text).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time_code, 1.0);
        assert_eq!(points[0].x, 44.9624);
        assert_eq!(points[0].z, 1119.9937);
        assert_eq!(points[1].time_mark, 1.5);
    }

    #[test]
    fn test_bom_is_only_dropped_on_first_line() {
        let text = "1,1,2,3,4,5,6,0\n\u{feff}2,1,2,3,4,5,6,0\n";
        let err = TableParser::default().parse_str(text).unwrap_err();
        assert!(matches!(err, TableError::InvalidField { line: 2, .. }));
    }

    #[test]
    fn test_parse_table_is_strict() {
        let points = parse_table("1.0,44.9624,8.7501,1119.9937,9.2796,0.0,0.0,0.0\n").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].z, 1119.9937);
        assert!(parse_table("1.0,x,0,0,0,0,0,0\n").is_err());
    }

    #[test]
    fn test_empty_table() {
        assert!(TableParser::default().parse_str("").unwrap().is_empty());
        assert!(TableParser::default().parse_str("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_short_record_reports_line() {
        let text = "0,1,2,3,4,5,6,0\n\n1,2,3,4,5,6,7\n";
        let err = TableParser::default().parse_str(text).unwrap_err();
        assert_eq!(
            err,
            TableError::ShortRecord {
                line: 3,
                found: 7,
                expected: 8
            }
        );
    }

    #[test]
    fn test_strict_rejects_bad_field() {
        let err = TableParser::new(FieldPolicy::Strict)
            .parse_str("0,1,2,abc,4,5,6,0")
            .unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidField {
                line: 1,
                column: "z".to_string(),
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_lenient_defaults_every_column_uniformly() {
        let points = TableParser::new(FieldPolicy::Lenient)
            .parse_str("x,1,?,abc,4,,6,nope")
            .unwrap();
        let p = points[0];
        assert_eq!(p.time_code, 0.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
        assert_eq!(p.b, 0.0);
        assert_eq!(p.c, 6.0);
        assert_eq!(p.time_mark, 0.0);
    }

    #[test]
    fn test_indices_skip_blank_lines() {
        let text = "0,0,0,0,0,0,0,0\n\n1,0,0,0,0,0,0,1\n2,0,0,0,0,0,0,0\n";
        let points = TableParser::default().parse_str(text).unwrap();
        let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_records() {
        let records = vec![
            vec!["0", "1", "2", "3", "4", "5", "6", "0", "extra"],
            vec!["1", "1", "2", "3", "4", "5", "6", "1"],
        ];
        let points = TableParser::default().parse_records(&records).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].index, 2);
        assert_eq!(points[1].time_mark, 1.0);
    }
}
