// history.rs

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::calculation::Calculation;
use crate::error::CalcError;

/// Required columns of the on-disk history file, in write order.
pub const COLUMNS: [&str; 5] = ["timestamp_utc", "a", "b", "operation", "result"];

/// Ordered table of calculations. Insertion order is chronological order.
/// Rows never change in place; the table only moves through appends and
/// wholesale replacement (clear, restore, load).
#[derive(Debug, Default)]
pub struct History {
    rows: Vec<Calculation>,
}

/// Deep copy of the table at one point in time. Opaque: produced by
/// [`History::snapshot`], consumed by [`History::restore`].
#[derive(Debug, Clone)]
pub struct Memento {
    rows: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, calc: Calculation) {
        self.rows.push(calc);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Calculation] {
        &self.rows
    }

    pub fn snapshot(&self) -> Memento {
        Memento {
            rows: self.rows.clone(),
        }
    }

    pub fn restore(&mut self, memento: Memento) {
        self.rows = memento.rows;
    }

    /// Write the table as delimited text. No field can ever contain the
    /// delimiter, so there is no quoting layer.
    pub fn save(&self, path: &Path) -> Result<(), CalcError> {
        let mut out = String::new();
        out.push_str(&COLUMNS.join(","));
        out.push('\n');
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{},{:?},{:?},{},{:?}",
                row.timestamp_utc, row.a, row.b, row.operation, row.result
            );
        }
        fs::write(path, out).map_err(|e| {
            CalcError::HistoryIo(format!("Failed to save history to {}: {}", path.display(), e))
        })
    }

    /// Read the table back, replacing the current rows. The header must
    /// contain all required columns; their order does not matter and unknown
    /// columns are ignored. The current rows are only replaced once the
    /// whole file has parsed, so a failed load leaves the table untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), CalcError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CalcError::HistoryIo(format!(
                "Failed to load history from {}: {}",
                path.display(),
                e
            ))
        })?;
        self.rows = Self::parse(&text, path)?;
        Ok(())
    }

    fn parse(text: &str, path: &Path) -> Result<Vec<Calculation>, CalcError> {
        let mut lines = text.lines();
        let header: Vec<&str> = lines
            .next()
            .map(|h| h.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let mut idx = [0usize; 5];
        let mut missing = Vec::new();
        for (slot, name) in idx.iter_mut().zip(COLUMNS) {
            match header.iter().position(|h| *h == name) {
                Some(i) => *slot = i,
                None => missing.push(name),
            }
        }
        if !missing.is_empty() {
            return Err(CalcError::HistoryIo(format!(
                "History file missing columns: {missing:?}"
            )));
        }
        let [ts_i, a_i, b_i, op_i, res_i] = idx;
        let width = idx.iter().max().copied().unwrap_or(0) + 1;

        let mut rows = Vec::new();
        for (lineno, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < width {
                return Err(CalcError::HistoryIo(format!(
                    "Failed to load history from {}: row {} has too few fields",
                    path.display(),
                    lineno + 2
                )));
            }
            let number = |raw: &str| -> Result<f64, CalcError> {
                raw.parse::<f64>().map_err(|_| {
                    CalcError::HistoryIo(format!(
                        "Failed to load history from {}: row {}: invalid number {:?}",
                        path.display(),
                        lineno + 2,
                        raw
                    ))
                })
            };
            rows.push(Calculation {
                timestamp_utc: fields[ts_i].to_string(),
                a: number(fields[a_i])?,
                b: number(fields[b_i])?,
                operation: fields[op_i].to_string(),
                result: number(fields[res_i])?,
            });
        }
        Ok(rows)
    }

    /// Human-readable rendering, one row per line, oldest first.
    pub fn format(&self) -> String {
        if self.rows.is_empty() {
            return "(history is empty)".to_string();
        }
        self.rows
            .iter()
            .map(|r| format!("{} {:?} {:?} = {:?}", r.operation, r.a, r.b, r.result))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(op: &str, a: f64, b: f64, result: f64) -> Calculation {
        Calculation {
            a,
            b,
            operation: op.to_string(),
            result,
            timestamp_utc: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn format_of_empty_table() {
        assert_eq!(History::new().format(), "(history is empty)");
    }

    #[test]
    fn format_lists_rows_in_order() {
        let mut history = History::new();
        history.add(row("add", 2.0, 3.0, 5.0));
        history.add(row("div", 1.0, 4.0, 0.25));
        assert_eq!(history.format(), "add 2.0 3.0 = 5.0\ndiv 1.0 4.0 = 0.25");
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut history = History::new();
        history.add(row("add", 1.0, 1.0, 2.0));
        let memento = history.snapshot();

        history.add(row("mul", 2.0, 2.0, 4.0));
        history.add(row("sub", 5.0, 1.0, 4.0));
        assert_eq!(history.len(), 3);

        history.restore(memento);
        assert_eq!(history.len(), 1);
        assert_eq!(history.rows()[0].operation, "add");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut history = History::new();
        history.add(row("add", 2.5, 0.1, 2.6));
        history.add(row("pow", 2.0, 10.0, 1024.0));
        history.save(&path).unwrap();

        let mut restored = History::new();
        restored.load(&path).unwrap();
        assert_eq!(restored.rows(), history.rows());
    }

    #[test]
    fn load_accepts_shuffled_and_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(
            &path,
            "result,operation,b,a,timestamp_utc,note\n5.0,add,3.0,2.0,2026-01-01T00:00:00+00:00,ignored\n",
        )
        .unwrap();

        let mut history = History::new();
        history.load(&path).unwrap();
        assert_eq!(history.rows(), &[row("add", 2.0, 3.0, 5.0)]);
    }

    #[test]
    fn load_reports_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "timestamp_utc,a,b\n").unwrap();

        let err = History::new().load(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"History file missing columns: ["operation", "result"]"#
        );
    }

    #[test]
    fn load_of_empty_file_reports_all_columns_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "").unwrap();

        let err = History::new().load(&path).unwrap_err();
        assert!(err.to_string().starts_with("History file missing columns:"));
    }

    #[test]
    fn failed_load_leaves_rows_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(
            &path,
            "timestamp_utc,a,b,operation,result\n2026-01-01T00:00:00+00:00,two,3.0,add,5.0\n",
        )
        .unwrap();

        let mut history = History::new();
        history.add(row("mul", 2.0, 2.0, 4.0));
        let err = history.load(&path).unwrap_err();
        assert!(err.to_string().contains("invalid number"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn load_of_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = History::new()
            .load(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load history from"));
    }
}
