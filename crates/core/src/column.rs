//! Column statistics and numeric/text classification.
//!
//! The mapper only depends on the [`ColumnTyper`] contract: given a column name and the
//! whole record set, say whether the column is numeric. [`StatsColumnTyper`] is the
//! default implementation and decides by majority over [`ColumnStats`].

use crate::records::RecordSet;
use std::fmt;

/// How the values of a column are carried on observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Values go into `valueInteger`.
    Numeric,
    /// Values go into `valueString`.
    Text,
}

/// Classifies a column of a record set.
pub trait ColumnTyper: Send + Sync {
    fn classify(&self, column: &str, records: &RecordSet) -> ColumnKind;
}

/// Summary of one column's values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnStats {
    /// Number of rows inspected.
    pub total: usize,
    /// Values that are empty or whitespace only.
    pub empty: usize,
    /// Non-empty values that parse as a finite number.
    pub numeric: usize,
    /// Non-empty values that do not.
    pub text: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl ColumnStats {
    pub fn compute(column: &str, records: &RecordSet) -> Self {
        let mut stats = ColumnStats::default();
        let mut sum = 0.0;

        for raw in records.column_values(column) {
            stats.total += 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                stats.empty += 1;
                continue;
            }

            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => {
                    stats.numeric += 1;
                    sum += n;
                    stats.min = Some(stats.min.map_or(n, |m| m.min(n)));
                    stats.max = Some(stats.max.map_or(n, |m| m.max(n)));
                }
                _ => stats.text += 1,
            }
        }

        if stats.numeric > 0 {
            stats.mean = Some(sum / stats.numeric as f64);
        }

        stats
    }

    /// Numeric when at least one value is numeric and numeric values are not
    /// outnumbered by text values. Empty values do not vote.
    pub fn kind(&self) -> ColumnKind {
        if self.numeric > 0 && self.numeric >= self.text {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }
}

/// One-line report: kind, counts and, for columns with numeric values, their range and
/// mean.
impl fmt::Display for ColumnStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} (numeric: {}, text: {}, empty: {})",
            self.kind(),
            self.numeric,
            self.text,
            self.empty
        )?;
        if let (Some(min), Some(max), Some(mean)) = (self.min, self.max, self.mean) {
            write!(f, " min: {min}, max: {max}, mean: {mean:.2}")?;
        }
        Ok(())
    }
}

/// Default typer: majority vote over [`ColumnStats`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsColumnTyper;

impl ColumnTyper for StatsColumnTyper {
    fn classify(&self, column: &str, records: &RecordSet) -> ColumnKind {
        ColumnStats::compute(column, records).kind()
    }
}

/// Lenient integer coercion for values of numeric columns.
///
/// Anything that is not a plain integer (after trimming) becomes `0`.
pub fn coerce_integer(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::trace!(value = raw, "non-integer value in numeric column coerced to 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;

    fn column(values: &[&str]) -> RecordSet {
        let rows = values
            .iter()
            .map(|v| {
                let mut row = Record::new();
                row.insert("c".into(), v.to_string());
                row
            })
            .collect();
        RecordSet::from_rows(rows)
    }

    #[test]
    fn counts_numeric_text_and_empty_values() {
        let stats = ColumnStats::compute("c", &column(&["34", " 40 ", "", "n/a", "2.5"]));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.numeric, 3);
        assert_eq!(stats.text, 1);
        assert_eq!(stats.min, Some(2.5));
        assert_eq!(stats.max, Some(40.0));
        assert_eq!(stats.mean, Some(76.5 / 3.0));
    }

    #[test]
    fn report_includes_range_for_numeric_values() {
        let stats = ColumnStats::compute("c", &column(&["1", "4", "", "x"]));
        assert_eq!(
            stats.to_string(),
            "Numeric (numeric: 2, text: 1, empty: 1) min: 1, max: 4, mean: 2.50"
        );

        let stats = ColumnStats::compute("c", &column(&["x", ""]));
        assert_eq!(stats.to_string(), "Text (numeric: 0, text: 1, empty: 1)");
    }

    #[test]
    fn majority_numeric_column_is_numeric() {
        let records = column(&["1", "2", "x"]);
        assert_eq!(StatsColumnTyper.classify("c", &records), ColumnKind::Numeric);
    }

    #[test]
    fn majority_text_column_is_text() {
        let records = column(&["1", "x", "y"]);
        assert_eq!(StatsColumnTyper.classify("c", &records), ColumnKind::Text);
    }

    #[test]
    fn all_empty_column_is_text() {
        let records = column(&["", " "]);
        assert_eq!(StatsColumnTyper.classify("c", &records), ColumnKind::Text);
        assert_eq!(ColumnStats::compute("c", &records).mean, None);
    }

    #[test]
    fn non_finite_values_count_as_text() {
        let stats = ColumnStats::compute("c", &column(&["NaN", "inf"]));
        assert_eq!(stats.numeric, 0);
        assert_eq!(stats.text, 2);
    }

    #[test]
    fn unknown_column_has_only_empty_values() {
        let stats = ColumnStats::compute("missing", &column(&["1"]));
        assert_eq!(stats.total, 1);
        assert_eq!(stats.empty, 1);
    }

    #[test]
    fn coerce_integer_is_lenient() {
        assert_eq!(coerce_integer("34"), 34);
        assert_eq!(coerce_integer(" -7 "), -7);
        assert_eq!(coerce_integer("2.5"), 0);
        assert_eq!(coerce_integer("abc"), 0);
        assert_eq!(coerce_integer(""), 0);
    }
}
