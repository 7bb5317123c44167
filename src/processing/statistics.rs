use std::fmt;

use crate::data::table::FrequencyTable;
use crate::error::SummaryError;

/// Summary statistics of the `total_count` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub median: f64,
    pub mean: f64,
}

impl Summary {
    pub fn compute(table: &FrequencyTable) -> Result<Self, SummaryError> {
        Self::from_counts(&table.counts())
    }

    pub fn from_counts(counts: &[u64]) -> Result<Self, SummaryError> {
        if counts.is_empty() {
            return Err(SummaryError::EmptyTable);
        }

        let count = counts.len();
        let sum: u128 = counts.iter().map(|&c| u128::from(c)).sum();
        let mean = sum as f64 / count as f64;

        let mut sorted = counts.to_vec();
        sorted.sort_unstable();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] as f64 + sorted[count / 2] as f64) / 2.0
        } else {
            sorted[count / 2] as f64
        };

        Ok(Summary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            median,
            mean,
        })
    }

    /// The two-line `label:\tvalue` report, median first.
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

pub struct Report<'a>(&'a Summary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "median:\t{}", format_count(self.0.median))?;
        writeln!(f, "mean:\t{}", format_count(self.0.mean))
    }
}

/// Shortest round-trip rendering with a trailing `.0` on whole numbers and a
/// signed two-digit exponent below 1e-4 and from 1e16 (`5e-05`, `1e+16`).
pub fn format_count(value: f64) -> String {
    // Debug switches to exponent form at the same magnitudes.
    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::FrequencyRow;

    fn table(rows: &[(&str, u64)]) -> FrequencyTable {
        rows.iter()
            .map(|&(name, count)| FrequencyRow::new(name, count))
            .collect()
    }

    #[test]
    fn odd_length() {
        let s = Summary::compute(&table(&[("a", 1), ("b", 2), ("b", 3)])).unwrap();
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert_eq!((s.count, s.min, s.max), (3, 1, 3));
    }

    #[test]
    fn even_length_averages_middle_pair() {
        let s = Summary::compute(&table(&[("a", 10), ("b", 20)])).unwrap();
        assert_eq!(s.median, 15.0);
    }

    #[test]
    fn single_row() {
        let s = Summary::compute(&table(&[("a", 7)])).unwrap();
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.median, 7.0);
    }

    #[test]
    fn median_ignores_row_order() {
        // upstream exports are sorted descending
        let s = Summary::from_counts(&[900, 40, 12, 3]).unwrap();
        assert_eq!(s.median, 26.0);
        assert_eq!(s.mean, 238.75);
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let s = Summary::from_counts(&[u64::MAX, u64::MAX]).unwrap();
        assert_eq!(s.mean, u64::MAX as f64);
    }

    #[test]
    fn empty_table_fails() {
        assert!(matches!(
            Summary::compute(&FrequencyTable::default()),
            Err(SummaryError::EmptyTable)
        ));
    }

    #[test]
    fn report_format() {
        let s = Summary::from_counts(&[1, 2, 4]).unwrap();
        assert_eq!(
            s.report().to_string(),
            "median:\t2.0\nmean:\t2.3333333333333335\n"
        );
    }

    #[test]
    fn report_uses_two_digit_exponents() {
        // one attested headword among twenty thousand
        let mut counts = vec![0u64; 20_000];
        counts[0] = 1;
        let s = Summary::from_counts(&counts).unwrap();

        assert_eq!(s.report().to_string(), "median:\t0.0\nmean:\t5e-05\n");
    }

    #[test]
    fn count_formatting_across_magnitudes() {
        assert_eq!(format_count(15.0), "15.0");
        assert_eq!(format_count(0.0001), "0.0001");
        assert_eq!(format_count(1.5e-5), "1.5e-05");
        assert_eq!(format_count(123456789.25), "123456789.25");
        assert_eq!(format_count(1e16), "1e+16");
        assert_eq!(format_count(2.5e123), "2.5e+123");
    }
}
