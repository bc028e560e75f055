//! Z-score normalization of numeric features
//!
//! Every record is projected onto the feature columns, each column is
//! standardized with its population mean and standard deviation, and the
//! resulting vectors are compared with Euclidean distance. All sums are
//! plain left-to-right folds so results are bit-for-bit reproducible.

use attrix_core::value::coerce_number;
use attrix_core::{Dataset, FeatureVector};
use tracing::debug;

/// Mean and effective standard deviation of one feature column.
///
/// A column whose sums overflow (values near `f64::MAX`) has a non-finite
/// mean or deviation; it transforms every value to 0 and so contributes no
/// distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    /// Population standard deviation, or 1.0 when the column is constant
    pub std_dev: f64,
}

impl ColumnStats {
    /// Fit on raw column values (must be non-empty)
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().fold(0.0f64, |acc, v| acc + v) / n;
        let variance = values
            .iter()
            .fold(0.0f64, |acc, v| acc + (v - mean) * (v - mean))
            / n;
        let std_dev = variance.sqrt();
        Self {
            mean,
            std_dev: if std_dev == 0.0 { 1.0 } else { std_dev },
        }
    }

    /// Whether the column's moments are finite and usable for scaling
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }

    /// Standardize one value; always finite for finite input
    #[inline]
    pub fn transform(&self, value: f64) -> f64 {
        if !self.is_finite() {
            return 0.0;
        }
        (value - self.mean) / self.std_dev
    }
}

/// Raw coerced values of one column across all records
pub fn column_values(dataset: &Dataset, column: &str) -> Vec<f64> {
    dataset
        .records()
        .iter()
        .map(|r| coerce_number(r.get(column)))
        .collect()
}

/// Normalize every record on the given feature columns.
///
/// Returns one vector per record, in dataset order. With no columns every
/// vector is zero-dimensional.
pub fn normalize(dataset: &Dataset, columns: &[String]) -> Vec<FeatureVector> {
    let standardized: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| {
            let values = column_values(dataset, column);
            let stats = ColumnStats::fit(&values);
            if !stats.is_finite() {
                debug!(column = %column, "column moments overflow, ignoring for distance");
            }
            values.into_iter().map(|v| stats.transform(v)).collect()
        })
        .collect();

    (0..dataset.len())
        .map(|row| {
            FeatureVector::new(standardized.iter().map(|col| col[row]).collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrix_core::Record;
    use serde_json::{json, Value};

    fn dataset(rows: Vec<Value>) -> Dataset {
        let records: Vec<Record> = rows
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect();
        Dataset::new(records).unwrap()
    }

    #[test]
    fn test_population_std_dev() {
        let stats = ColumnStats::fit(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.transform(9.0), 2.0);
    }

    #[test]
    fn test_constant_column_uses_unit_std_dev() {
        let stats = ColumnStats::fit(&[3.0, 3.0, 3.0]);
        assert_eq!(stats.std_dev, 1.0);
        assert_eq!(stats.transform(3.0), 0.0);
    }

    #[test]
    fn test_overflowing_column_transforms_to_zero() {
        let stats = ColumnStats::fit(&[1e308, 1e308, 0.0, 0.0]);
        assert!(!stats.is_finite());
        assert_eq!(stats.transform(1e308), 0.0);
        assert_eq!(stats.transform(0.0), 0.0);

        // Mean fits but the variance overflows
        let stats = ColumnStats::fit(&[1e200, -1e200]);
        assert_eq!(stats.mean, 0.0);
        assert!(!stats.is_finite());
        assert_eq!(stats.transform(1e200), 0.0);
    }

    #[test]
    fn test_overflowing_column_keeps_other_features() {
        let d = dataset(vec![
            json!({"Income": 1e308, "Age": 30}),
            json!({"Income": 1e308, "Age": 40}),
            json!({"Income": 0, "Age": 31}),
            json!({"Income": 0, "Age": 90}),
        ]);
        let columns = vec!["Income".to_string(), "Age".to_string()];
        let vectors = normalize(&d, &columns);

        assert!(vectors.iter().flat_map(|v| v.as_slice()).all(|x| x.is_finite()));
        assert!(vectors.iter().all(|v| v.as_slice()[0] == 0.0));
        assert!(vectors[0].as_slice()[1] != vectors[2].as_slice()[1]);
    }

    #[test]
    fn test_unparsable_values_coerce_to_zero() {
        let d = dataset(vec![
            json!({"Age": "abc"}),
            json!({"Age": "10"}),
            json!({"Age": null}),
            json!({}),
        ]);
        assert_eq!(column_values(&d, "Age"), vec![0.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_shapes() {
        let d = dataset(vec![
            json!({"Age": 30, "Level": 1}),
            json!({"Age": 40, "Level": 1}),
            json!({"Age": 35, "Level": 1}),
        ]);
        let columns = vec!["Age".to_string(), "Level".to_string()];
        let vectors = normalize(&d, &columns);

        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.dim() == 2));
        // Constant column normalizes to 0 for every record
        assert!(vectors.iter().all(|v| v.as_slice()[1] == 0.0));
        // Mean record sits at the origin of the Age axis
        assert_eq!(vectors[2].as_slice()[0], 0.0);
    }

    #[test]
    fn test_normalize_without_columns() {
        let d = dataset(vec![json!({"Name": "a"}), json!({"Name": "b"})]);
        let vectors = normalize(&d, &[]);
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(FeatureVector::is_empty));
        assert_eq!(vectors[0].euclidean_distance(&vectors[1]), 0.0);
    }
}
