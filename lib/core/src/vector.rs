use serde::{Deserialize, Serialize};

/// A normalized feature vector, one component per numeric column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Compute L2 (Euclidean) distance
    ///
    /// Squared differences are accumulated left to right so results are
    /// reproducible. Zero-dimensional vectors are at distance 0.
    #[inline]
    pub fn euclidean_distance(&self, other: &FeatureVector) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0f64, |acc, (a, b)| {
                let diff = a - b;
                acc + diff * diff
            })
            .sqrt()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let v1 = FeatureVector::new(vec![0.0, 0.0]);
        let v2 = FeatureVector::new(vec![3.0, 4.0]);
        assert!((v1.euclidean_distance(&v2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let v1 = FeatureVector::new(vec![1.5, -2.0, 0.25]);
        let v2 = FeatureVector::new(vec![-0.5, 3.0, 1.0]);
        assert_eq!(v1.euclidean_distance(&v2), v2.euclidean_distance(&v1));
    }

    #[test]
    fn test_zero_dimensional_distance() {
        let v1 = FeatureVector::default();
        let v2 = FeatureVector::default();
        assert!(v1.is_empty());
        assert_eq!(v1.euclidean_distance(&v2), 0.0);
    }
}
