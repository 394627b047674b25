//! TasteDNA affinity vectors from `users_synthetic.csv`

use serde::{Deserialize, Serialize};

/// Highest value the quiz sliders accept
pub const MAX_AFFINITY: f64 = 5.0;

/// Fruity / dessert / menthol affinity of one user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    #[serde(rename = "TasteDNA_Fruity")]
    pub fruity: f64,
    #[serde(rename = "TasteDNA_Dessert")]
    pub dessert: f64,
    #[serde(rename = "TasteDNA_Menthol")]
    pub menthol: f64,
}

impl TasteProfile {
    pub fn new(fruity: f64, dessert: f64, menthol: f64) -> Self {
        Self {
            fruity,
            dessert,
            menthol,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.fruity, self.dessert, self.menthol]
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Squared euclidean distance
    pub fn distance_sq(&self, other: &TasteProfile) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        let a = TasteProfile::new(0.0, 0.0, 0.0);
        let b = TasteProfile::new(1.0, 2.0, 2.0);
        assert_eq!(a.distance_sq(&b), 9.0);
        assert_eq!(b.distance_sq(&a), 9.0);
    }
}
