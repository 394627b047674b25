//! TasteDNA quiz: place a visitor in a taste cluster and recommend flavors

use serde::Serialize;

use crate::analytics::clustering::{ClusterAssigner, KMeans};
use crate::error::CoreError;
use crate::models::{TasteProfile, MAX_AFFINITY};
use crate::settings::QuizSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub profile: TasteProfile,
    pub cluster: usize,
    pub recommendations: Vec<String>,
}

/// Quiz backed by any cluster assignment strategy
pub struct TasteQuiz<A: ClusterAssigner> {
    assigner: A,
    settings: QuizSettings,
}

impl TasteQuiz<KMeans> {
    /// Fit the stock k-means model on the synthetic users
    pub fn fit(users: &[TasteProfile], settings: &QuizSettings) -> Result<Self, CoreError> {
        let km = KMeans::fit(users, settings.clusters, settings.max_iterations)?;
        Ok(Self::new(km, settings.clone()))
    }
}

impl<A: ClusterAssigner> TasteQuiz<A> {
    pub fn new(assigner: A, settings: QuizSettings) -> Self {
        Self { assigner, settings }
    }

    pub fn assigner(&self) -> &A {
        &self.assigner
    }

    /// Answer the quiz; each affinity must be within 0-5
    pub fn recommend(&self, profile: TasteProfile) -> Result<QuizResult, CoreError> {
        for (name, value) in [
            ("fruity", profile.fruity),
            ("dessert", profile.dessert),
            ("menthol", profile.menthol),
        ] {
            if !(0.0..=MAX_AFFINITY).contains(&value) {
                return Err(CoreError::data(format!(
                    "{name} affinity {value} is outside 0-{MAX_AFFINITY}"
                )));
            }
        }

        let cluster = self.assigner.assign(&profile)?;
        Ok(QuizResult {
            profile,
            cluster,
            recommendations: self.settings.recommendations_for(cluster).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Menthol lovers go to cluster 1, everyone else to 0
    struct MentholSplit;

    impl ClusterAssigner for MentholSplit {
        fn assign(&self, profile: &TasteProfile) -> Result<usize, CoreError> {
            Ok(usize::from(profile.menthol >= 3.0))
        }

        fn cluster_count(&self) -> usize {
            2
        }
    }

    #[test]
    fn test_pluggable_assigner() {
        let settings = QuizSettings {
            cluster_recommendations: BTreeMap::from([(
                "1".to_string(),
                vec!["Icy Mint".to_string()],
            )]),
            ..QuizSettings::default()
        };
        let quiz = TasteQuiz::new(MentholSplit, settings);

        let minty = quiz.recommend(TasteProfile::new(1.0, 1.0, 5.0)).unwrap();
        assert_eq!(minty.cluster, 1);
        assert_eq!(minty.recommendations, vec!["Icy Mint".to_string()]);

        let sweet = quiz.recommend(TasteProfile::new(1.0, 5.0, 0.0)).unwrap();
        assert_eq!(sweet.cluster, 0);
        assert_eq!(sweet.recommendations.len(), 3);
    }

    #[test]
    fn test_out_of_range_affinity() {
        let quiz = TasteQuiz::new(MentholSplit, QuizSettings::default());
        let err = quiz.recommend(TasteProfile::new(6.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, CoreError::Data { .. }));
        assert!(err.to_string().contains("fruity"));
    }

    #[test]
    fn test_fit_kmeans_quiz() {
        let users = vec![
            TasteProfile::new(5.0, 0.0, 0.0),
            TasteProfile::new(0.0, 5.0, 0.0),
            TasteProfile::new(0.0, 0.0, 5.0),
        ];
        let quiz = TasteQuiz::fit(&users, &QuizSettings::default()).unwrap();
        let a = quiz.recommend(TasteProfile::new(5.0, 0.0, 0.0)).unwrap();
        let b = quiz.recommend(TasteProfile::new(0.0, 0.0, 5.0)).unwrap();
        assert_ne!(a.cluster, b.cluster);
        assert!(a.cluster < quiz.assigner().cluster_count());
    }
}
