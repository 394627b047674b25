//! Taste clustering
//!
//! Callers only see [`ClusterAssigner`]; [`KMeans`] is the stock strategy.
//! The fit is fully deterministic: farthest-point seeding starting from the
//! user nearest the global mean, then Lloyd iterations until assignments
//! stop changing or `max_iterations` is reached.

use tracing::debug;

use crate::error::CoreError;
use crate::models::TasteProfile;

/// Maps a taste vector to a cluster id
pub trait ClusterAssigner {
    fn assign(&self, profile: &TasteProfile) -> Result<usize, CoreError>;

    fn cluster_count(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    centroids: Vec<TasteProfile>,
    iterations: usize,
}

impl KMeans {
    /// Fit `k` clusters to `users`
    ///
    /// `k` is clamped to the number of distinct users.
    ///
    /// # Errors
    /// - `EmptyData` if `users` is empty
    /// - `InvalidArgument` if `k` or `max_iterations` is 0
    pub fn fit(
        users: &[TasteProfile],
        k: usize,
        max_iterations: usize,
    ) -> Result<Self, CoreError> {
        if k == 0 {
            return Err(CoreError::invalid_argument(
                "cluster count must be at least 1",
            ));
        }
        if max_iterations == 0 {
            return Err(CoreError::invalid_argument(
                "max_iterations must be at least 1",
            ));
        }
        if users.is_empty() {
            return Err(CoreError::EmptyData {
                operation: "taste clustering",
            });
        }

        let mut centroids = seed_centroids(users, k);
        let mut labels: Vec<usize> = users.iter().map(|u| nearest(&centroids, u)).collect();
        let mut iterations = 0;

        while iterations < max_iterations {
            iterations += 1;
            centroids = recompute_centroids(users, &labels, &centroids);

            let next: Vec<usize> = users.iter().map(|u| nearest(&centroids, u)).collect();
            if next == labels {
                break;
            }
            labels = next;
        }

        debug!(
            k = centroids.len(),
            users = users.len(),
            iterations,
            "KMeans fitted"
        );

        Ok(Self {
            centroids,
            iterations,
        })
    }

    pub fn centroids(&self) -> &[TasteProfile] {
        &self.centroids
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl ClusterAssigner for KMeans {
    fn assign(&self, profile: &TasteProfile) -> Result<usize, CoreError> {
        if !profile.is_finite() {
            return Err(CoreError::data("taste profile contains a non-finite value"));
        }
        Ok(nearest(&self.centroids, profile))
    }

    fn cluster_count(&self) -> usize {
        self.centroids.len()
    }
}

/// Index of the closest centroid, ties to the lowest index
fn nearest(centroids: &[TasteProfile], point: &TasteProfile) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, c) in centroids.iter().enumerate() {
        let dist = c.distance_sq(point);
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best
}

fn mean(points: &[&TasteProfile]) -> TasteProfile {
    let n = points.len() as f64;
    let mut sum = [0.0; 3];
    for p in points {
        for (s, v) in sum.iter_mut().zip(p.as_array()) {
            *s += v;
        }
    }
    TasteProfile::from_array(sum.map(|s| s / n))
}

fn seed_centroids(users: &[TasteProfile], k: usize) -> Vec<TasteProfile> {
    let all: Vec<&TasteProfile> = users.iter().collect();
    let center = mean(&all);

    let first = users[nearest(users, &center)];
    let mut centroids = vec![first];

    while centroids.len() < k {
        // Farthest user from every chosen centroid; first index wins ties
        let mut pick = None;
        let mut pick_dist = 0.0;
        for u in users {
            let dist = centroids
                .iter()
                .map(|c| c.distance_sq(u))
                .fold(f64::INFINITY, f64::min);
            if dist > pick_dist {
                pick = Some(*u);
                pick_dist = dist;
            }
        }
        match pick {
            Some(p) => centroids.push(p),
            // Fewer distinct users than k
            None => break,
        }
    }

    centroids
}

fn recompute_centroids(
    users: &[TasteProfile],
    labels: &[usize],
    previous: &[TasteProfile],
) -> Vec<TasteProfile> {
    previous
        .iter()
        .enumerate()
        .map(|(idx, prev)| {
            let members: Vec<&TasteProfile> = users
                .iter()
                .zip(labels)
                .filter(|&(_, &l)| l == idx)
                .map(|(u, _)| u)
                .collect();
            if members.is_empty() {
                *prev
            } else {
                mean(&members)
            }
        })
        .collect()
}
