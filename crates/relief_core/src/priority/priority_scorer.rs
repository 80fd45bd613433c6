use tracing::{debug, info};

use crate::{
    constants::PRIORITY_SCORE_DECIMALS,
    error::PriorityError,
    model::need_site::NeedSite,
    utils::rounding::round_to_decimals,
};

use super::priority_weights::PriorityWeights;

/// Ranks need sites by a weighted blend of severity, affected population and access difficulty.
///
/// Population is normalized against the largest population of the ranked set, so scores are
/// only comparable within a single pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    pub fn new(weights: PriorityWeights) -> Self {
        PriorityScorer { weights }
    }

    pub fn score(&self, site: &NeedSite, max_people_affected: u32) -> f64 {
        let normalized_people = if max_people_affected > 0 {
            f64::from(site.people_affected) / f64::from(max_people_affected)
        } else {
            0.0
        };

        let score = self.weights.severity() * site.severity.normalized()
            + self.weights.people() * normalized_people
            + self.weights.access() * f64::from(site.access_difficulty.flag());

        round_to_decimals(score, PRIORITY_SCORE_DECIMALS).clamp(0.0, 1.0)
    }

    /// Scores every site and returns them sorted by descending score.
    ///
    /// Sites with equal scores keep their input order.
    pub fn rank(&self, mut sites: Vec<NeedSite>) -> Result<Vec<NeedSite>, PriorityError> {
        let max_people_affected = sites
            .iter()
            .map(|site| site.people_affected)
            .max()
            .ok_or(PriorityError::EmptyInput)?;

        for site in sites.iter_mut() {
            site.priority_score = self.score(site, max_people_affected);
            debug!(site = %site.id, score = site.priority_score, "scored need site");
        }

        sites.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

        info!(
            sites = sites.len(),
            max_people_affected, "computed need site priorities"
        );

        Ok(sites)
    }
}
