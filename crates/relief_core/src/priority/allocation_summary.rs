use schemars::JsonSchema;
use serde::Serialize;

use crate::model::{
    center::Center,
    need_site::NeedSite,
    resources::{ResourceKind, Resources},
};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCoverage {
    pub kind: ResourceKind,
    pub required: u32,
    pub available: u32,
    /// `available / required`, absent when nothing is required.
    pub coverage: Option<f64>,
}

impl ResourceCoverage {
    pub fn is_sufficient(&self) -> bool {
        self.available >= self.required
    }
}

/// Supplies on hand at all centers against supplies needed by all need sites.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub total_required: Resources,
    pub total_available: Resources,
    pub coverage: Vec<ResourceCoverage>,
}

impl AllocationSummary {
    pub fn new<'a>(
        centers: impl IntoIterator<Item = &'a Center>,
        need_sites: impl IntoIterator<Item = &'a NeedSite>,
    ) -> Self {
        let total_available: Resources = centers.into_iter().map(|center| center.resources).sum();
        let total_required: Resources = need_sites
            .into_iter()
            .map(|site| site.resources_needed)
            .sum();

        let coverage = ResourceKind::ALL
            .iter()
            .map(|&kind| {
                let required = total_required.get(kind);
                let available = total_available.get(kind);
                ResourceCoverage {
                    kind,
                    required,
                    available,
                    coverage: (required > 0).then(|| f64::from(available) / f64::from(required)),
                }
            })
            .collect();

        AllocationSummary {
            total_required,
            total_available,
            coverage,
        }
    }
}
