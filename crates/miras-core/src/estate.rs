//! Probate / non-probate partition of the estate.

use crate::household::AssetRecord;

/// The estate split into what passes under the will and what passes outside it.
///
/// Every asset lands in exactly one bucket; see [`AssetRecord::is_non_probate`].
#[derive(Debug, Clone, Default)]
pub struct EstatePartition<'a> {
    pub probate: Vec<&'a AssetRecord>,
    pub non_probate: Vec<&'a AssetRecord>,
    pub probate_value: f64,
    pub non_probate_value: f64,
}

impl<'a> EstatePartition<'a> {
    pub fn of(assets: &'a [AssetRecord]) -> Self {
        assets.iter().fold(Self::default(), |mut acc, asset| {
            if asset.is_non_probate() {
                acc.non_probate_value += asset.value;
                acc.non_probate.push(asset);
            } else {
                acc.probate_value += asset.value;
                acc.probate.push(asset);
            }
            acc
        })
    }

    pub fn total_value(&self) -> f64 {
        self.probate_value + self.non_probate_value
    }

    pub fn non_probate_ids(&self) -> Vec<String> {
        self.non_probate.iter().map(|a| a.id.clone()).collect()
    }
}
