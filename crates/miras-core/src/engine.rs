//! The distribution entry point.

use tracing::debug;

use crate::estate::EstatePartition;
use crate::household::{AssetRecord, HeirRecord, PreferenceSet};
use crate::result::ComputationResult;
use crate::rules::{self, ILLINOIS_RULES, RuleContext};
use crate::shares::{LivingHeirs, compute_shares};

/// Compute shares, estate totals, flags, and action items for one household.
///
/// Pure and infallible: identical inputs always give an identical result, and
/// nothing is retained between calls. Asset values are assumed non-negative
/// and finite.
pub fn compute_distribution(
    heirs: &[HeirRecord],
    assets: &[AssetRecord],
    preferences: &PreferenceSet,
) -> ComputationResult {
    let estate = EstatePartition::of(assets);
    let living = LivingHeirs::from_roster(heirs);
    debug!(
        spouse = living.spouse.is_some(),
        parents = living.parents.len(),
        children = living.children.len(),
        siblings = living.siblings.len(),
        probate_value = estate.probate_value,
        non_probate_value = estate.non_probate_value,
        "computing distribution"
    );

    let shares = compute_shares(&living);
    let ctx = RuleContext {
        living: &living,
        estate: &estate,
        assets,
        preferences,
    };
    let findings = rules::evaluate(ILLINOIS_RULES, &ctx);
    debug!(
        shares = shares.len(),
        flags = findings.flags.len(),
        action_items = findings.action_items.len(),
        "distribution computed"
    );

    ComputationResult {
        probate_estate_value: estate.probate_value,
        non_probate_value: estate.non_probate_value,
        shares,
        flags: findings.flags,
        action_items: findings.action_items,
    }
}
