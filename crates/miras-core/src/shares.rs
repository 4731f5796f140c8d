//! Sunni fixed-share and residuary calculation.
//!
//! Only the spouse, parents, and children of the decedent receive a modelled
//! share. Fixed shares go first:
//!
//! | Heir   | With living children | Without |
//! |--------|----------------------|---------|
//! | Spouse | 1/8                  | 1/4     |
//! | Parent | 1/6 each             | 1/3 each|
//!
//! Each parent's fraction is applied independently rather than split between
//! both parents. Children then divide whatever remains at two units per son
//! and one unit per daughter.
//!
//! Not modelled: grandparents, grandchildren through a predeceased child,
//! multiple wives, agnatic residuaries beyond children, awl, and radd.

use tracing::debug;

use crate::fraction::Fraction;
use crate::household::{HeirRecord, Relation, Sex};
use crate::result::ShareEntry;

/// Living heirs grouped by relation, each group in roster order.
#[derive(Debug, Clone, Default)]
pub struct LivingHeirs<'a> {
    pub spouse: Option<&'a HeirRecord>,
    pub parents: Vec<&'a HeirRecord>,
    pub children: Vec<&'a HeirRecord>,
    pub siblings: Vec<&'a HeirRecord>,
}

impl<'a> LivingHeirs<'a> {
    /// Group the living members of a roster. Deceased records are dropped.
    ///
    /// Only the first living spouse is kept.
    pub fn from_roster(heirs: &'a [HeirRecord]) -> Self {
        let mut living = Self::default();
        for heir in heirs.iter().filter(|h| h.alive) {
            match heir.relation {
                Relation::Spouse => {
                    if living.spouse.is_none() {
                        living.spouse = Some(heir);
                    }
                }
                Relation::Parent => living.parents.push(heir),
                Relation::Child => living.children.push(heir),
                Relation::Sibling => living.siblings.push(heir),
                Relation::Other => {}
            }
        }
        living
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Residuary weight: a son takes twice a daughter's portion.
///
/// A child of sex `other` is weighted as one unit.
fn residuary_units(sex: Sex) -> u32 {
    match sex {
        Sex::Male => 2,
        Sex::Female | Sex::Other => 1,
    }
}

fn display_name(heir: &HeirRecord, fallback: &str) -> String {
    if heir.name.trim().is_empty() {
        fallback.to_string()
    } else {
        heir.name.clone()
    }
}

fn fixed_entry(
    heir: &HeirRecord,
    relation: &str,
    fraction: Fraction,
    explanation: &str,
) -> ShareEntry {
    ShareEntry {
        heir_id: heir.id.clone(),
        heir_name: display_name(heir, relation),
        relation: relation.to_string(),
        fraction,
        percentage: fraction.to_percentage(),
        explanation: explanation.to_string(),
    }
}

/// Compute every living heir's share of the distributable estate.
///
/// Entries are ordered spouse, then parents, then children, each group in
/// roster order. An empty household yields no entries.
pub fn compute_shares(living: &LivingHeirs<'_>) -> Vec<ShareEntry> {
    let mut shares = Vec::new();
    let has_children = living.has_children();

    if let Some(spouse) = living.spouse {
        let entry = if has_children {
            fixed_entry(
                spouse,
                Relation::Spouse.label(),
                Fraction::ONE_EIGHTH,
                "Spouse receives 1/8 because children are present",
            )
        } else {
            fixed_entry(
                spouse,
                Relation::Spouse.label(),
                Fraction::ONE_QUARTER,
                "Spouse receives 1/4 because no children are present",
            )
        };
        shares.push(entry);
    }

    for parent in &living.parents {
        let entry = if has_children {
            fixed_entry(
                parent,
                Relation::Parent.label(),
                Fraction::ONE_SIXTH,
                "Parent receives 1/6 because children are present",
            )
        } else {
            fixed_entry(
                parent,
                Relation::Parent.label(),
                Fraction::ONE_THIRD,
                "Parent receives 1/3 because no children are present",
            )
        };
        shares.push(entry);
    }

    if has_children {
        let fixed_total: f64 = shares.iter().map(|s| s.fraction.to_f64()).sum();
        let remaining = 1.0 - fixed_total;
        shares.extend(residuary_shares(&living.children, remaining));
    }

    shares
}

/// Divide `remaining` among children at two units per son, one per daughter.
fn residuary_shares(children: &[&HeirRecord], remaining: f64) -> Vec<ShareEntry> {
    let total_units: u32 = children.iter().map(|c| residuary_units(c.sex)).sum();
    debug!(
        children = children.len(),
        total_units,
        remaining,
        "dividing residuary"
    );
    if total_units == 0 {
        return Vec::new();
    }

    children
        .iter()
        .map(|child| {
            let share =
                f64::from(residuary_units(child.sex)) / f64::from(total_units) * remaining;
            let (relation, explanation) = match child.sex {
                Sex::Male => ("Son", "Son receives double the share of daughters (2:1 ratio)"),
                Sex::Female => (
                    "Daughter",
                    "Daughter receives half the share of sons (1:2 ratio)",
                ),
                Sex::Other => (
                    "Child",
                    "Child receives a single residuary unit, as a daughter would",
                ),
            };
            ShareEntry {
                heir_id: child.id.clone(),
                heir_name: display_name(child, relation),
                relation: relation.to_string(),
                fraction: Fraction::from_thousandths(share),
                percentage: share * 100.0,
                explanation: explanation.to_string(),
            }
        })
        .collect()
}
