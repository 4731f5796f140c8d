//! Illinois estate-plan checks and ranked action items.
//!
//! Each [`Rule`] inspects the household, the partitioned estate, and the
//! testator's preferences, and may append flags and action items. Rules are
//! independent of one another. Once every rule has run, a general attorney
//! consultation is added if nothing else produced an action item, and the
//! items are stably sorted by priority so equal priorities keep rule order.

use tracing::trace;

use crate::estate::EstatePartition;
use crate::household::{AssetRecord, FiqhMode, Ownership, PreferenceSet};
use crate::result::{ActionItem, Flag, Severity};
use crate::shares::LivingHeirs;

/// Wasiyyah above this percentage needs the heirs' consent.
pub const WASIYYAH_CEILING_PERCENT: f64 = 33.33;

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub living: &'a LivingHeirs<'a>,
    pub estate: &'a EstatePartition<'a>,
    pub assets: &'a [AssetRecord],
    pub preferences: &'a PreferenceSet,
}

/// Flags and action items accumulated across a rule pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub flags: Vec<Flag>,
    pub action_items: Vec<ActionItem>,
}

impl Findings {
    fn flag(
        &mut self,
        severity: Severity,
        title: &str,
        description: &str,
        assets: Option<Vec<String>>,
    ) {
        self.flags.push(Flag {
            severity,
            title: title.to_string(),
            description: description.to_string(),
            assets,
        });
    }

    fn action(&mut self, priority: u32, title: &str, description: &str, script: Option<&str>) {
        self.action_items.push(ActionItem {
            priority,
            title: title.to_string(),
            description: description.to_string(),
            script: script.map(str::to_string),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Assets that pass outside the will.
    NonProbateAssets,
    /// Joint tenancy property alongside a living spouse.
    JointTenancyWithSpouse,
    /// Illinois spousal statutory share when spouse and children survive.
    SpousalStatutoryShare,
    /// Bequests to non-heirs above one third.
    WasiyyahCeiling,
    /// Shia fiqh selected but only Sunni rules are implemented.
    FiqhPassThrough,
}

/// The Illinois checklist, in evaluation order.
pub const ILLINOIS_RULES: &[Rule] = &[
    Rule::NonProbateAssets,
    Rule::JointTenancyWithSpouse,
    Rule::SpousalStatutoryShare,
    Rule::WasiyyahCeiling,
    Rule::FiqhPassThrough,
];

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NonProbateAssets => "non_probate_assets",
            Rule::JointTenancyWithSpouse => "joint_tenancy_with_spouse",
            Rule::SpousalStatutoryShare => "spousal_statutory_share",
            Rule::WasiyyahCeiling => "wasiyyah_ceiling",
            Rule::FiqhPassThrough => "fiqh_pass_through",
        }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>, out: &mut Findings) {
        match self {
            Rule::NonProbateAssets => {
                if ctx.estate.non_probate.is_empty() {
                    return;
                }
                out.flag(
                    Severity::Error,
                    "Non-probate assets detected",
                    "These assets will pass outside any will. Update beneficiary designations or name a Trust as beneficiary.",
                    Some(ctx.estate.non_probate_ids()),
                );
                out.action(
                    1,
                    "Update non-probate asset beneficiaries",
                    "Review and update beneficiary designations on retirement accounts, life insurance, and jointly-owned property.",
                    Some(
                        "Sample message to HR: \"I would like to update the beneficiary designation on my 401(k) account. Please send me the necessary forms.\"",
                    ),
                );
            }
            Rule::JointTenancyWithSpouse => {
                if ctx.living.spouse.is_none() {
                    return;
                }
                let joint: Vec<String> = ctx
                    .assets
                    .iter()
                    .filter(|a| a.ownership == Ownership::JointTenancy)
                    .map(|a| a.id.clone())
                    .collect();
                if joint.is_empty() {
                    return;
                }
                out.flag(
                    Severity::Warning,
                    "Joint tenancy property detected",
                    "Property in joint tenancy passes directly to the surviving joint owner, bypassing your will. Consider retitling to trust.",
                    Some(joint),
                );
            }
            Rule::SpousalStatutoryShare => {
                if ctx.living.spouse.is_none() || !ctx.living.has_children() {
                    return;
                }
                out.flag(
                    Severity::Warning,
                    "Illinois spousal statutory share",
                    "Illinois law allows a surviving spouse to claim approximately 1/3 of the estate. This may override your will provisions. Consult an attorney.",
                    None,
                );
                out.action(
                    2,
                    "Schedule attorney consultation",
                    "Discuss the Illinois spousal elective share and how it affects your estate plan.",
                    Some(
                        "Email template: \"I am planning my estate and would like to discuss the Illinois spousal elective share provisions. I have prepared an Action Packet. Can we schedule a one-hour consultation?\"",
                    ),
                );
            }
            Rule::WasiyyahCeiling => {
                if ctx.preferences.wasiyyah_percent <= WASIYYAH_CEILING_PERCENT {
                    return;
                }
                out.flag(
                    Severity::Error,
                    "Wasiyyah exceeds 33% limit",
                    "Under Sunni fiqh, bequests to non-heirs (wasiyyah) are typically limited to 1/3 of the estate. Amounts over this may require heirs' consent.",
                    None,
                );
                out.action(
                    1,
                    "Reduce wasiyyah or obtain heirs' consent",
                    "Either reduce your wasiyyah to 33% or less, or obtain written consent from all heirs for the higher amount.",
                    None,
                );
            }
            Rule::FiqhPassThrough => {
                if ctx.preferences.fiqh_mode != FiqhMode::Shia {
                    return;
                }
                out.flag(
                    Severity::Info,
                    "Shia fiqh not yet supported",
                    "Shares were computed using Sunni inheritance rules. Shia distribution differs for several heir classes; have a qualified scholar review these results.",
                    None,
                );
            }
        }
    }
}

fn fallback_consultation(out: &mut Findings) {
    out.action(
        3,
        "Initial attorney consultation",
        "Even with no conflicts detected, consult an Illinois estate attorney to review your plan.",
        Some(
            "Bring your Action Packet and asset documentation to discuss will preparation and trust options.",
        ),
    );
}

/// Run `rules` in order, add the fallback consultation when no rule produced
/// an action item, and stably sort the items by priority.
pub fn evaluate(rules: &[Rule], ctx: &RuleContext<'_>) -> Findings {
    let mut findings = Findings::default();
    for rule in rules {
        let (flags, items) = (findings.flags.len(), findings.action_items.len());
        rule.evaluate(ctx, &mut findings);
        trace!(
            rule = rule.name(),
            flags = findings.flags.len() - flags,
            action_items = findings.action_items.len() - items,
            "rule evaluated"
        );
    }

    if findings.action_items.is_empty() {
        fallback_consultation(&mut findings);
    }

    // Stable: equal priorities keep rule order.
    findings.action_items.sort_by_key(|a| a.priority);
    findings
}
