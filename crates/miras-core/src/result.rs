//! Output of a distribution run, shaped for the results display and the
//! action-packet renderer.

use serde::{Deserialize, Serialize};

use crate::fraction::Fraction;

/// One heir's computed share of the distributable estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEntry {
    pub heir_id: String,
    /// Heir's name, or the relation label when the name is empty.
    pub heir_name: String,
    pub relation: String,
    pub fraction: Fraction,
    /// 0–100, unrounded. Rounding is a rendering concern.
    pub percentage: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// An advisory legal or fiqh conflict surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Ids of the assets the flag concerns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<String>>,
}

/// A ranked remediation step. Lower priority sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: u32,
    pub title: String,
    pub description: String,
    /// Suggested message or email template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationResult {
    pub probate_estate_value: f64,
    pub non_probate_value: f64,
    #[serde(rename = "shariaShares")]
    pub shares: Vec<ShareEntry>,
    #[serde(rename = "stateFlags")]
    pub flags: Vec<Flag>,
    pub action_items: Vec<ActionItem>,
}

impl ComputationResult {
    /// Sum of every share's percentage.
    pub fn total_share_percentage(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage).sum()
    }

    pub fn flags_with(&self, severity: Severity) -> impl Iterator<Item = &Flag> {
        self.flags.iter().filter(move |f| f.severity == severity)
    }
}
