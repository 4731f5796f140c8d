//! The session document exchanged with the form layer.
//!
//! A [`Session`] bundles the decedent, household, assets, and preferences the
//! wizard collected, together with the last computed result. The core treats
//! it as immutable input: [`Session::with_computed`] returns a new session
//! rather than updating in place.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::compute_distribution;
use crate::error::MirasError;
use crate::household::{
    AssetCategory, AssetRecord, HeirRecord, Ownership, PreferenceSet, Relation, Sex,
};
use crate::result::ComputationResult;

/// The only jurisdiction with a legal checklist.
pub const CHECKLIST_JURISDICTION: &str = "IL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationToUser {
    #[default]
    #[serde(rename = "self")]
    Myself,
    Spouse,
    Executor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decedent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relation_to_user: RelationToUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    /// Two-letter US state code.
    #[serde(default = "default_state")]
    pub state: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub decedent: Decedent,
    #[serde(default)]
    pub family: Vec<HeirRecord>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub preferences: PreferenceSet,
    #[serde(default)]
    pub computed: ComputationResult,
    #[serde(default)]
    pub disclaimer_accepted: bool,
}

fn default_state() -> String {
    CHECKLIST_JURISDICTION.to_string()
}

impl Session {
    /// An empty Illinois session.
    pub fn new(session_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            session_id: session_id.into(),
            state: default_state(),
            date,
            decedent: Decedent::default(),
            family: Vec::new(),
            assets: Vec::new(),
            preferences: PreferenceSet::default(),
            computed: ComputationResult::default(),
            disclaimer_accepted: false,
        }
    }

    /// The demonstration household: a wife, a son, and a daughter, with a
    /// home, a 401(k) naming the wife, and a savings account.
    pub fn demo(date: NaiveDate) -> Self {
        let mut session = Self::new("demo", date);
        session.decedent.name = "Ahmad Khan".into();
        session.family = vec![
            HeirRecord::new("spouse-1", Relation::Spouse, Sex::Female).named("Fatima Khan"),
            HeirRecord::new("child-1", Relation::Child, Sex::Male).named("Hassan Khan"),
            HeirRecord::new("child-2", Relation::Child, Sex::Female).named("Aisha Khan"),
        ];

        let mut home =
            AssetRecord::new("asset-1", AssetCategory::RealEstate, 450_000.0, Ownership::Sole)
                .named("Primary Home");
        home.acquired_during_marriage = true;
        home.notes = "Family residence".into();

        let mut retirement =
            AssetRecord::new("asset-2", AssetCategory::Retirement, 280_000.0, Ownership::Sole)
                .named("401(k) Account")
                .with_beneficiary("Fatima Khan", 100.0);
        retirement.acquired_during_marriage = true;
        retirement.notes = "Employer retirement account".into();

        let mut savings =
            AssetRecord::new("asset-3", AssetCategory::BankAccount, 45_000.0, Ownership::Sole)
                .named("Savings Account");
        savings.acquired_during_marriage = true;
        savings.notes = "Emergency fund".into();

        session.assets = vec![home, retirement, savings];
        session.preferences = PreferenceSet {
            wasiyyah_percent: 10.0,
            executor: "Fatima Khan".into(),
            guardian: "Uncle Ibrahim".into(),
            ..PreferenceSet::default()
        };
        session.disclaimer_accepted = true;
        session
    }

    pub fn from_json(json: &str) -> Result<Self, MirasError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, MirasError> {
        let json = std::fs::read_to_string(path).map_err(|source| MirasError::SessionIo {
            path: path.to_path_buf(),
            source,
        })?;
        let session = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            session_id = %session.session_id,
            heirs = session.family.len(),
            assets = session.assets.len(),
            "loaded session"
        );
        Ok(session)
    }

    pub fn to_json_pretty(&self) -> Result<String, MirasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the distribution on this session's inputs.
    pub fn compute(&self) -> ComputationResult {
        compute_distribution(&self.family, &self.assets, &self.preferences)
    }

    /// A copy of this session carrying a freshly computed result.
    pub fn with_computed(&self) -> Self {
        Self {
            computed: self.compute(),
            ..self.clone()
        }
    }

    /// Whether the Illinois checklist applies. Other states still get shares.
    pub fn has_legal_checklist(&self) -> bool {
        self.state.eq_ignore_ascii_case(CHECKLIST_JURISDICTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn new_session_defaults() {
        let s = Session::new("abc", date());
        assert_eq!(s.state, "IL");
        assert!(s.has_legal_checklist());
        assert_eq!(s.preferences.wasiyyah_percent, 0.0);
        assert!(s.computed.shares.is_empty());
    }

    #[test]
    fn other_states_have_no_checklist() {
        let mut s = Session::new("abc", date());
        s.state = "WI".into();
        assert!(!s.has_legal_checklist());
        s.state = "il".into();
        assert!(s.has_legal_checklist());
    }

    #[test]
    fn demo_household_totals() {
        let result = Session::demo(date()).compute();
        assert_eq!(result.probate_estate_value, 495_000.0);
        assert_eq!(result.non_probate_value, 280_000.0);
        assert_eq!(result.shares.len(), 3);
    }

    #[test]
    fn with_computed_leaves_original_untouched() {
        let s = Session::demo(date());
        let updated = s.with_computed();
        assert!(s.computed.shares.is_empty());
        assert_eq!(updated.computed, s.compute());
        assert_eq!(updated.family, s.family);
    }

    #[test]
    fn parses_wizard_json() {
        let json = r#"{
            "sessionId": "5f0c",
            "state": "IL",
            "date": "2026-03-01",
            "decedent": { "name": "Ahmad Khan", "relationToUser": "self" },
            "family": [
                { "id": "f1", "relation": "spouse", "name": "Fatima", "sex": "female", "alive": true, "adopted": false },
                { "id": "f2", "relation": "child", "name": "", "sex": "male", "alive": true }
            ],
            "assets": [],
            "preferences": {
                "wasiyyahPercent": 5, "charityPercent": 0, "executor": "", "guardian": "", "fiqhMode": "shia"
            },
            "disclaimerAccepted": true
        }"#;
        let s = Session::from_json(json).unwrap();
        assert_eq!(s.decedent.relation_to_user, RelationToUser::Myself);
        assert_eq!(s.family.len(), 2);
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(s.preferences.fiqh_mode, crate::FiqhMode::Shia);
        assert!(s.disclaimer_accepted);
    }

    #[test]
    fn json_roundtrip_preserves_computed() {
        let s = Session::demo(date()).with_computed();
        let parsed = Session::from_json(&s.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.computed.shares[0].fraction.to_string(), "1/8");
        assert_eq!(parsed.computed.action_items, s.computed.action_items);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = Session::demo(date()).to_json_pretty().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let s = Session::load(file.path()).unwrap();
        assert_eq!(s.decedent.name, "Ahmad Khan");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Session::load(&path).unwrap_err();
        assert!(matches!(err, MirasError::SessionIo { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn out_of_range_share_fraction_rejected() {
        let mut value = serde_json::to_value(Session::demo(date()).with_computed()).unwrap();
        value["computed"]["shariaShares"][0]["fraction"] = "1/-9223372036854775808".into();
        let err = Session::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, MirasError::SessionJson(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Session::from_json("{ not json"),
            Err(MirasError::SessionJson(_))
        ));
    }
}
