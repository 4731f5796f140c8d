//! Household roster, estate assets, and testator preferences.
//!
//! These are the input records supplied by the form layer. Field names follow
//! the session document's camelCase wire shape.

use serde::{Deserialize, Serialize};

/// How a relative is related to the decedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Spouse,
    Parent,
    Child,
    Sibling,
    Other,
}

impl Relation {
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Spouse => "Spouse",
            Relation::Parent => "Parent",
            Relation::Child => "Child",
            Relation::Sibling => "Sibling",
            Relation::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// One living or deceased relative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeirRecord {
    pub id: String,
    pub relation: Relation,
    #[serde(default)]
    pub name: String,
    pub sex: Sex,
    pub alive: bool,
    /// Only meaningful for children.
    #[serde(default)]
    pub adopted: bool,
    /// Informational marker that a predeceased heir left children of their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deceased_children: Option<bool>,
}

impl HeirRecord {
    pub fn new(id: impl Into<String>, relation: Relation, sex: Sex) -> Self {
        Self {
            id: id.into(),
            relation,
            name: String::new(),
            sex,
            alive: true,
            adopted: false,
            deceased_children: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn deceased(mut self) -> Self {
        self.alive = false;
        self
    }

    pub fn adopted(mut self) -> Self {
        self.adopted = true;
        self
    }
}

/// Asset category. Descriptive only; it never affects share math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    RealEstate,
    BankAccount,
    Retirement,
    LifeInsurance,
    PersonalProperty,
    BusinessInterest,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Sole,
    JointTenancy,
    TenancyInCommon,
    Trust,
}

/// A named beneficiary designation on an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub name: String,
    pub percent: f64,
}

/// One item of the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub category: AssetCategory,
    /// Non-negative, finite. Not validated here.
    pub value: f64,
    #[serde(rename = "ownerType")]
    pub ownership: Ownership,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    #[serde(default)]
    pub acquired_during_marriage: bool,
    #[serde(default)]
    pub notes: String,
}

impl AssetRecord {
    pub fn new(
        id: impl Into<String>,
        category: AssetCategory,
        value: f64,
        ownership: Ownership,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            value,
            ownership,
            beneficiaries: Vec::new(),
            acquired_during_marriage: false,
            notes: String::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_beneficiary(mut self, name: impl Into<String>, percent: f64) -> Self {
        self.beneficiaries.push(Beneficiary {
            name: name.into(),
            percent,
        });
        self
    }

    /// Passes outside the will: anything not solely owned, or carrying a
    /// beneficiary designation.
    pub fn is_non_probate(&self) -> bool {
        self.ownership != Ownership::Sole || !self.beneficiaries.is_empty()
    }
}

/// School of jurisprudence the testator follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiqhMode {
    #[default]
    Sunni,
    /// Accepted, but computed with the Sunni rules and flagged as such.
    Shia,
}

/// Testator elections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    /// Bequest to non-heirs, as a percentage of the distributable estate.
    #[serde(default)]
    pub wasiyyah_percent: f64,
    #[serde(default)]
    pub charity_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charity_amount: Option<f64>,
    #[serde(default)]
    pub executor: String,
    #[serde(default)]
    pub guardian: String,
    #[serde(default)]
    pub fiqh_mode: FiqhMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_without_beneficiaries_is_probate() {
        let home = AssetRecord::new("a1", AssetCategory::RealEstate, 450_000.0, Ownership::Sole);
        assert!(!home.is_non_probate());
    }

    #[test]
    fn beneficiary_designation_makes_non_probate() {
        let k401 = AssetRecord::new("a2", AssetCategory::Retirement, 280_000.0, Ownership::Sole)
            .with_beneficiary("Fatima Khan", 100.0);
        assert!(k401.is_non_probate());
    }

    #[test]
    fn any_shared_ownership_is_non_probate() {
        for ownership in [
            Ownership::JointTenancy,
            Ownership::TenancyInCommon,
            Ownership::Trust,
        ] {
            let a = AssetRecord::new("a", AssetCategory::Other, 1.0, ownership);
            assert!(a.is_non_probate(), "{ownership:?} should be non-probate");
        }
    }

    #[test]
    fn asset_wire_shape() {
        let json = r#"{
            "id": "a1",
            "name": "Primary Home",
            "type": "real_estate",
            "value": 450000,
            "ownerType": "joint_tenancy",
            "beneficiaries": [],
            "acquiredDuringMarriage": true,
            "notes": "Family residence"
        }"#;
        let asset: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(asset.category, AssetCategory::RealEstate);
        assert_eq!(asset.ownership, Ownership::JointTenancy);
        assert!(asset.acquired_during_marriage);
        assert_eq!(asset.value, 450_000.0);
    }

    #[test]
    fn preferences_default_to_sunni() {
        let prefs: PreferenceSet = serde_json::from_str(r#"{"wasiyyahPercent": 10}"#).unwrap();
        assert_eq!(prefs.fiqh_mode, FiqhMode::Sunni);
        assert_eq!(prefs.wasiyyah_percent, 10.0);
        assert_eq!(prefs.charity_amount, None);
    }
}
