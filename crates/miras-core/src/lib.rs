//! Sunni inheritance share computation with an Illinois estate-plan checklist.

pub mod engine;
pub mod error;
pub mod estate;
pub mod fraction;
pub mod household;
pub mod result;
pub mod rules;
pub mod session;
pub mod shares;

pub use engine::compute_distribution;
pub use error::MirasError;
pub use estate::EstatePartition;
pub use fraction::Fraction;
pub use household::{
    AssetCategory, AssetRecord, Beneficiary, FiqhMode, HeirRecord, Ownership, PreferenceSet,
    Relation, Sex,
};
pub use result::{ActionItem, ComputationResult, Flag, Severity, ShareEntry};
pub use rules::{ILLINOIS_RULES, Rule, WASIYYAH_CEILING_PERCENT};
pub use session::{Decedent, RelationToUser, Session};
pub use shares::{LivingHeirs, compute_shares};
