//! Commissions module - the split model that divides one commission amount
//! among beneficiaries.

mod commissions_errors;
mod commissions_model;

#[cfg(test)]
mod commissions_model_tests;

// Re-export the public interface
pub use commissions_errors::SplitError;
pub use commissions_model::{
    add_beneficiary, default_splits, is_valid, normalize_for_persistence, remove_beneficiary,
    set_by_percentage, set_by_value, validate_for_save, BeneficiaryKind, CommissionSplit,
    SplitPolicy,
};
