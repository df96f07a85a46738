//! Warning resolution, strictly in priority order.
//!
//! Only the first applicable rule fires. Missing amount outranks every
//! name-related warning and invalidates the slip outright.

use slipsense_core::types::{NameCandidates, TypeConfidence};

pub const WARN_NOT_A_SLIP: &str = "ไม่พบข้อมูลสลิป อาจไม่ใช่รูปสลิปโอนเงิน";
pub const WARN_NO_AMOUNT: &str = "ไม่พบจำนวนเงินในรูป กรุณากรอกข้อมูลเอง";
pub const WARN_NO_USER_NAME: &str = "ไม่พบชื่อผู้ใช้ในสลิป กรุณาเลือกประเภทเอง";
pub const WARN_NAME_MISMATCH: &str = "ไม่พบชื่อตรงกับผู้ใช้ กรุณาตรวจสอบประเภทอีกครั้ง";

/// What the warning chain decided for one slip.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningOutcome {
    pub warning: Option<String>,
    pub is_valid_slip: bool,
    /// When set, the suggested type is withheld from the caller.
    pub force_null_type: bool,
}

impl WarningOutcome {
    fn clean() -> Self {
        Self {
            warning: None,
            is_valid_slip: true,
            force_null_type: false,
        }
    }

    fn invalid(warning: &str) -> Self {
        Self {
            warning: Some(warning.to_string()),
            is_valid_slip: false,
            force_null_type: true,
        }
    }

    fn advisory(warning: &str) -> Self {
        Self {
            warning: Some(warning.to_string()),
            is_valid_slip: true,
            force_null_type: false,
        }
    }
}

/// Resolve the single warning for a slip that passed the plausibility filter.
pub fn resolve_warning(
    amount: Option<f64>,
    names: &NameCandidates,
    confidence: TypeConfidence,
) -> WarningOutcome {
    if amount.is_none() && names.is_empty() {
        return WarningOutcome::invalid(WARN_NOT_A_SLIP);
    }
    if amount.is_none() {
        return WarningOutcome::invalid(WARN_NO_AMOUNT);
    }
    match confidence {
        TypeConfidence::Uncertain => WarningOutcome::advisory(WARN_NO_USER_NAME),
        TypeConfidence::NameNoMatch => WarningOutcome::advisory(WARN_NAME_MISMATCH),
        _ => WarningOutcome::clean(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_names() -> NameCandidates {
        NameCandidates {
            receivers: vec!["วิชัย รักสงบ".into()],
            senders: vec![],
            general: vec![],
        }
    }

    #[test]
    fn test_no_amount_no_names_outranks_everything() {
        let out = resolve_warning(
            None,
            &NameCandidates::default(),
            TypeConfidence::Uncertain,
        );
        assert_eq!(out.warning.as_deref(), Some(WARN_NOT_A_SLIP));
        assert!(!out.is_valid_slip);
        assert!(out.force_null_type);
    }

    #[test]
    fn test_no_amount_with_names() {
        let out = resolve_warning(None, &with_names(), TypeConfidence::FullNameMatch);
        assert_eq!(out.warning.as_deref(), Some(WARN_NO_AMOUNT));
        assert!(!out.is_valid_slip);
        assert!(out.force_null_type);
    }

    #[test]
    fn test_uncertain_is_advisory_only() {
        let out = resolve_warning(Some(100.0), &with_names(), TypeConfidence::Uncertain);
        assert_eq!(out.warning.as_deref(), Some(WARN_NO_USER_NAME));
        assert!(out.is_valid_slip);
        assert!(!out.force_null_type);
    }

    #[test]
    fn test_name_mismatch_advisory() {
        let out = resolve_warning(Some(100.0), &with_names(), TypeConfidence::NameNoMatch);
        assert_eq!(out.warning.as_deref(), Some(WARN_NAME_MISMATCH));
        assert!(out.is_valid_slip);
    }

    #[test]
    fn test_clean_slip_carries_no_warning() {
        let out = resolve_warning(Some(100.0), &with_names(), TypeConfidence::FullNameMatch);
        assert_eq!(out, WarningOutcome::clean());
    }
}
