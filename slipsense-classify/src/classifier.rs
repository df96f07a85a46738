//! Income/expense decision from name-direction evidence.
//!
//! The slip's names are matched against the user in role order (receivers,
//! then senders, then unscoped). A full-name hit anywhere means money came
//! TO the user: income. A weaker hit still proves the user appears on the
//! slip, but not which side, so the safer default is expense.

use slipsense_core::namematch::{NameMatchResult, match_candidate};
use slipsense_core::types::{CandidateName, NameCandidates, TxnType, TypeConfidence, UserIdentity};

/// Classifier verdict before warnings are attached.
#[derive(Debug, Clone)]
pub struct Classification {
    pub suggested_type: TxnType,
    pub confidence: TypeConfidence,
    /// Best guess at the counterparty account holder.
    pub account_name: String,
    /// Strongest matching candidate, when any matched.
    pub best_match: Option<(CandidateName, NameMatchResult)>,
}

/// Classify a slip's direction for `user` given its extracted names.
pub fn classify(names: &NameCandidates, user: &UserIdentity) -> Classification {
    let pool = names.in_role_order();

    if user.is_anonymous() {
        return Classification {
            suggested_type: TxnType::Expense,
            confidence: TypeConfidence::Uncertain,
            account_name: fallback_account(names),
            best_match: None,
        };
    }

    let results: Vec<(CandidateName, NameMatchResult)> = pool
        .iter()
        .map(|c| {
            (
                c.clone(),
                match_candidate(&c.text, &user.first_name, &user.last_name),
            )
        })
        .collect();

    let best_match = results
        .iter()
        .filter(|(_, r)| r.is_match)
        .min_by_key(|(_, r)| r.grade.priority())
        .cloned();

    let any_full = results.iter().any(|(_, r)| r.is_match && r.is_full_name);
    let any_match = best_match.is_some();

    let first_non_matching = results
        .iter()
        .find(|(_, r)| !r.is_match)
        .map(|(c, _)| c.text.clone());

    if any_full {
        // The user is named in full; the counterparty is whichever candidate
        // did not match, or nobody (self-transfer style slips).
        Classification {
            suggested_type: TxnType::Income,
            confidence: TypeConfidence::FullNameMatch,
            account_name: first_non_matching.unwrap_or_else(|| user.full_name()),
            best_match,
        }
    } else if any_match {
        Classification {
            suggested_type: TxnType::Expense,
            confidence: TypeConfidence::AbbreviatedNameMatch,
            account_name: first_non_matching
                .or_else(|| names.receivers.first().cloned())
                .unwrap_or_default(),
            best_match,
        }
    } else {
        Classification {
            suggested_type: TxnType::Expense,
            confidence: TypeConfidence::Uncertain,
            account_name: fallback_account(names),
            best_match: None,
        }
    }
}

/// With no match evidence the sender is the most useful account to surface.
fn fallback_account(names: &NameCandidates) -> String {
    names
        .senders
        .first()
        .or_else(|| names.receivers.first())
        .or_else(|| names.general.first())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipsense_core::namematch::MatchGrade;

    fn user() -> UserIdentity {
        UserIdentity::new("สมชาย", "ใจดี")
    }

    fn names(receivers: &[&str], senders: &[&str], general: &[&str]) -> NameCandidates {
        NameCandidates {
            receivers: receivers.iter().map(|s| s.to_string()).collect(),
            senders: senders.iter().map(|s| s.to_string()).collect(),
            general: general.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_full_name_match_is_income() {
        let c = classify(&names(&["สมชาย ใจดี"], &["วิชัย รักสงบ"], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Income);
        assert_eq!(c.confidence, TypeConfidence::FullNameMatch);
        assert_eq!(c.account_name, "วิชัย รักสงบ");
        let (_, best) = c.best_match.unwrap();
        assert_eq!(best.grade, MatchGrade::Full);
    }

    #[test]
    fn test_full_match_with_no_counterparty_uses_user_name() {
        let c = classify(&names(&["สมชาย ใจดี"], &[], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Income);
        assert_eq!(c.account_name, "สมชาย ใจดี");
    }

    #[test]
    fn test_abbreviated_match_is_expense() {
        let c = classify(&names(&["วิชัย รักสงบ"], &["สมชาย ใ."], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Expense);
        assert_eq!(c.confidence, TypeConfidence::AbbreviatedNameMatch);
        assert_eq!(c.account_name, "วิชัย รักสงบ");
        let (_, best) = c.best_match.unwrap();
        assert_eq!(best.grade, MatchGrade::Abbreviated);
    }

    #[test]
    fn test_no_match_is_uncertain_expense() {
        let c = classify(&names(&["วิชัย รักสงบ"], &["มานี มีนา"], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Expense);
        assert_eq!(c.confidence, TypeConfidence::Uncertain);
        // Sender is preferred for the account guess here.
        assert_eq!(c.account_name, "มานี มีนา");
        assert!(c.best_match.is_none());
    }

    #[test]
    fn test_no_names_at_all() {
        let c = classify(&names(&[], &[], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Expense);
        assert_eq!(c.confidence, TypeConfidence::Uncertain);
        assert_eq!(c.account_name, "");
    }

    #[test]
    fn test_anonymous_user_never_matches() {
        let c = classify(
            &names(&["สมชาย ใจดี"], &[], &[]),
            &UserIdentity::anonymous(),
        );
        assert_eq!(c.confidence, TypeConfidence::Uncertain);
        assert!(c.best_match.is_none());
    }

    #[test]
    fn test_full_beats_abbreviated_across_roles() {
        // Receiver abbreviates the user, sender names them in full.
        let c = classify(&names(&["สมชาย ใ."], &["สมชาย ใจดี"], &[]), &user());
        assert_eq!(c.suggested_type, TxnType::Income);
        assert_eq!(c.confidence, TypeConfidence::FullNameMatch);
        let (_, best) = c.best_match.unwrap();
        assert_eq!(best.grade, MatchGrade::Full);
    }
}
