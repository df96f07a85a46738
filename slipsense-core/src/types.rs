//! Transient data model for slip interpretation.
//!
//! Nothing here persists; the surrounding record layer stores the final
//! user-confirmed fields only.

use serde::{Deserialize, Serialize};

use crate::namematch::MatchGrade;

/// Raw OCR output for one slip image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecognition {
    pub text: String,
    /// None when the OCR adapter reports nothing about itself.
    pub source_confidence: Option<SourceConfidence>,
}

impl RawRecognition {
    pub fn available(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_confidence: Some(SourceConfidence::Available),
        }
    }

    /// OCR timed out or the transport failed. The plausibility filter
    /// rejects the empty text naturally; this is never a hard error.
    pub fn unavailable() -> Self {
        Self {
            text: String::new(),
            source_confidence: Some(SourceConfidence::Unavailable),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceConfidence {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "unavailable")]
    Unavailable,
}

/// The textual role a candidate name was extracted under, from its cue phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameRole {
    #[serde(rename = "receiver")]
    Receiver,
    #[serde(rename = "sender")]
    Sender,
    #[serde(rename = "unscoped")]
    Unscoped,
}

/// One cleaned name candidate found in the slip text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateName {
    pub text: String,
    pub role: NameRole,
}

/// Deduplicated name candidates per role, first-seen order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameCandidates {
    pub receivers: Vec<String>,
    pub senders: Vec<String>,
    pub general: Vec<String>,
}

impl NameCandidates {
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty() && self.senders.is_empty() && self.general.is_empty()
    }

    /// All candidates in the order the classifier pools them:
    /// receivers, then senders, then unscoped.
    pub fn in_role_order(&self) -> Vec<CandidateName> {
        let mut out = Vec::new();
        for r in &self.receivers {
            out.push(CandidateName { text: r.clone(), role: NameRole::Receiver });
        }
        for s in &self.senders {
            out.push(CandidateName { text: s.clone(), role: NameRole::Sender });
        }
        for g in &self.general {
            out.push(CandidateName { text: g.clone(), role: NameRole::Unscoped });
        }
        out
    }
}

/// The requesting user's registered name. Both fields may be empty for
/// anonymous callers, in which case name matching never succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub first_name: String,
    pub last_name: String,
}

impl UserIdentity {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new("", "")
    }

    pub fn is_anonymous(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Suggested transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnType {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

/// Graded confidence of the suggested transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeConfidence {
    /// Classification never ran (plausibility filter rejected the text).
    #[serde(rename = "unknown")]
    Unknown,
    /// The user's full name appears on the slip.
    #[serde(rename = "full_name_match")]
    FullNameMatch,
    /// Only a shortened form of the user's name appears.
    #[serde(rename = "abbreviated_name_match")]
    AbbreviatedNameMatch,
    /// Legacy wire label: names were found, none matched the user.
    /// Kept in the vocabulary for callers; the current classifier labels
    /// every no-match run `uncertain`.
    #[serde(rename = "name_no_match")]
    NameNoMatch,
    /// No name matched the user; expense assumed by default.
    #[serde(rename = "uncertain")]
    Uncertain,
}

impl TypeConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeConfidence::Unknown => "unknown",
            TypeConfidence::FullNameMatch => "full_name_match",
            TypeConfidence::AbbreviatedNameMatch => "abbreviated_name_match",
            TypeConfidence::NameNoMatch => "name_no_match",
            TypeConfidence::Uncertain => "uncertain",
        }
    }
}

/// Output of the name-direction classifier, before warnings are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub suggested_type: Option<TxnType>,
    pub confidence: TypeConfidence,
    pub warning: Option<String>,
}

/// Everything the pipeline extracted, with explicit nullability for every
/// field it could not determine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub account_name: String,
    pub receiver_name: String,
    pub sender_name: String,
    pub transaction_title: Option<String>,
    pub amount: Option<f64>,
    /// ISO date; defaults to "today" (Asia/Bangkok) when none was found.
    pub date: String,
    /// 24-hour HH:MM.
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub txn_type: Option<TxnType>,
    pub type_confidence: TypeConfidence,
    pub type_warning: Option<String>,
}

/// The final structured response for one slip image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipExtractionResult {
    pub raw_text: String,
    /// Plausibility keyword hits, reported for caller-side tuning.
    pub keyword_matches: usize,
    pub found_names: Vec<String>,
    pub found_receivers: Vec<String>,
    pub found_senders: Vec<String>,
    pub user_fullname: Option<String>,
    #[serde(rename = "match")]
    pub match_status: Option<bool>,
    pub match_detail: Option<String>,
    pub match_confidence: Option<MatchGrade>,
    pub is_valid_slip: bool,
    pub extracted: ExtractedFields,
}
