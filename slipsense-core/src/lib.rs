//! slipsense-core: Core types and text utilities for slip interpretation

pub mod namematch;
pub mod normalize;
pub mod plausibility;
pub mod similarity;
pub mod time;
pub mod types;

pub use namematch::{MatchGrade, NameMatchResult, match_candidate, normalize_person_name};
pub use normalize::fix_ocr_digits;
pub use plausibility::{MIN_KEYWORD_MATCHES, PlausibilityCheck, check_plausibility};
pub use similarity::similarity_ratio;
pub use time::bangkok_today;
pub use types::{
    CandidateName, ClassificationResult, ExtractedFields, NameCandidates, NameRole,
    RawRecognition, SlipExtractionResult, SourceConfidence, TxnType, TypeConfidence,
    UserIdentity,
};
