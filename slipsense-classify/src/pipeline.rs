//! End-to-end interpretation of one recognized slip.
//!
//! Plausibility filter first, with a short-circuit that skips extraction
//! entirely. The filter runs on the raw text; everything downstream sees
//! the digit-corrected text.

use anyhow::Result;
use chrono::NaiveDate;
use slipsense_core::namematch::MatchGrade;
use slipsense_core::normalize::fix_ocr_digits;
use slipsense_core::plausibility::check_plausibility;
use slipsense_core::types::{
    ClassificationResult, ExtractedFields, RawRecognition, SlipExtractionResult, TypeConfidence,
    UserIdentity,
};
use slipsense_extract::{extract_amount, extract_date, extract_names, extract_time, extract_title};

use crate::classifier::classify;
use crate::warnings::{WARN_NOT_A_SLIP, resolve_warning};

/// Interpret one OCR run for `user`. `today` anchors the date fallback and
/// is injected by the caller (Asia/Bangkok in production).
pub fn interpret_slip(
    raw: &RawRecognition,
    user: &UserIdentity,
    today: NaiveDate,
) -> Result<SlipExtractionResult> {
    let check = check_plausibility(&raw.text);
    if !check.is_plausible {
        return Ok(rejected_result(&raw.text, check.keyword_matches, today));
    }

    let text = fix_ocr_digits(&raw.text);
    let names = extract_names(&text)?;
    let amount = extract_amount(&text)?;
    let date = extract_date(&text)?;
    let time = extract_time(&text)?;
    let title = extract_title(&text)?;

    let classification = classify(&names, user);
    let outcome = resolve_warning(amount, &names, classification.confidence);

    let (user_fullname, match_status, match_detail, match_confidence) = if user.is_anonymous() {
        (None, None, None, None)
    } else if let Some((_, result)) = &classification.best_match {
        (
            Some(user.full_name()),
            Some(true),
            Some(result.detail.clone()),
            Some(result.grade),
        )
    } else {
        (
            Some(user.full_name()),
            Some(false),
            Some(format!("ไม่พบชื่อตรงกับผู้ใช้ ({})", user.full_name())),
            Some(MatchGrade::NoMatch),
        )
    };

    let verdict = ClassificationResult {
        suggested_type: if outcome.force_null_type {
            None
        } else {
            Some(classification.suggested_type)
        },
        confidence: classification.confidence,
        warning: outcome.warning,
    };

    Ok(SlipExtractionResult {
        raw_text: text,
        keyword_matches: check.keyword_matches,
        found_names: names
            .in_role_order()
            .into_iter()
            .map(|c| c.text)
            .collect(),
        found_receivers: names.receivers.clone(),
        found_senders: names.senders.clone(),
        user_fullname,
        match_status,
        match_detail,
        match_confidence,
        is_valid_slip: outcome.is_valid_slip,
        extracted: ExtractedFields {
            account_name: classification.account_name,
            receiver_name: names.receivers.first().cloned().unwrap_or_default(),
            sender_name: names.senders.first().cloned().unwrap_or_default(),
            transaction_title: title,
            amount,
            date: date.unwrap_or(today).format("%Y-%m-%d").to_string(),
            time,
            txn_type: verdict.suggested_type,
            type_confidence: verdict.confidence,
            type_warning: verdict.warning,
        },
    })
}

/// Result shape for text the plausibility filter rejected. No extraction
/// ran, so every field is its explicit "not determined" value.
fn rejected_result(raw_text: &str, keyword_matches: usize, today: NaiveDate) -> SlipExtractionResult {
    SlipExtractionResult {
        raw_text: raw_text.to_string(),
        keyword_matches,
        found_names: Vec::new(),
        found_receivers: Vec::new(),
        found_senders: Vec::new(),
        user_fullname: None,
        match_status: None,
        match_detail: None,
        match_confidence: None,
        is_valid_slip: false,
        extracted: ExtractedFields {
            account_name: String::new(),
            receiver_name: String::new(),
            sender_name: String::new(),
            transaction_title: None,
            amount: None,
            date: today.format("%Y-%m-%d").to_string(),
            time: None,
            txn_type: None,
            type_confidence: TypeConfidence::Unknown,
            type_warning: Some(WARN_NOT_A_SLIP.to_string()),
        },
    }
}
