use anyhow::{Context, Result, bail};
use base64::Engine;
use serde::{Deserialize, Serialize};
use slipsense_core::types::RawRecognition;
use std::path::Path;
use std::time::Duration;

use crate::config::OcrSection;

#[derive(Serialize)]
struct OcrRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    languages: &'a [String],
    /// Base64-encoded image bytes.
    image: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    text: String,
}

/// Run OCR on an image file. Never fails: any transport or decode problem
/// degrades to an unavailable recognition and the pipeline still answers.
pub async fn recognize_image(cfg: &OcrSection, image_path: &Path) -> RawRecognition {
    match try_recognize(cfg, image_path).await {
        Ok(text) => RawRecognition::available(text),
        Err(e) => {
            eprintln!("ocr request failed: {e:#}");
            RawRecognition::unavailable()
        }
    }
}

async fn try_recognize(cfg: &OcrSection, image_path: &Path) -> Result<String> {
    let bytes = std::fs::read(image_path)
        .with_context(|| format!("read {}", image_path.display()))?;
    let image = base64::engine::general_purpose::STANDARD.encode(&bytes);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("build http client")?;

    let url = format!("{}/api/ocr", cfg.base_url.trim_end_matches('/'));
    let resp = client
        .post(&url)
        .json(&OcrRequest {
            model: cfg.model.as_deref(),
            languages: &cfg.languages,
            image,
        })
        .send()
        .await
        .with_context(|| format!("POST {}", url))?;

    if !resp.status().is_success() {
        bail!("ocr service returned {}", resp.status());
    }

    let body: OcrResponse = resp.json().await.context("decode ocr response")?;
    Ok(body.text)
}
