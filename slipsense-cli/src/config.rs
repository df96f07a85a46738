use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ocr: OcrSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSection {
    /// Base URL of the OCR HTTP service.
    pub base_url: String,
    /// Model name to request, when the service supports more than one.
    pub model: Option<String>,
    pub languages: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr: OcrSection {
                base_url: "http://127.0.0.1:8884".to_string(),
                model: None,
                languages: vec!["th".to_string(), "en".to_string()],
                timeout_secs: 30,
            },
        }
    }
}

pub fn slipsense_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".slipsense"))
}

pub fn ensure_slipsense_home() -> Result<PathBuf> {
    let dir = slipsense_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_slipsense_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
