use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::session_store::ensure_notefrais_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gateway: GatewaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub base_url: String,

    /// Serve the canonical fixture bills from memory instead of the
    /// network. On by default so a fresh checkout works offline.
    pub demo: bool,

    /// Bearer token forwarded to the bills service when set.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewaySection {
                base_url: "http://localhost:5678".to_string(),
                demo: true,
                token: None,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_notefrais_home()?.join("config.toml"))
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

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    println!("base_url = {}", cfg.gateway.base_url);
    println!("demo     = {}", cfg.gateway.demo);
    println!(
        "token    = {}",
        if cfg.gateway.token.is_some() { "(set)" } else { "(none)" }
    );
    Ok(())
}
