use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::lexicon::{GlyphRule, GlyphTable, WeekdayLexicon, WeekdayToken, DEFAULT_FALLBACK_GLYPH};
use crate::service::batch_service::BatchTaskAssembler;
use crate::time::parse_timezone;

const CONFIG_DIR_NAME: &str = ".vif";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub timezone: String,
    pub glyphs: GlyphConfig,
    pub lexicon: LexiconConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GlyphConfig {
    pub fallback: String,
    /// Checked before the built-in keyword table.
    pub rules: Vec<GlyphRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LexiconConfig {
    pub extra_weekdays: Vec<WeekdayToken>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            glyphs: GlyphConfig::default(),
            lexicon: LexiconConfig::default(),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK_GLYPH.to_string(),
            rules: Vec::new(),
        }
    }
}

impl Config {
    /// Reads `path` (or `~/.vif/config.toml`); a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = resolve_path(path)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = resolve_path(path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(path)
    }

    pub fn timezone(&self) -> Result<Tz> {
        Ok(parse_timezone(&self.timezone)?)
    }

    pub fn weekday_lexicon(&self) -> Result<WeekdayLexicon> {
        WeekdayLexicon::default()
            .extend(&self.lexicon.extra_weekdays)
            .context("Invalid [lexicon] entry in config")
    }

    pub fn glyph_table(&self) -> GlyphTable {
        GlyphTable::default()
            .with_overrides(self.glyphs.rules.clone())
            .with_fallback(self.glyphs.fallback.clone())
    }

    pub fn assembler(&self) -> Result<BatchTaskAssembler> {
        Ok(BatchTaskAssembler::new(self.weekday_lexicon()?, self.glyph_table()))
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}
