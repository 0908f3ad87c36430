// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use movemate_app::Screen;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const APP_DIR_NAME: &str = "movemate";
const DEFAULT_TICK_RATE: &str = "120ms";
const DEFAULT_STATUS_CLEAR_AFTER: &str = "4s";
const DEFAULT_ESTIMATE_REVEAL: &str = "1s";
const DEFAULT_START_SCREEN: &str = "home";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub tick_rate: Option<String>,
    pub status_clear_after: Option<String>,
    pub estimate_reveal: Option<String>,
    pub start_screen: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            tick_rate: Some(DEFAULT_TICK_RATE.to_owned()),
            status_clear_after: Some(DEFAULT_STATUS_CLEAR_AFTER.to_owned()),
            estimate_reveal: Some(DEFAULT_ESTIMATE_REVEAL.to_owned()),
            start_screen: Some(DEFAULT_START_SCREEN.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("MOVEMATE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set MOVEMATE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_DIR_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep settings under [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        for (field, raw) in [
            ("ui.tick_rate", &self.ui.tick_rate),
            ("ui.status_clear_after", &self.ui.status_clear_after),
        ] {
            if let Some(raw) = raw {
                let parsed = parse_duration(raw)
                    .with_context(|| format!("{field} in {}", path.display()))?;
                if parsed <= Duration::ZERO {
                    bail!("{field} in {} must be positive, got {}", path.display(), raw);
                }
            }
        }

        // A zero reveal is fine: the estimate skips the count-up and shows
        // the final amount on the first frame.
        if let Some(raw) = &self.ui.estimate_reveal {
            parse_duration(raw)
                .with_context(|| format!("ui.estimate_reveal in {}", path.display()))?;
        }

        if let Some(raw) = &self.ui.start_screen
            && Screen::parse(raw).is_none()
        {
            bail!(
                "invalid ui.start_screen {:?} in {}; use one of: home, search, calculate, shipment, profile",
                raw,
                path.display()
            );
        }

        Ok(())
    }

    pub fn tick_rate(&self) -> Result<Duration> {
        parse_duration(self.ui.tick_rate.as_deref().unwrap_or(DEFAULT_TICK_RATE))
    }

    pub fn status_clear_after(&self) -> Result<Duration> {
        parse_duration(
            self.ui
                .status_clear_after
                .as_deref()
                .unwrap_or(DEFAULT_STATUS_CLEAR_AFTER),
        )
    }

    pub fn estimate_reveal(&self) -> Result<Duration> {
        parse_duration(
            self.ui
                .estimate_reveal
                .as_deref()
                .unwrap_or(DEFAULT_ESTIMATE_REVEAL),
        )
    }

    pub fn start_screen(&self) -> Result<Screen> {
        let raw = self.ui.start_screen.as_deref().unwrap_or(DEFAULT_START_SCREEN);
        Screen::parse(raw).ok_or_else(|| {
            anyhow!(
                "invalid start_screen {raw:?}; use one of: home, search, calculate, shipment, profile"
            )
        })
    }

    pub fn ui_timing(&self) -> Result<movemate_tui::UiTiming> {
        Ok(movemate_tui::UiTiming {
            tick_rate: self.tick_rate()?,
            status_clear_after: self.status_clear_after()?,
            estimate_reveal: self.estimate_reveal()?,
        })
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# movemate config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\ntick_rate = \"{}\"\nstatus_clear_after = \"{}\"\nestimate_reveal = \"{}\"\nstart_screen = \"{}\"\n",
            path.display(),
            DEFAULT_TICK_RATE,
            DEFAULT_STATUS_CLEAR_AFTER,
            DEFAULT_ESTIMATE_REVEAL,
            DEFAULT_START_SCREEN,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
