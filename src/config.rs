use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;
use crate::card::{CardOptions, DEFAULT_EXCERPT_CHARS};
use crate::post::DEFAULT_IMAGE;

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "BLOG_API_URL";

const DEFAULT_GRACE_DELAY_MS: u64 = 800;

#[derive(Deserialize)]
pub struct Api {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Deserialize)]
pub struct Composer {
    #[serde(default = "default_grace_delay_ms")]
    pub grace_delay_ms: u64,
    #[serde(default = "default_image")]
    pub default_image: String,
}

#[derive(Deserialize)]
pub struct Defaults {
    /// 0 shows the whole content on every card.
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

#[derive(Deserialize, Default)]
pub struct Paths {
    pub template_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CuratedEntry {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub composer: Composer,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub paths: Paths,
    pub log: Option<Log>,
    #[serde(default)]
    pub curated: Vec<CuratedEntry>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_grace_delay_ms() -> u64 {
    DEFAULT_GRACE_DELAY_MS
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_excerpt_chars() -> usize {
    DEFAULT_EXCERPT_CHARS
}

impl Default for Api {
    fn default() -> Self {
        Api { base_url: default_base_url() }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Composer {
            grace_delay_ms: default_grace_delay_ms(),
            default_image: default_image(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults { excerpt_chars: default_excerpt_chars() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: Api::default(),
            composer: Composer::default(),
            defaults: Defaults::default(),
            paths: Paths::default(),
            log: None,
            curated: vec![],
        }
    }
}

impl Config {
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.composer.grace_delay_ms)
    }

    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            fallback_image: self.composer.default_image.clone(),
            excerpt_chars: self.defaults.excerpt_chars,
        }
    }

    /// Applies `BLOG_API_URL` on top of the file value.
    pub fn apply_env(&mut self) {
        self.apply_api_url(env::var(API_URL_ENV).ok());
    }

    fn apply_api_url(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
        let str_path = path.to_string_lossy();
        Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
    } else {
        Ok(path)
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.composer.default_image.trim().is_empty() {
        cfg.composer.default_image = default_image();
    }

    if let Some(template_dir) = cfg.paths.template_dir.take() {
        cfg.paths.template_dir = Some(parse_path(template_dir)?);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
