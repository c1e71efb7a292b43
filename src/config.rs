use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::DEFAULT_PAGE_SIZE;

/// 配置文件结构 (~/.config/voltdesk/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/api".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 10,
            log_file: None,
        }
    }
}

impl Config {
    /// 从TOML文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size 必须大于 0".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("base_url 不能为空".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("无法获取用户配置目录".into()))?;
        Ok(dir.join("voltdesk").join("config.toml"))
    }

    /// 日志文件路径，未配置时为 ~/.local/share/voltdesk/voltdesk.log
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir()
            .ok_or_else(|| AppError::Config("无法获取用户数据目录".into()))?
            .join("voltdesk");
        fs::create_dir_all(&dir)?;
        Ok(dir.join("voltdesk.log"))
    }
}
