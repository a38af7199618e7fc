// SPDX-License-Identifier: MPL-2.0

use std::{fs::read_to_string, path::PathBuf};

use anyhow::{anyhow, Result};

use crate::clockify::{Credentials, TaskSelector, DEFAULT_BASE_URL};

const APP_NAME: &str = "tp-timesheet";
const API_KEY_VAR: &str = "CLOCKIFY_API_KEY";
const DEFAULT_WORKSPACE: &str = "Jupiter";

pub fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let config_toml: PartialConfig = config_path
        .or_else(|| dirs::config_local_dir().map(|dir| dir.join(APP_NAME).join("config.toml")))
        .and_then(|path| {
            log::debug!("Reading configuration at path {:?}", &path);
            match read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        log::warn!("Could not parse config at path {:?} {err}", path);
                        None
                    }
                },
                Err(err) => {
                    log::trace!(
                        "Could not read path {path:?} (assuming no config file set yet) {err}"
                    );
                    None
                }
            }
        })
        .unwrap_or_default();

    Config::from_partial(config_toml, std::env::var(API_KEY_VAR).ok())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub locale: String,
    pub workspace: String,
    pub task: TaskSelector,
    pub hours: f64,
    pub base_url: String,
}

impl Config {
    fn from_partial(config_toml: PartialConfig, env_api_key: Option<String>) -> Result<Config> {
        let api_key = env_api_key
            .filter(|key| !key.trim().is_empty())
            .or(config_toml.clockify_api_key)
            .ok_or_else(|| {
                anyhow!("no API key configured, set clockify_api_key in the config file or {API_KEY_VAR}")
            })?;

        let locale = config_toml
            .locale
            .ok_or_else(|| anyhow!("no locale configured, set locale in the config file"))?;
        log::trace!("Config: locale is {locale:?}");

        let workspace = config_toml
            .workspace
            .unwrap_or_else(|| DEFAULT_WORKSPACE.to_owned());
        let task = config_toml.task.unwrap_or(TaskSelector::Live);
        let hours = config_toml.hours.unwrap_or(8.0);
        let base_url = config_toml
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        log::trace!("Config: workspace is {workspace:?}, default task is {task}");

        Ok(Config {
            api_key,
            locale,
            workspace,
            task,
            hours,
            base_url,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            locale: self.locale.clone(),
        }
    }
}

#[derive(Default, serde::Deserialize)]
struct PartialConfig {
    clockify_api_key: Option<String>,
    locale: Option<String>,
    workspace: Option<String>,
    task: Option<TaskSelector>,
    hours: Option<f64>,
    base_url: Option<String>,
}
