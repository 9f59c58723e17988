use std::{fs, path::Path};

use serde::Deserialize;

use crate::gotemplate_error::{GoTemplateError, Result};

const DEFAULT_COMMIT_CONFIG: &str =
    include_str!("../config/commit_groups.toml");

const DEFAULT_GIT: &str = "git";

/// files that go in to one commit
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommitGroup {
    pub files: Vec<String>,
    pub message: String,
}

// a config to deserialize the commit groups in toml
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommitConfig {
    /// the git binary to call, defaults to `git` on the PATH
    pub git: Option<String>,
    pub groups: Vec<CommitGroup>,
}

impl CommitConfig {
    pub fn git_binary(&self) -> &str {
        self.git.as_deref().unwrap_or(DEFAULT_GIT)
    }

    fn check(self) -> Result<Self> {
        if self.groups.is_empty() {
            return Err(GoTemplateError::ConfigParse(String::from(
                "no commit groups given",
            )));
        }

        for group in self.groups.iter() {
            if group.files.is_empty() {
                return Err(GoTemplateError::ConfigParse(format!(
                    "commit group has no files -- message {}",
                    group.message
                )));
            }
        }

        Ok(self)
    }
}

pub fn parse_commit_config(config_str: &str) -> Result<CommitConfig> {
    let config: CommitConfig = toml::from_str(config_str)
        .map_err(|err| GoTemplateError::ConfigParse(err.to_string()))?;

    config.check()
}

/// the groups that ship with gotemplate
pub fn default_commit_config() -> Result<CommitConfig> {
    parse_commit_config(DEFAULT_COMMIT_CONFIG)
}

// a config given on the cli replaces the default one
pub fn resolve_commit_config(
    cli_config_path: Option<&Path>,
) -> Result<CommitConfig> {
    match cli_config_path {
        Some(path) => {
            let config_str = fs::read_to_string(path).map_err(|source| {
                GoTemplateError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

            parse_commit_config(&config_str)
        }
        None => default_commit_config(),
    }
}
