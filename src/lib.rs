//! make a new go project from the template files built in to gotemplate

pub mod bundle;
pub mod config;
mod fs_tools;
pub mod gotemplate_error;
pub mod parse_args;
pub mod project_tree;
pub mod system_tools;
pub mod templating;
#[cfg(test)]
mod test_utils;

use std::path::{Path, PathBuf};

pub use crate::{
    bundle::TemplateBundle,
    gotemplate_error::{ErrorKind, GoTemplateError, Result},
    project_tree::{make_project_tree, plan_project_tree, ProjectPlan},
    system_tools::{commit_template_files, GitCli, Vcs},
};

/// make `project_name` inside `root` from the built in template
pub fn make_project(root: &Path, project_name: &str) -> Result<PathBuf> {
    make_project_tree(root, project_name, &TemplateBundle::embedded())
}

/// commit the template files in the current directory with git, the groups
/// come from `config_path` or the built in config
pub fn commit_files(config_path: Option<&Path>) -> Result<()> {
    let config = config::resolve_commit_config(config_path)?;

    let mut git = GitCli::new(config.git_binary());

    commit_template_files(&mut git, &config.groups)
}
