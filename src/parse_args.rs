use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, CommandFactory, Parser};

/// make a new go project from the template that ships with gotemplate
#[derive(Parser, Default, Debug)]
#[command(name = "gotemplate", version)]
pub struct GoTemplateArgs {
    /// the name of the new project, used for the directory and the package
    pub project_name: Option<String>,
    /// anything after the project name is ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
    /// commit the known template files in the current directory, one group
    /// per commit
    #[arg(long)]
    pub commit: bool,
    /// a different root to make the project in to
    #[arg(short = 'D', long, value_name = "PATH", conflicts_with = "commit")]
    pub different_root: Option<PathBuf>,
    /// print out what will be made instead of making it
    #[arg(short, long, conflicts_with = "commit")]
    pub dry_run: bool,
    /// a toml file with the commit groups to use instead of the built in ones
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// more output, can be given more than once
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// what a run of gotemplate is going to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Usage,
    Commit,
    New(String),
}

impl GoTemplateArgs {
    pub fn mode(&self) -> Mode {
        if self.commit {
            Mode::Commit
        } else if let Some(name) = self.project_name.as_ref() {
            Mode::New(name.clone())
        } else {
            Mode::Usage
        }
    }

    /// where the project directory gets made, the current dir by default
    pub fn root(&self) -> PathBuf {
        self.different_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// clap has no single dash long flags so the old `-commit` is turned in to
// `--commit` before parsing
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();

            if arg.to_str() == Some("-commit") {
                OsString::from("--commit")
            } else {
                arg
            }
        })
        .collect()
}

pub fn parse_args_from<I, T>(args: I) -> Result<GoTemplateArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    GoTemplateArgs::try_parse_from(normalize_args(args))
}

pub fn usage() -> String {
    GoTemplateArgs::command().render_help().to_string()
}
