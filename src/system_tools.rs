use std::process::Command;

use tracing::{debug, info};

use crate::{
    config::CommitGroup,
    gotemplate_error::{GoTemplateError, Result},
};

/// the two things the commit helper needs from version control
pub trait Vcs {
    fn add(&mut self, files: &[String]) -> Result<()>;

    fn commit(&mut self, message: &str) -> Result<()>;
}

/// Calls out to a git binary in the current directory.
///
/// Stdout, stderr and stdin are inherited so the user sees whatever git has
/// to say, editor prompts included.
#[derive(Debug, Clone)]
pub struct GitCli {
    binary: String,
}

impl GitCli {
    pub fn new<S: Into<String>>(binary: S) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn make_cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);

        cmd.args(args);

        cmd
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let command_string = format!("{} {}", self.binary, args.join(" "));

        debug!("running {}", command_string);

        let status = self.make_cmd(args).status().map_err(|err| {
            GoTemplateError::from_io(
                format!("running {}", command_string),
                &self.binary,
                err,
            )
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(GoTemplateError::Subprocess {
                command: command_string,
                code: status.code(),
            })
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Vcs for GitCli {
    fn add(&mut self, files: &[String]) -> Result<()> {
        let mut args = vec!["add"];

        args.extend(files.iter().map(String::as_str));

        self.run(&args)
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])
    }
}

/// Add then commit every group in order.
///
/// The first failure stops everything, commits that were already made are
/// left alone.
pub fn commit_template_files<V: Vcs>(
    vcs: &mut V,
    groups: &[CommitGroup],
) -> Result<()> {
    for group in groups {
        info!("committing {} -- {}", group.files.join(" "), group.message);

        vcs.add(&group.files)?;

        vcs.commit(&group.message)?;
    }

    Ok(())
}
