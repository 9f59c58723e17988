use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    bundle::{BundleEntry, TemplateBundle},
    fs_tools::{make_dir, make_dir_all, write_file},
    gotemplate_error::{GoTemplateError, Result},
    templating::{
        destination_name, package_stub, render_content, replace_placeholder,
        GITIGNORE, MAIN_STUB,
    },
};

const COPY_PHASE: &str = "copying template files";

/// a single file system change, in the order it has to happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// the project root, this must not exist yet
    MakeRoot { path: PathBuf },
    MakeDir { path: PathBuf, phase: String },
    WriteFile {
        path: PathBuf,
        content: String,
        phase: String,
    },
}

impl Step {
    pub fn path(&self) -> &Path {
        match self {
            Step::MakeRoot { path }
            | Step::MakeDir { path, .. }
            | Step::WriteFile { path, .. } => path,
        }
    }

    fn phase(&self) -> &str {
        match self {
            Step::MakeRoot { .. } => "creating project directory",
            Step::MakeDir { phase, .. } | Step::WriteFile { phase, .. } => {
                phase
            }
        }
    }

    fn apply(&self) -> Result<()> {
        let result = match self {
            Step::MakeRoot { path } => make_dir(path),
            Step::MakeDir { path, .. } => make_dir_all(path),
            Step::WriteFile { path, content, .. } => write_file(path, content),
        };

        result.map_err(|err| {
            GoTemplateError::from_io(self.phase(), self.path(), err)
        })
    }
}

/// Everything a project needs, worked out before anything is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub project_name: String,
    pub project_root: PathBuf,
    pub steps: Vec<Step>,
}

impl ProjectPlan {
    /// Run every step in order, the first error stops the run and whatever
    /// was already made stays on disk.
    pub fn apply(&self) -> Result<()> {
        info!(
            "making project {} in {}",
            self.project_name,
            self.project_root.display()
        );

        for step in self.steps.iter() {
            debug!("{} -> {}", step.phase(), step.path().display());

            step.apply()?;
        }

        Ok(())
    }

    /// every file the plan will write
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().filter_map(|step| match step {
            Step::WriteFile { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }
}

impl fmt::Display for ProjectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps.iter() {
            match step {
                Step::MakeRoot { path } | Step::MakeDir { path, .. } => {
                    writeln!(f, "  dir  -> {}", path.display())?;
                }
                Step::WriteFile { path, content, .. } => {
                    writeln!(f, "  ------")?;
                    writeln!(f, "  file -> {}", path.display())?;

                    for line in content.lines() {
                        writeln!(f, "    {}", line)?;
                    }

                    writeln!(f, "  ------")?;
                }
            }
        }

        Ok(())
    }
}

// the bundle path with the placeholder replaced, under the project root
fn destination_path(
    project_root: &Path,
    bundle_path: &str,
    project_name: &str,
) -> PathBuf {
    let mut dest = project_root.to_path_buf();

    if bundle_path.is_empty() {
        return dest;
    }

    let (parents, last) = match bundle_path.rsplit_once('/') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, bundle_path),
    };

    for seg in parents.into_iter().flat_map(|p| p.split('/')) {
        dest.push(replace_placeholder(seg, project_name));
    }

    dest.push(destination_name(last, project_name));

    dest
}

fn resolve_bundle(
    project_root: &Path,
    project_name: &str,
    bundle: &TemplateBundle,
) -> Vec<Step> {
    bundle
        .walk()
        .into_iter()
        .map(|entry| {
            let path =
                destination_path(project_root, entry.path(), project_name);
            let phase = String::from(COPY_PHASE);

            match entry {
                BundleEntry::Dir(_) => Step::MakeDir { path, phase },
                BundleEntry::File { content, .. } => {
                    let dest_name = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or_default();

                    let content =
                        render_content(dest_name, content, project_name);

                    Step::WriteFile {
                        path,
                        content,
                        phase,
                    }
                }
            }
        })
        .collect()
}

fn resolve_stubs(project_root: &Path, project_name: &str) -> Vec<Step> {
    let cmd_dir = project_root.join("cmd");

    vec![
        Step::WriteFile {
            path: project_root.join(format!("{}.go", project_name)),
            content: package_stub(project_name),
            phase: format!("writing {}.go", project_name),
        },
        Step::MakeDir {
            path: cmd_dir.clone(),
            phase: String::from("creating cmd directory"),
        },
        Step::WriteFile {
            path: cmd_dir.join("main.go"),
            content: String::from(MAIN_STUB),
            phase: String::from("writing cmd/main.go"),
        },
        Step::WriteFile {
            path: project_root.join(".gitignore"),
            content: String::from(GITIGNORE),
            phase: String::from("writing .gitignore"),
        },
    ]
}

/// work out every step for making `project_name` inside `root`, nothing is
/// touched on disk
pub fn plan_project_tree(
    root: &Path,
    project_name: &str,
    bundle: &TemplateBundle,
) -> ProjectPlan {
    let project_root = root.join(project_name);

    let mut steps = vec![Step::MakeRoot {
        path: project_root.clone(),
    }];

    steps.extend(resolve_bundle(&project_root, project_name, bundle));
    steps.extend(resolve_stubs(&project_root, project_name));

    ProjectPlan {
        project_name: project_name.to_owned(),
        project_root,
        steps,
    }
}

/// the interface for making a project, returns the new project root
pub fn make_project_tree(
    root: &Path,
    project_name: &str,
    bundle: &TemplateBundle,
) -> Result<PathBuf> {
    let plan = plan_project_tree(root, project_name, bundle);

    plan.apply()?;

    Ok(plan.project_root)
}
