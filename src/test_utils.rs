use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tempfile::{tempdir, TempDir};

use crate::{
    bundle::TemplateBundle,
    gotemplate_error::{GoTemplateError, Result},
    system_tools::Vcs,
};

#[derive(Default)]
pub struct TempSetup {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl TempSetup {
    pub fn setup(&mut self) -> PathBuf {
        self.temp = Some(tempdir().unwrap());
        self.path = self.temp.as_ref().unwrap().path().to_owned();

        self.path.clone()
    }
}

impl Drop for TempSetup {
    fn drop(&mut self) {
        if let Some(temp) = self.temp.take() {
            temp.close().expect("cant close temp dir");
        }
    }
}

/// every file under root, relative and joined with `/`
pub fn collect_tree(root: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, found: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).expect("cant read dir") {
            let path = entry.expect("cant read dir entry").path();

            if path.is_dir() {
                walk(root, &path, found);
            } else {
                let rel: Vec<String> = path
                    .strip_prefix(root)
                    .unwrap()
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();

                found.insert(rel.join("/"));
            }
        }
    }

    let mut found = BTreeSet::new();

    walk(root, root, &mut found);

    found
}

// has the placeholder in a dir and a file name and a nested release config
pub fn make_fake_bundle() -> TemplateBundle {
    TemplateBundle::new(vec![
        ("README.md", "# gotemplate\n"),
        ("gotemplate/gotemplate.txt", "name: gotemplate\n"),
        (
            "docs/nested/goreleaser.yaml",
            "main: ./gotemplate.go\nbinary: gotemplate\n",
        ),
    ])
    .expect("fake bundle has a bad path")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Add(Vec<String>),
    Commit(String),
}

impl VcsCall {
    pub fn add(files: &[&str]) -> Self {
        VcsCall::Add(files.iter().map(|f| f.to_string()).collect())
    }

    pub fn commit(message: &str) -> Self {
        VcsCall::Commit(message.to_owned())
    }
}

/// records every call and can fail on the nth one
#[derive(Default)]
pub struct FakeVcs {
    pub calls: Vec<VcsCall>,
    fail_at: Option<usize>,
}

impl FakeVcs {
    pub fn failing_at(call: usize) -> Self {
        Self {
            calls: vec![],
            fail_at: Some(call),
        }
    }

    fn record(&mut self, call: VcsCall) -> Result<()> {
        let index = self.calls.len();

        self.calls.push(call);

        if self.fail_at == Some(index) {
            Err(GoTemplateError::Subprocess {
                command: String::from("fake vcs"),
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}

impl Vcs for FakeVcs {
    fn add(&mut self, files: &[String]) -> Result<()> {
        self.record(VcsCall::Add(files.to_vec()))
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        self.record(VcsCall::Commit(message.to_owned()))
    }
}
