use std::{
    fs,
    io::{self, Write},
    path::Path,
};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

// these work like unix's mkdir, mkdir -p and a plain write, the modes are
// still subject to the umask

fn dir_builder(recursive: bool) -> fs::DirBuilder {
    let mut builder = fs::DirBuilder::new();

    builder.recursive(recursive);

    #[cfg(unix)]
    builder.mode(DIR_MODE);

    builder
}

/// make a single directory, fails if it is already there
pub fn make_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    dir_builder(false).create(path)
}

/// make a directory and any missing parents, fine if it is already there
pub fn make_dir_all<P: AsRef<Path>>(path: P) -> io::Result<()> {
    dir_builder(true).create(path)
}

/// create or truncate a file and write the whole string to it
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();

    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path)?;

    file.write_all(content.as_bytes())
}
