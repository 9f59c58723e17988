//! the cli wrapper around the gotemplate lib
use std::{env, ffi::OsString, process};

use clap::error::ErrorKind;

use gotemplate::{
    commit_files, make_project,
    parse_args::{parse_args_from, usage, GoTemplateArgs, Mode},
    plan_project_tree, TemplateBundle,
};

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // a subscriber might already be set when run more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn make(args: &GoTemplateArgs, name: &str) -> bool {
    let root = args.root();

    if args.dry_run {
        let plan = plan_project_tree(&root, name, &TemplateBundle::embedded());

        print!("{}", plan);

        return true;
    }

    match make_project(&root, name) {
        Ok(_) => {
            println!("Project {} created successfully.", name);

            true
        }
        Err(err) => {
            eprintln!("Error: {}", err);

            false
        }
    }
}

fn commit(args: &GoTemplateArgs) -> bool {
    match commit_files(args.config.as_deref()) {
        Ok(()) => {
            println!("Template files committed successfully.");

            true
        }
        Err(err) => {
            eprintln!("Error committing template files: {}", err);

            false
        }
    }
}

// does everything `main()` does apart from exiting, false means exit 1
fn run_from<I, T>(raw_args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = match parse_args_from(raw_args) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();

            return matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
        }
    };

    init_logging(args.verbose);

    match args.mode() {
        Mode::Usage => {
            println!("{}", usage());

            false
        }
        Mode::Commit => commit(&args),
        Mode::New(name) => make(&args, &name),
    }
}

// the real `main()` so we can clean up before `process::exit()`
fn run() -> bool {
    run_from(env::args_os())
}

fn main() {
    if !run() {
        process::exit(1);
    }
}
