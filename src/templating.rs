//! Plain string substitution, there is no template language on purpose.

/// the literal every project name replaces
pub const PLACEHOLDER: &str = "gotemplate";

/// the bundle keeps the release config without its dot
pub const RELEASE_CONFIG_BUNDLE_NAME: &str = "goreleaser.yaml";
pub const RELEASE_CONFIG_NAME: &str = ".goreleaser.yaml";

pub const BUILD_FILE_NAME: &str = "Makefile";

// the template repo builds from its own main file, a new project builds from
// cmd/main.go
const SELF_ENTRY_POINT: &str = "./gotemplate.go";
const PROJECT_ENTRY_POINT: &str = "./cmd/main.go";

// goreleaser finds .goreleaser.yaml on its own so the flag has to go
const CONFIG_FLAG: &str = " --config goreleaser.yaml";

/// replace every occurrence of the placeholder with the project name
pub fn replace_placeholder(source: &str, project_name: &str) -> String {
    source.replace(PLACEHOLDER, project_name)
}

/// The name a bundle file gets in the new project.
///
/// The placeholder is replaced first, then the release config gets its dot.
pub fn destination_name(bundle_name: &str, project_name: &str) -> String {
    let name = replace_placeholder(bundle_name, project_name);

    if name == RELEASE_CONFIG_BUNDLE_NAME {
        String::from(RELEASE_CONFIG_NAME)
    } else {
        name
    }
}

/// The content a file gets, `dest_name` is the final component of the
/// destination path.
pub fn render_content(
    dest_name: &str,
    source: &str,
    project_name: &str,
) -> String {
    if dest_name == RELEASE_CONFIG_NAME {
        // the entry point has to be swapped before the placeholder goes
        let swapped = source.replace(SELF_ENTRY_POINT, PROJECT_ENTRY_POINT);

        replace_placeholder(&swapped, project_name)
    } else {
        let content = replace_placeholder(source, project_name);

        if dest_name == BUILD_FILE_NAME {
            content.replace(CONFIG_FLAG, "")
        } else {
            content
        }
    }
}

/// the `<name>.go` file that declares the package
pub fn package_stub(project_name: &str) -> String {
    format!("package {}\n", project_name)
}

pub const MAIN_STUB: &str = "package main\n\nfunc main() {\n}\n";

pub const GITIGNORE: &str = ".DS_Store\ndist\n";

#[cfg(test)]
mod test {
    use super::*;

    use crate::bundle::{MAKEFILE, RELEASE_CONFIG};

    #[test]
    fn test_replace_placeholder_every_occurrence() {
        let out =
            replace_placeholder("gotemplate/gotemplate.go gotemplate", "foo");

        assert_eq!(out, "foo/foo.go foo");
    }

    #[test]
    fn test_replace_placeholder_with_itself_as_prefix() {
        let out =
            replace_placeholder("a gotemplate b gotemplate", "gotemplateX");

        assert_eq!(out, "a gotemplateX b gotemplateX");
    }

    #[test]
    fn test_destination_name() {
        assert_eq!(
            destination_name("goreleaser.yaml", "foo"),
            ".goreleaser.yaml"
        );
        assert_eq!(destination_name("gotemplate.txt", "foo"), "foo.txt");
        assert_eq!(destination_name("Makefile", "foo"), "Makefile");
        assert_eq!(destination_name("", "foo"), "");
    }

    #[test]
    fn test_release_config_points_at_cmd() {
        let out = render_content(RELEASE_CONFIG_NAME, RELEASE_CONFIG, "foo");

        assert!(out.contains("main: ./cmd/main.go"), "{}", out);
        assert!(!out.contains("./foo.go"), "entry point was not swapped");
        assert!(!out.contains(PLACEHOLDER));
        assert!(out.contains("project_name: foo"));
    }

    // doing the placeholder first would turn the entry point in to ./foo.go
    #[test]
    fn test_release_config_swap_happens_first() {
        let out = render_content(
            RELEASE_CONFIG_NAME,
            "main: ./gotemplate.go\nbinary: gotemplate\n",
            "foo",
        );

        assert_eq!(out, "main: ./cmd/main.go\nbinary: foo\n");
    }

    #[test]
    fn test_makefile_drops_config_flag() {
        let out = render_content(BUILD_FILE_NAME, MAKEFILE, "foo");

        assert!(!out.contains("--config goreleaser.yaml"));
        assert!(out.contains("goreleaser release --clean\n"));
        assert!(out.contains("BINARY := foo"));
    }

    #[test]
    fn test_config_flag_kept_outside_makefile() {
        let source = "goreleaser release --config goreleaser.yaml";

        assert_eq!(render_content("README.md", source, "foo"), source);
    }

    #[test]
    fn test_stubs() {
        assert_eq!(package_stub("foo"), "package foo\n");
        assert_eq!(MAIN_STUB, "package main\n\nfunc main() {\n}\n");
        assert_eq!(GITIGNORE.lines().count(), 2);
    }
}
