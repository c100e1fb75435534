//! Tests for project path precedence

use std::path::{Path, PathBuf};

use rstest::rstest;

use sagui::application::services::ProjectLocator;

const CWD: &str = "/home/dev/linked";
const INSTALLED_EXE: &str = "/work/app/node_modules/.bin/sagui";

fn inputs(explicit: Option<&str>, link: bool, configured: Option<&str>, exe: Option<&str>) -> ProjectLocator {
    ProjectLocator {
        explicit: explicit.map(PathBuf::from),
        link,
        configured: configured.map(PathBuf::from),
        executable: exe.map(PathBuf::from),
    }
}

#[rstest]
#[case::explicit_beats_all(inputs(Some("/explicit"), true, Some("/configured"), Some(INSTALLED_EXE)), "/explicit")]
#[case::link_beats_config(inputs(None, true, Some("/configured"), Some(INSTALLED_EXE)), CWD)]
#[case::config_beats_install(inputs(None, false, Some("/configured"), Some(INSTALLED_EXE)), "/configured")]
#[case::install_location(inputs(None, false, None, Some(INSTALLED_EXE)), "/work/app")]
#[case::global_install_falls_back_to_cwd(inputs(None, false, None, Some("/usr/bin/sagui")), CWD)]
#[case::nothing_known(inputs(None, false, None, None), CWD)]
fn given_inputs_when_resolving_then_highest_precedence_wins(
    #[case] locator: ProjectLocator,
    #[case] expected: &str,
) {
    assert_eq!(locator.resolve(Path::new(CWD)), PathBuf::from(expected));
}

#[test]
fn given_relative_explicit_path_when_resolving_then_joined_to_cwd() {
    let locator = inputs(Some("../app"), false, None, None);

    assert_eq!(
        locator.resolve(Path::new(CWD)),
        PathBuf::from("/home/dev/linked/../app")
    );
}
