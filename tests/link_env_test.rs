//! Tests for reading the link override from `SAGUI_LINK`
//!
//! Kept in its own test binary: it mutates the process environment.

use clap::Parser;

use sagui::cli::Cli;

fn link_with_env(value: &str) -> bool {
    std::env::set_var("SAGUI_LINK", value);
    let parsed = Cli::try_parse_from(["sagui", "develop"]);
    std::env::remove_var("SAGUI_LINK");
    parsed
        .unwrap_or_else(|e| panic!("SAGUI_LINK={value:?} should parse: {e}"))
        .link
}

#[test]
fn given_link_env_values_when_parsed_then_only_falsey_values_unset_link() {
    for value in ["1", "yes", "TRUE", "true", "on", "/some/path"] {
        assert!(link_with_env(value), "SAGUI_LINK={value:?} should link");
    }
    for value in ["", "0", "false", "no", "off"] {
        assert!(!link_with_env(value), "SAGUI_LINK={value:?} should not link");
    }

    let unset = Cli::try_parse_from(["sagui", "develop"]).expect("parse without env");
    assert!(!unset.link);
}
