use clap::Parser;
use wordbook_config::Config;

use crate::cli::{Cli, Command};

#[test]
fn global_flags_override_config() {
    let cli = Cli::try_parse_from([
        "wordbook",
        "list",
        "--filter",
        "ca",
        "--offline",
        "--data-dir",
        "/tmp/words",
    ])
    .unwrap();
    let mut config = Config::default();

    cli.apply_overrides(&mut config);

    assert!(!config.lookup.enabled);
    assert_eq!(config.storage.data_dir, "/tmp/words");
    assert!(matches!(
        cli.command,
        Some(Command::List { ref filter, category: None }) if filter == "ca"
    ));
}

#[test]
fn add_defaults_category() {
    let cli = Cli::try_parse_from(["wordbook", "add", "kettle", "a pot"]).unwrap();

    match cli.command {
        Some(Command::Add {
            word,
            definition,
            phonetics,
            category,
        }) => {
            assert_eq!(word, "kettle");
            assert_eq!(definition, "a pot");
            assert_eq!(phonetics, "");
            assert_eq!(category, "Daily Use");
        }
        _ => panic!("expected add"),
    }
}

#[test]
fn no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["wordbook"]).unwrap();
    assert!(cli.command.is_none());
}
