use clap::{Args, CommandFactory, FromArgMatches, Parser};
use keyfit::config::{Config, OutputFormat, SortKey};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_cli_defaults_match_default_impl() {
    let (config, _) = parse(&["keyfit"]);
    assert_eq!(config, Config::default());
    assert_eq!(config.report.precision, 2);
    assert_eq!(config.report.format, OutputFormat::Table);
}

#[test]
fn test_partial_json_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"report": {{"format": "json"}}}}"#).unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.report.format, OutputFormat::Json);
    assert_eq!(config.report.precision, 2);
    assert!(!config.analysis.case_sensitive);
}

#[test]
fn test_cli_overrides_only_explicit_values() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"analysis": {{"case_sensitive": true}}, "report": {{"precision": 4, "sort_by": "hand"}}}}"#
    )
    .unwrap();
    let mut config = Config::load_from_file(file.path()).unwrap();

    let (cli, matches) = parse(&["keyfit", "--precision", "1", "--format", "json"]);
    config.merge_from_cli(&cli, &matches);

    // From CLI
    assert_eq!(config.report.precision, 1);
    assert_eq!(config.report.format, OutputFormat::Json);
    // Kept from file, untouched by clap defaults
    assert!(config.analysis.case_sensitive);
    assert_eq!(config.report.sort_by, Some(SortKey::Hand));
}

#[test]
fn test_missing_config_file() {
    let err = Config::load_from_file("/no/such/keyfit.json").unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_config_is_flattenable() {
    // Config must stay usable as a flattened clap group.
    let cmd = Config::augment_args(clap::Command::new("probe"));
    assert!(cmd.get_arguments().any(|a| a.get_id() == "layouts_dir"));
}
