use clap::{CommandFactory, Parser};
use hugomatter::tooling::cli::{Cli, Commands, OutputFormat};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["hugomatter", "apply"],
        vec!["hugomatter", "apply", "--dry-run", "--step", "10"],
        vec!["hugomatter", "apply", "--default-weight", "-1", "--format", "json"],
        vec!["hugomatter", "weight", "content/01.a.md"],
        vec!["hugomatter", "weight", "content/01.a.md", "--step", "5", "--format", "json"],
        vec!["hugomatter", "status", "--format", "json"],
        vec!["hugomatter", "config"],
        vec!["hugomatter", "--workspace", "site", "--verbose", "status"],
        vec!["hugomatter", "--log-level", "debug", "--log-format", "json", "apply"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_values() {
    let invalid: Vec<Vec<&str>> = vec![
        vec!["hugomatter", "apply", "--step", "0"],
        vec!["hugomatter", "apply", "--step", "-3"],
        vec!["hugomatter", "status", "--format", "yaml"],
        vec!["hugomatter", "weight"],
        vec!["hugomatter", "scan"],
    ];

    for args in invalid {
        assert!(
            Cli::try_parse_from(args.clone()).is_err(),
            "expected parse failure for args: {args:?}"
        );
    }
}

#[test]
fn parse_apply_fields() {
    let cli = Cli::try_parse_from([
        "hugomatter",
        "apply",
        "--dry-run",
        "--step",
        "10",
        "--default-weight",
        "500",
    ])
    .unwrap();
    match cli.command {
        Commands::Apply {
            dry_run,
            step,
            default_weight,
            format,
        } => {
            assert!(dry_run);
            assert_eq!(step, Some(10));
            assert_eq!(default_weight, Some(500));
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected apply"),
    }
}

#[test]
fn global_flags_become_logging_overrides() {
    let cli = Cli::try_parse_from([
        "hugomatter",
        "--verbose",
        "--log-output",
        "file",
        "--log-file",
        "/tmp/hm.log",
        "status",
    ])
    .unwrap();
    let overrides = cli.logging_overrides();
    assert!(overrides.verbose);
    assert_eq!(overrides.output.as_deref(), Some("file"));
    assert_eq!(
        overrides.file.as_deref(),
        Some(std::path::Path::new("/tmp/hm.log"))
    );
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_help().to_string();
    for name in ["apply", "weight", "status", "config"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}
