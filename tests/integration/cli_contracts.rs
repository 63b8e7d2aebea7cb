use std::fs;

use hugomatter::tooling::cli::{CliContext, Commands, OutputFormat};
use tempfile::TempDir;

use super::support::{with_env, write};

#[test]
fn apply_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let workspace = temp.path().join("site");
        write(&workspace.join("content/01.a.md"), "a\n");
        write(&workspace.join("content/02.b.md"), "---\nweight: 3\n---\n");

        let cli = CliContext::new(workspace, None).unwrap();
        let output = cli
            .execute(&Commands::Apply {
                dry_run: true,
                step: None,
                default_weight: None,
                format: OutputFormat::Json,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["dry_run"], true);
        assert!(parsed.get("content_root").and_then(|v| v.as_str()).is_some());
        assert_eq!(parsed["updated"], 2);
        let files = parsed["files"].as_array().unwrap();
        assert_eq!(files[0]["path"], "01.a.md");
        assert_eq!(files[0]["status"], "updated");
        assert_eq!(files[0]["weight"], 4);
        assert!(files[1].get("weight").is_none());
    });
}

#[test]
fn status_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let workspace = temp.path().join("site");
        write(&workspace.join("content/02.ref/01.cli.md"), "---\nweight: 11\n---\n");
        write(&workspace.join("content/02.ref/02.api.md"), "api\n");

        let cli = CliContext::new(workspace, None).unwrap();
        let output = cli
            .execute(&Commands::Status {
                format: OutputFormat::Json,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["weighted_count"], 1);
        let entries = parsed["entries"].as_array().unwrap();
        assert_eq!(entries[0]["path"], "02.ref/01.cli.md");
        assert_eq!(entries[0]["ordinal"], 1);
        assert_eq!(entries[0]["weight"], 11);
    });
}

#[test]
fn weight_json_contract_has_explanation() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let workspace = temp.path().join("site");
        write(&workspace.join("content/01.here/03.c.md"), "c\n");
        write(&workspace.join("content/02.other/01.x.md"), "---\nweight: 5\n---\n");

        let cli = CliContext::new(workspace, None).unwrap();
        let output = cli
            .execute(&Commands::Weight {
                file: "content/01.here/03.c.md".into(),
                step: None,
                default_weight: None,
                format: OutputFormat::Json,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["weight"], 8);
        assert_eq!(parsed["resolved"], true);
        assert_eq!(parsed["explanation"]["ordinal"], 3);
        assert_eq!(parsed["explanation"]["strategy"], "sibling_directory");
        assert_eq!(parsed["explanation"]["base"]["source"]["kind"], "sibling_directory");
    });
}

#[test]
fn workspace_config_drives_apply() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let workspace = temp.path().join("site");
        write(
            &workspace.join("hugomatter.toml"),
            "[content]\ndir = \"docs\"\n\n[weight]\nstep = 100\n",
        );
        write(&workspace.join("docs/02.b.md"), "b\n");

        let cli = CliContext::new(workspace.clone(), None).unwrap();
        cli.execute(&Commands::Apply {
            dry_run: false,
            step: None,
            default_weight: None,
            format: OutputFormat::Text,
        })
        .unwrap();

        let content = fs::read_to_string(workspace.join("docs/02.b.md")).unwrap();
        assert!(content.contains("weight: 200"));
    });
}
