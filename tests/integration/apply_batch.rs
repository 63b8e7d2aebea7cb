use std::fs;

use hugomatter::config::{FrontmatterConfig, HugomatterConfig};
use hugomatter::frontmatter::Document;
use hugomatter::weight::WeightSettings;
use hugomatter::workspace::{ApplyRequest, FileOutcome, WorkspaceCommandService};
use serde_yaml::Value;
use tempfile::TempDir;

use super::support::{content_root, write};

fn request(root: &std::path::Path, step: i64, dry_run: bool) -> ApplyRequest {
    ApplyRequest {
        content_root: root.to_path_buf(),
        settings: WeightSettings {
            step,
            fallback: 999,
        },
        dry_run,
    }
}

fn fields(path: &std::path::Path) -> Document {
    Document::parse(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn second_apply_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&root.join("01.start/01.intro.md"), "Intro\n");
    write(&root.join("01.start/02.install.md"), "Install\n");
    write(&root.join("02.guides/01.basics.md"), "Basics\n");

    let config = HugomatterConfig::default();
    let first = WorkspaceCommandService::apply(&config, &request(&root, 10, false)).unwrap();
    assert_eq!(first.updated, 3);

    let snapshot: Vec<String> = ["01.start/01.intro.md", "01.start/02.install.md", "02.guides/01.basics.md"]
        .iter()
        .map(|p| fs::read_to_string(root.join(p)).unwrap())
        .collect();

    let second = WorkspaceCommandService::apply(&config, &request(&root, 10, false)).unwrap();
    assert_eq!(second.updated, 0);
    assert_eq!(second.unchanged, 3);

    let after: Vec<String> = ["01.start/01.intro.md", "01.start/02.install.md", "02.guides/01.basics.md"]
        .iter()
        .map(|p| fs::read_to_string(root.join(p)).unwrap())
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn existing_weight_is_never_replaced() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let file = root.join("s/05.page.md");
    write(&file, "---\nweight: 7\n---\nbody\n");

    let config = HugomatterConfig::default();
    let result = WorkspaceCommandService::apply(&config, &request(&root, 10, false)).unwrap();
    match &result.files[0].outcome {
        FileOutcome::Updated { added, weight } => {
            assert!(!added.iter().any(|k| k == "weight"));
            assert_eq!(*weight, None);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(fields(&file).get("weight"), Some(&Value::from(7)));
}

#[test]
fn sibling_directory_weight_carries_across_sections() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&root.join("01.start/01.a.md"), "a\n");
    write(&root.join("01.start/02.b.md"), "b\n");
    write(&root.join("02.next/01.c.md"), "c\n");

    let config = HugomatterConfig::default();
    WorkspaceCommandService::apply(&config, &request(&root, 1, false)).unwrap();

    // 01.a: 0 + 1, 02.b: 1 + 2, 01.c inherits 3 from 01.start: 3 + 1
    assert_eq!(fields(&root.join("01.start/01.a.md")).get("weight"), Some(&Value::from(1)));
    assert_eq!(fields(&root.join("01.start/02.b.md")).get("weight"), Some(&Value::from(3)));
    assert_eq!(fields(&root.join("02.next/01.c.md")).get("weight"), Some(&Value::from(4)));
}

#[test]
fn defaults_follow_configuration() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let file = root.join("03.reference/02.cli-flags.md");
    write(&file, "# Flags\n");
    write(&root.join("03.reference/_index.md"), "section\n");

    let config = HugomatterConfig {
        frontmatter: FrontmatterConfig {
            permalink_prefix: Some("docs".to_string()),
            doc_type: "reference".to_string(),
            ..FrontmatterConfig::default()
        },
        ..HugomatterConfig::default()
    };
    let result = WorkspaceCommandService::apply(&config, &request(&root, 1, false)).unwrap();
    assert_eq!(result.total(), 1);

    let doc = fields(&file);
    assert_eq!(doc.get("title"), Some(&Value::from("cli-flags")));
    assert_eq!(doc.get("type"), Some(&Value::from("reference")));
    assert_eq!(
        doc.get("categories"),
        Some(&Value::Sequence(vec![Value::from("reference")]))
    );
    let url = doc.get("url").and_then(Value::as_str).unwrap();
    assert!(url.starts_with("/docs/"));
    assert_eq!(url.len(), "/docs/".len() + 6);
    assert!(doc.body.ends_with("# Flags\n"));
    assert_eq!(
        fs::read_to_string(root.join("03.reference/_index.md")).unwrap(),
        "section\n"
    );
}

#[test]
fn toml_front_matter_is_reported_as_failed() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&root.join("01.toml.md"), "+++\ntitle = \"x\"\n+++\n");
    write(&root.join("02.yaml.md"), "y\n");

    let config = HugomatterConfig::default();
    let result = WorkspaceCommandService::apply(&config, &request(&root, 1, true)).unwrap();
    assert_eq!(result.failed, 1);
    assert_eq!(result.updated, 1);
    match &result.files[0].outcome {
        FileOutcome::Failed { reason } => assert!(reason.contains("toml")),
        other => panic!("unexpected outcome {:?}", other),
    }
}
