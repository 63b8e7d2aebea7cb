use std::fs;

use std::path::Path;

use hugomatter::config::HugomatterConfig;
use hugomatter::tree::extract_ordinal;
use hugomatter::weight::{WeightResolver, WeightSettings, WeightSource};
use hugomatter::workspace::{ApplyRequest, FileOutcome, WorkspaceCommandService};
use tempfile::TempDir;

use super::support::{content_root, write};

fn resolver(root: &Path, step: i64) -> WeightResolver {
    WeightResolver::new(WeightSettings {
        step,
        fallback: 999,
    })
    .with_content_root(root)
}

#[test]
fn local_maximum_plus_ordinal_step() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let dir = root.join("01.guide");
    write(&dir.join("01.a.md"), "---\nweight: 10\n---\nA\n");
    write(&dir.join("02.b.md"), "B\n");

    let weight = resolver(&root, 10).resolve(&dir.join("02.b.md"), 10, 999);
    assert_eq!(weight, 30);
}

#[test]
fn inherits_from_sibling_directory() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&root.join("01.here/03.c.md"), "C\n");
    write(&root.join("02.other/01.x.md"), "---\nweight: 5\n---\n");

    let mut resolver = resolver(&root, 1);
    let explanation = resolver.explain(&root.join("01.here/03.c.md"), 1).unwrap();
    assert_eq!(explanation.base.weight, 5);
    assert!(matches!(
        explanation.base.source,
        WeightSource::SiblingDirectory { .. }
    ));
    assert_eq!(explanation.weight, 8);
}

#[test]
fn no_weights_anywhere_uses_zero_base() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&root.join("03.section/07.page.md"), "page\n");
    write(&root.join("04.other/01.x.md"), "---\ntitle: x\n---\n");

    let weight = resolver(&root, 3).resolve(&root.join("03.section/07.page.md"), 3, 999);
    assert_eq!(weight, 21);
}

#[test]
fn deleted_directory_returns_fallback_exactly() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let dir = root.join("05.gone");
    write(&dir.join("01.a.md"), "---\nweight: 1\n---\n");
    let file = dir.join("02.b.md");
    write(&file, "b\n");

    let mut resolver = resolver(&root, 1);
    fs::remove_dir_all(&dir).unwrap();
    assert_eq!(resolver.resolve(&file, 1, -42), -42);
}

#[test]
fn fresh_weight_on_target_is_reread() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let dir = root.join("docs");
    let file = dir.join("02.b.md");
    write(&file, "b\n");

    let mut resolver = resolver(&root, 1);
    assert_eq!(resolver.resolve(&file, 1, 999), 2);
    write(&file, "---\nweight: 40\n---\nb\n");
    assert_eq!(resolver.resolve(&file, 1, 999), 42);
}

#[test]
fn malformed_neighbour_does_not_abort_resolution() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    let dir = root.join("02.guide");
    write(&dir.join("01.bad.md"), "---\ntitle: [unclosed\n---\n");
    write(&dir.join("02.w.md"), "---\nweight: 7\n---\n");
    write(&dir.join("03.t.md"), "t\n");

    let weight = resolver(&root, 10).resolve(&dir.join("03.t.md"), 10, 999);
    assert_eq!(weight, 37);
}

#[test]
fn site_directories_next_to_content_are_never_read() {
    let temp = TempDir::new().unwrap();
    let root = content_root(&temp);
    write(&temp.path().join("archetypes/default.md"), "---\nweight: 500\n---\n");
    write(&temp.path().join("themes/book/01.layout.md"), "---\nweight: 80\n---\n");
    write(&root.join("01.intro.md"), "intro\n");

    let weight = resolver(&root, 1).resolve(&root.join("01.intro.md"), 1, 999);
    assert_eq!(weight, 1);

    let request = ApplyRequest {
        content_root: root.clone(),
        settings: WeightSettings {
            step: 1,
            fallback: 999,
        },
        dry_run: true,
    };
    let result = WorkspaceCommandService::apply(&HugomatterConfig::default(), &request).unwrap();
    match &result.files[0].outcome {
        FileOutcome::Updated { weight, .. } => assert_eq!(*weight, Some(1)),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn ordinal_extraction_examples() {
    assert_eq!(extract_ordinal("01.intro"), 1);
    assert_eq!(extract_ordinal("intro"), 0);
    assert_eq!(extract_ordinal("10-setup"), 10);
}
