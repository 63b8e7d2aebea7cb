use hugomatter::config::ConfigLoader;
use hugomatter::error::ApiError;
use tempfile::TempDir;

use super::support::{with_env, write};

#[test]
fn workspace_file_overrides_global_file() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        write(
            &temp.path().join("xdg/hugomatter/config.toml"),
            "[weight]\nstep = 5\ndefault_weight = 100\n",
        );
        let workspace = temp.path().join("site");
        write(&workspace.join("hugomatter.toml"), "[weight]\nstep = 10\n");

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.weight.step, 10);
        assert_eq!(config.weight.default_weight, 100);
    });
}

#[test]
fn environment_overrides_files() {
    let temp = TempDir::new().unwrap();
    with_env(
        &temp,
        &[
            ("HUGOMATTER__WEIGHT__STEP", "25"),
            ("HUGOMATTER__FRONTMATTER__DOC_TYPE", "blog"),
        ],
        || {
            let workspace = temp.path().join("site");
            write(&workspace.join("hugomatter.toml"), "[weight]\nstep = 10\n");

            let config = ConfigLoader::load(&workspace).unwrap();
            assert_eq!(config.weight.step, 25);
            assert_eq!(config.frontmatter.doc_type, "blog");
        },
    );
}

#[test]
fn invalid_step_is_rejected() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let workspace = temp.path().join("site");
        write(&workspace.join("hugomatter.toml"), "[weight]\nstep = 0\n");

        let result = ConfigLoader::load(&workspace);
        assert!(matches!(result, Err(ApiError::ConfigError(_))));
    });
}

#[test]
fn explicit_file_must_exist() {
    let temp = TempDir::new().unwrap();
    with_env(&temp, &[], || {
        let result = ConfigLoader::load_from_file(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ApiError::Config(_))));
    });
}
