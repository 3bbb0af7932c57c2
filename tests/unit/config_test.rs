//! Unit tests for config module

use std::fs;

use tempfile::TempDir;

use blocklog::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.analysis.start_block, None);
    assert_eq!(config.analysis.cease_block, None);
    assert_eq!(config.analysis.num_addl_blocks_to_drop, 0);
    assert!(!config.analysis.strict);
    assert_eq!(config.report.output, "data.json");
    assert!(config.report.node_bin.is_none());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.analysis.cease_block = Some(120);
    config.report.output = "runs/latest.json".to_string();

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_fills_defaults() {
    let toml_str = r#"
[analysis]
num_addl_blocks_to_drop = 2
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.analysis.num_addl_blocks_to_drop, 2);
    assert_eq!(config.analysis.start_block, None);
    assert_eq!(config.report.output, "data.json");
}

#[test]
fn empty_config_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[analysis]\nstart_block = 10\ncease_block = 90\nstrict = true\n\n[report]\nnode_bin = \"/opt/nodeos\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.analysis.start_block, Some(10));
    assert_eq!(config.analysis.cease_block, Some(90));
    assert!(config.analysis.strict);
    assert_eq!(config.report.node_bin.as_deref(), Some("/opt/nodeos"));
}

#[test]
fn load_from_rejects_inverted_bounds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analysis]\nstart_block = 50\ncease_block = 10\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("start_block 50 is after"));
}

#[test]
fn load_from_rejects_bad_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analysis\nstart_block = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn save_to_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("blocklog").join("config.toml");

    let mut config = Config::default();
    config.analysis.num_addl_blocks_to_drop = 3;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
