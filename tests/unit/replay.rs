use super::*;

use tempfile::tempdir;

#[test]
fn parse_actions_defaults_missing_value() {
    let actions = parse_actions(
        r#"[
            { "name": "file-explorer-create-folder", "value": "src" },
            { "name": "file-explorer-show-context-menu" }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        actions,
        vec![
            Action::new("file-explorer-create-folder", "src"),
            Action::new("file-explorer-show-context-menu", ""),
        ]
    );
}

#[test]
fn read_actions_from_bytes() {
    let data: &[u8] = br#"[{ "name": "create-file", "value": "a.ts" }]"#;

    let actions = read_actions(data).unwrap();
    assert_eq!(actions, vec![Action::new("create-file", "a.ts")]);
}

#[test]
fn invalid_json_is_invalid_data() {
    let err = read_actions(&b"{ not json"[..]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    let dir = tempdir().unwrap();
    let path = dir.path().join("actions.json");
    std::fs::write(&path, r#"{ "name": "create-file" }"#).unwrap();
    let err = load_actions(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn load_actions_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actions.json");
    std::fs::write(
        &path,
        r#"[
            { "name": "create-file", "value": "x.md" },
            { "name": "move-file", "value": "from:x.md;to:y.md" }
        ]"#,
    )
    .unwrap();

    let actions = load_actions(&path).unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1].value, "from:x.md;to:y.md");
}

#[test]
fn load_actions_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_actions(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "strict": false }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config, ExplorerConfig::lenient());

    std::fs::write(&path, r#"{ "strict": "yes" }"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
