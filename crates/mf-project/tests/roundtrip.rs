use mf_project::samples;
use mf_project::{ProjectError, load, load_json, load_yaml, save_json, save_yaml};

#[test]
fn roundtrip_yaml_classic() {
    let file = samples::classic();
    let path = std::env::temp_dir().join("mf_project_roundtrip_classic.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_sample() {
    let file = samples::sample();
    let path = std::env::temp_dir().join("mf_project_roundtrip_sample.json");

    save_json(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn save_refuses_invalid_network() {
    let mut file = samples::classic();
    file.sink = file.source;
    let path = std::env::temp_dir().join("mf_project_invalid.yaml");

    assert!(matches!(
        save_yaml(&path, &file).unwrap_err(),
        ProjectError::Validation(_)
    ));
}

#[test]
fn unknown_extension_rejected() {
    let path = std::env::temp_dir().join("mf_project_network.txt");
    assert!(matches!(
        load(&path).unwrap_err(),
        ProjectError::UnsupportedFormat { .. }
    ));
}

#[test]
fn missing_edges_default_to_empty() {
    let path = std::env::temp_dir().join("mf_project_no_edges.json");
    std::fs::write(
        &path,
        r#"{ "version": 1, "name": "bare", "node_count": 2, "source": 0, "sink": 1 }"#,
    )
    .unwrap();

    let loaded = load_json(&path).unwrap();
    assert!(loaded.edges.is_empty());
}
