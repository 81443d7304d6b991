use assert_cmd::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    std::io::Write::write_all(&mut f, contents.as_bytes()).expect("write");
    f
}

#[test]
fn validate_command_returns_0_for_valid_doc() {
    let doc = r#"
name: demo
steps:
  - url: https://jsonplaceholder.typicode.com/posts
  - url: https://example.test/echo
    method: POST
    body: '{"a": 1}'
"#;
    let f = write_temp(doc);

    Command::cargo_bin("reqchain")
        .unwrap()
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 steps"));
}

#[test]
fn validate_command_returns_2_for_invalid_doc() {
    let doc = r#"
steps:
  - url: ""
  - url: https://example.test/echo
    method: POST
    body: not json
"#;
    let f = write_temp(doc);

    Command::cargo_bin("reqchain")
        .unwrap()
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("$.steps[0].url"))
        .stderr(predicates::str::contains("$.steps[1].body"));
}

#[test]
fn validate_command_json_output_lists_errors() {
    let f = write_temp(r#"{ "steps": [] }"#);

    let assert = Command::cargo_bin("reqchain")
        .unwrap()
        .args(["validate", "--format", "json", f.path().to_string_lossy().as_ref()])
        .assert()
        .code(2);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(v["valid"], false);
    assert_eq!(v["format"], "Json");
    assert!(v["errors"][0].as_str().unwrap().starts_with("$.steps"));
}

#[test]
fn validate_command_returns_4_for_missing_file() {
    Command::cargo_bin("reqchain")
        .unwrap()
        .args(["validate", "/definitely/not/here.yaml"])
        .assert()
        .code(4);
}
