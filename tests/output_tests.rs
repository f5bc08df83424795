use gendiff::{compare, format_diff, parse_file, resolve, DiffTree, OutputFormat};
use std::fs;
use std::path::Path;

fn fixture_tree(file1: &str, file2: &str) -> DiffTree {
    let dir = Path::new("tests/fixtures");
    let old = parse_file(&dir.join(file1)).unwrap();
    let new = parse_file(&dir.join(file2)).unwrap();
    compare(&old, &new).unwrap()
}

fn expected(name: &str) -> String {
    fs::read_to_string(Path::new("tests/fixtures").join(name))
        .unwrap()
        .trim_end()
        .to_string()
}

#[test]
fn test_stylish_matches_fixture() {
    for (file1, file2) in [
        ("file1.json", "file2.json"),
        ("file1.yml", "file2.yaml"),
        ("file1.json", "file2.yaml"),
    ] {
        let tree = fixture_tree(file1, file2);
        let output = format_diff(&tree, OutputFormat::Stylish).unwrap();
        assert_eq!(output, expected("stylish.txt"), "{} vs {}", file1, file2);
    }
}

#[test]
fn test_plain_matches_fixture() {
    for (file1, file2) in [("file1.json", "file2.json"), ("file1.yml", "file2.json")] {
        let tree = fixture_tree(file1, file2);
        let output = format_diff(&tree, OutputFormat::Plain).unwrap();
        assert_eq!(output, expected("plain.txt"), "{} vs {}", file1, file2);
    }
}

#[test]
fn test_flat_stylish() {
    let tree = fixture_tree("flat1.json", "flat2.json");
    let output = format_diff(&tree, OutputFormat::Stylish).unwrap();
    assert_eq!(
        output,
        "{\n  + data: data2\n  - follow: false\n    host: hexlet.io\n  - proxy: 123.234.53.22\n  - timeout: 50\n  + timeout: 20\n  + verbose: true\n}"
    );
}

#[test]
fn test_identical_documents() {
    let tree = fixture_tree("flat1.json", "flat1.json");
    assert_eq!(format_diff(&tree, OutputFormat::Plain).unwrap(), "");
    assert_eq!(
        format_diff(&tree, OutputFormat::Stylish).unwrap(),
        "{\n    follow: false\n    host: hexlet.io\n    proxy: 123.234.53.22\n    timeout: 50\n}"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let tree = fixture_tree("file1.json", "file2.yaml");
    for format in OutputFormat::ALL {
        let first = format_diff(&tree, format).unwrap();
        let second = format_diff(&tree, format).unwrap();
        assert_eq!(first, second, "{} output differs between runs", format);
    }
}

#[test]
fn test_json_encodes_every_node() {
    let tree = fixture_tree("file1.json", "file2.json");
    let render = resolve("json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&render(&tree).unwrap()).unwrap();

    let diff = value["diff"].as_array().unwrap();
    assert_eq!(diff.len(), 4);
    assert_eq!(diff[2]["key"], "group2");
    assert_eq!(diff[2]["status"], "removed");
    assert_eq!(diff[2]["children"][0]["value"], 12345);

    let nest = diff[1]["children"]
        .as_array()
        .unwrap()
        .iter()
        .find(|node| node["key"] == "nest")
        .unwrap();
    assert_eq!(nest["status"], "updated");
    assert_eq!(nest["fromChildren"][0]["key"], "key");
    assert_eq!(nest["to"], "str");
    assert!(nest.get("from").is_none());

    assert_eq!(value["stats"]["updated"], 4);
}
