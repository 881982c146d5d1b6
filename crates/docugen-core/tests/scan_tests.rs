use docugen_core::config::ScanConfig;
use docugen_core::scan::scan_directory;
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_collects_supported_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "index.js", "function main() {}");
    write(root, "lib/util.py", "def helper():\n    pass\n");
    write(root, "README.md", "# readme");
    write(root, "Cargo.toml", "[package]");

    let files = scan_directory(root, &ScanConfig::default()).unwrap();

    assert_eq!(files, vec![root.join("index.js"), root.join("lib/util.py")]);
}

#[test]
fn test_excluded_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "node_modules/dep/index.js", "function dep() {}");
    write(root, "build/out.js", "function out() {}");
    write(root, "src/app.ts", "export class App {}");

    let files = scan_directory(root, &ScanConfig::default()).unwrap();

    assert_eq!(files, vec![root.join("src/app.ts")]);
}

#[test]
fn test_hidden_entries_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, ".config/setup.js", "function setup() {}");
    write(root, ".eslintrc.js", "module.exports = config");
    write(root, "main.go", "package main\n");

    let files = scan_directory(root, &ScanConfig::default()).unwrap();

    assert_eq!(files, vec![root.join("main.go")]);
}

#[test]
fn test_oversized_files_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "small.c", "int main() {}");
    write(root, "huge.c", &"x".repeat(2048));

    let config = ScanConfig {
        max_file_size: 1024,
        ..Default::default()
    };
    let files = scan_directory(root, &config).unwrap();

    assert_eq!(files, vec![root.join("small.c")]);
}

#[test]
fn test_custom_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a.java", "class A {}");
    write(root, "b.cpp", "class B {};");

    let config = ScanConfig {
        include_extensions: vec!["java".to_string()],
        ..Default::default()
    };
    let files = scan_directory(root, &config).unwrap();

    assert_eq!(files, vec![root.join("a.java")]);
}
