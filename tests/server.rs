use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tempfile::TempDir;

fn typeahead_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("typeahead");
    path
}

fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn setup_server_env(port: u16) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("typeahead.toml");
    fs::write(
        &config_path,
        format!(
            "[server]\nbind = \"127.0.0.1:{}\"\n\n[logging]\nlevel = \"warn\"\n",
            port
        ),
    )
    .unwrap();
    (tmp, config_path)
}

/// Kills the server when the test ends, pass or fail.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.0.kill().ok();
        self.0.wait().ok();
    }
}

fn start_server(config_path: &Path, port: u16) -> ServerGuard {
    let child = Command::new(typeahead_binary())
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .arg("serve")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to start server: {}", e));
    let guard = ServerGuard(child);
    wait_for_server(port);
    guard
}

/// Wait for the server to be ready by polling the health endpoint.
fn wait_for_server(port: u16) {
    let url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        std::thread::sleep(std::time::Duration::from_millis(100));
        if let Ok(resp) = reqwest::blocking::get(&url) {
            if resp.status().is_success() {
                return;
            }
        }
    }
    panic!("Server did not become ready within 5 seconds");
}

#[test]
fn test_server_health() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let resp = reqwest::blocking::get(format!("http://127.0.0.1:{}/health", port)).unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[test]
fn test_server_index_page() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let resp = reqwest::blocking::get(format!("http://127.0.0.1:{}/", port)).unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().unwrap();
    assert!(body.contains("hx-get=\"/search\""));
}

#[test]
fn test_server_search_fragment() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let resp =
        reqwest::blocking::get(format!("http://127.0.0.1:{}/search?q=eul", port)).unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().unwrap();
    assert!(body.contains("Leonhard Euler"));
    assert!(!body.contains("Isaac Newton"));
    assert!(!body.contains("<html"));
}

#[test]
fn test_server_search_missing_q_is_too_short() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let resp = reqwest::blocking::get(format!("http://127.0.0.1:{}/search", port)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().unwrap().contains("Type at least 3 characters"));
}

#[test]
fn test_server_api_search() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let client = reqwest::blocking::Client::new();
    let url = format!("http://127.0.0.1:{}/api/search", port);

    let body: serde_json::Value = client
        .get(&url)
        .query(&[("q", "NEWTON")])
        .send()
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(body["query"], "NEWTON");
    assert_eq!(body["queryTooShort"], false);
    assert_eq!(body["matches"].as_array().unwrap().len(), 1);
    assert_eq!(body["matches"][0]["name"], "Isaac Newton");

    let body: serde_json::Value = client
        .get(&url)
        .query(&[("q", "eu")])
        .send()
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(body["queryTooShort"], true);
    assert!(body["matches"].as_array().unwrap().is_empty());
}

#[test]
fn test_server_search_duplicate_q_is_bad_request() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_server_env(port);
    let _server = start_server(&config_path, port);

    let resp =
        reqwest::blocking::get(format!("http://127.0.0.1:{}/search?q=a&q=b", port)).unwrap();
    assert_eq!(resp.status(), 400);
}
