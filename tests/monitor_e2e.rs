use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/redwood-city/huxley-apartments";

fn watch_cmd() -> Command {
    Command::cargo_bin("vacancy-watch").expect("binary builds")
}

async fn mock_listing(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn available_listing_exits_zero_with_banner() {
    let server = MockServer::start().await;
    let body = "<h2>2 Bed Suite</h2><span>From $2,500+</span>";
    mock_listing(&server, ResponseTemplate::new(200).set_body_string(body)).await;

    watch_cmd()
        .env("WATCH_URL", format!("{}{}", server.uri(), LISTING_PATH))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Two-bedroom available: True"))
        .stdout(predicate::str::contains("Price found: $2,500+"))
        .stdout(predicate::str::contains("*** TWO-BEDROOM AVAILABLE! ***"));
}

#[tokio::test]
async fn coming_soon_listing_exits_one_without_banner() {
    let server = MockServer::start().await;
    let body = "<div>2 Bed floor plans - Coming soon</div>";
    mock_listing(&server, ResponseTemplate::new(200).set_body_string(body)).await;

    watch_cmd()
        .env("WATCH_URL", format!("{}{}", server.uri(), LISTING_PATH))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Two-bedroom available: False"))
        .stdout(predicate::str::contains("Shows 'Coming soon'"))
        .stdout(predicate::str::contains("No two-bedroom units available yet"))
        .stdout(predicate::str::contains("*** TWO-BEDROOM AVAILABLE! ***").not());
}

#[tokio::test]
async fn server_error_exits_two() {
    let server = MockServer::start().await;
    mock_listing(&server, ResponseTemplate::new(500)).await;

    watch_cmd()
        .env("WATCH_URL", format!("{}{}", server.uri(), LISTING_PATH))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("application error"))
        .stdout(predicate::str::contains("Two-bedroom available").not());
}

#[tokio::test]
async fn unreachable_server_exits_two() {
    let server = MockServer::start().await;
    let dead_url = format!("{}{}", server.uri(), LISTING_PATH);
    drop(server);

    watch_cmd()
        .env("WATCH_URL", dead_url)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("application error"));
}

#[tokio::test]
async fn slow_server_times_out_and_exits_two() {
    let server = MockServer::start().await;
    let template = ResponseTemplate::new(200)
        .set_body_string("<h2>2 Bed Suite</h2><span>$2,500+</span>")
        .set_delay(Duration::from_secs(3));
    mock_listing(&server, template).await;

    watch_cmd()
        .env("WATCH_URL", format!("{}{}", server.uri(), LISTING_PATH))
        .args(["check", "--timeout-secs", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Two-bedroom available").not())
        .stderr(predicate::str::contains("application error"));
}

#[tokio::test]
async fn json_output_round_trips() {
    let server = MockServer::start().await;
    let body = "<h2>2 Bed Suite</h2><span>From $2,500+</span>";
    mock_listing(&server, ResponseTemplate::new(200).set_body_string(body)).await;

    let url = format!("{}{}", server.uri(), LISTING_PATH);
    let output = watch_cmd()
        .env("WATCH_URL", &url)
        .args(["check", "--json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(record["url"], url.as_str());
    assert_eq!(record["available"], true);
    assert_eq!(record["evidence"][0], "Price found: $2,500+");
}

#[tokio::test]
async fn url_flag_overrides_environment() {
    let server = MockServer::start().await;
    let body = "<li>2 BR Available now</li>";
    mock_listing(&server, ResponseTemplate::new(200).set_body_string(body)).await;

    let target = format!("{}{}", server.uri(), LISTING_PATH);
    watch_cmd()
        .env("WATCH_URL", "http://127.0.0.1:9/unused")
        .args(["check", "--url", target.as_str()])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Available units text found"));
}
