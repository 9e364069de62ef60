use std::time::Duration;

use mockito::mock;

use canopy::client::WalletApiClient;
use canopy::commands;
use canopy::panel::BufferPanel;

fn test_client(base: &str) -> WalletApiClient {
    WalletApiClient::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn status_fetch_renders_status_and_wallet_fragments() {
    let _index = mock("GET", "/s1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","address":"0xabc"}"#)
        .create();
    let _version = mock("GET", "/s1/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version":"1.2.3","build":"deadbeef","chain-id":"lupulella-2"}"#)
        .create();

    let client = test_client(&format!("{}/s1", mockito::server_url()));
    let mut panel = BufferPanel::new();

    commands::show_status(&client, &mut panel).await.unwrap();

    assert_eq!(panel.fragments(), ["Status: ok", "Wallet: 0xabc"]);
}

#[tokio::test]
async fn version_endpoint_is_fetched_even_though_unused() {
    let _index = mock("GET", "/s2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","address":"0xabc"}"#)
        .create();
    let version = mock("GET", "/s2/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"anything":"goes"}"#)
        .create();

    let client = test_client(&format!("{}/s2", mockito::server_url()));
    let mut panel = BufferPanel::new();

    commands::show_status(&client, &mut panel).await.unwrap();

    version.assert();
}

#[tokio::test]
async fn failed_status_fetch_leaves_the_panel_untouched() {
    let _index = mock("GET", "/s3")
        .with_status(500)
        .with_body("boom")
        .create();
    let _version = mock("GET", "/s3/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let client = test_client(&format!("{}/s3", mockito::server_url()));
    let mut panel = BufferPanel::new();

    assert!(commands::show_status(&client, &mut panel).await.is_err());
    assert!(panel.fragments().is_empty());
}

#[tokio::test]
async fn failed_version_fetch_also_fails_the_whole_operation() {
    let _index = mock("GET", "/s4")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","address":"0xabc"}"#)
        .create();
    let _version = mock("GET", "/s4/version")
        .with_status(500)
        .with_body("boom")
        .create();

    let client = test_client(&format!("{}/s4", mockito::server_url()));
    let mut panel = BufferPanel::new();

    assert!(commands::show_status(&client, &mut panel).await.is_err());
    assert!(panel.fragments().is_empty());
}

#[tokio::test]
async fn unreachable_api_is_an_error() {
    // nothing listens on port 1
    let client = test_client("http://127.0.0.1:1");
    let mut panel = BufferPanel::new();

    assert!(commands::show_status(&client, &mut panel).await.is_err());
    assert!(panel.fragments().is_empty());
}

#[tokio::test]
async fn repeated_fetches_append_without_clearing() {
    let _index = mock("GET", "/s5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","address":"0xabc"}"#)
        .create();
    let _version = mock("GET", "/s5/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let client = test_client(&format!("{}/s5", mockito::server_url()));
    let mut panel = BufferPanel::new();

    commands::show_status(&client, &mut panel).await.unwrap();
    commands::show_status(&client, &mut panel).await.unwrap();

    assert_eq!(
        panel.fragments(),
        ["Status: ok", "Wallet: 0xabc", "Status: ok", "Wallet: 0xabc"]
    );
}

#[tokio::test]
async fn non_json_status_body_is_an_error() {
    let _index = mock("GET", "/s6")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();
    let _version = mock("GET", "/s6/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let client = test_client(&format!("{}/s6", mockito::server_url()));
    let mut panel = BufferPanel::new();

    assert!(commands::show_status(&client, &mut panel).await.is_err());
    assert!(panel.fragments().is_empty());
}
