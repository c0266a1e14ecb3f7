//! Client tests against a real listener.

use launch_dashboard::api::create_router;
use launch_dashboard::client::{ClientError, DashboardClient};
use launch_dashboard::data::LaunchTable;
use launch_dashboard::models::*;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/launches.csv");

/// Spawn the dashboard on an ephemeral port and return its root URL.
async fn spawn_server() -> String {
    let table = LaunchTable::load(FIXTURE).expect("Failed to load fixture");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, create_router(table))
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn health_reports_record_count() {
    let client = DashboardClient::new(spawn_server().await);

    let health = client.health().await.expect("Health check failed");

    assert_eq!(health.status, "ok");
    assert_eq!(health.records, 12);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let url = format!("{}/", spawn_server().await);
    let client = DashboardClient::new(url);

    let controls = client.controls().await.expect("Controls request failed");

    assert_eq!(controls.payload_slider.value, [0.0, 9600.0]);
}

#[tokio::test]
async fn success_pie_for_site() {
    let client = DashboardClient::new(spawn_server().await);

    let pie = client
        .success_pie(&SiteFilter::Site(LaunchSite::CcafsSlc40))
        .await
        .expect("Pie request failed");

    assert_eq!(pie.count_of("1"), 2);
    assert_eq!(pie.count_of("0"), 1);
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    let client = DashboardClient::new(format!("http://{}", addr));

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
