// Integration tests for the Flashboard API
// Run with: cargo test --test integration_test -- --ignored
// Requires a running server: cargo run -p flashboard-api

use flashboard_contracts::{Event, StatsSummary};

const API_BASE_URL: &str = "http://localhost:8080";
const EPSILON: f64 = 1e-9;

#[tokio::test]
#[ignore] // Needs a live server
async fn test_read_only_endpoints() {
    let client = reqwest::Client::new();

    // Health probe
    let health = client
        .get(format!("{}/health", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(health.status(), 200);
    let body: serde_json::Value = health.json().await.expect("Failed to parse health body");
    assert_eq!(body["status"], "ok");

    // Full event list
    let list_response = client
        .get(format!("{}/events", API_BASE_URL))
        .send()
        .await
        .expect("Failed to list events");
    assert_eq!(list_response.status(), 200);
    let events: Vec<Event> = list_response.json().await.expect("Failed to parse events");
    println!("Found {} event(s)", events.len());
    assert_eq!(events.len(), 5);

    // Summary matches the list arithmetically
    let summary_response = client
        .get(format!("{}/stats/summary", API_BASE_URL))
        .send()
        .await
        .expect("Failed to fetch summary");
    assert_eq!(summary_response.status(), 200);
    let summary: StatsSummary = summary_response
        .json()
        .await
        .expect("Failed to parse summary");

    let liters: f64 = events.iter().map(|e| e.liters).sum();
    let revenue: f64 = events.iter().map(|e| e.revenue_eur).sum();
    assert!((summary.total_liters - liters).abs() < EPSILON);
    assert!((summary.total_revenue_eur - revenue).abs() < EPSILON);
    assert!((summary.total_liters - 2236.4).abs() < EPSILON);
    assert!((summary.total_revenue_eur - 116250.0).abs() < EPSILON);
    assert_eq!(
        summary.distinct_venues,
        vec!["Orange Vélodrome", "Marseille", "Montpellier", "Nantes"]
    );
}
