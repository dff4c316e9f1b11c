mod common;
use common::*;

#[tokio::test]
async fn check_healthz() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/healthz", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
