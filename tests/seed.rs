mod common;

use axum::{routing::get, Json, Router};
use common::{spawn_server, unreachable_seed_url};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Entry {
    id: u64,
    author: String,
    content: String,
    emotion: u8,
    create_date: i64,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    total: usize,
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    good_count: usize,
    bad_count: usize,
    good_ratio: Option<f64>,
}

/// Serves the given payload on `/comments`, standing in for the remote feed.
async fn spawn_mock_feed(payload: Value) -> String {
    let app = Router::new().route(
        "/comments",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/comments")
}

fn canned_comments(count: usize) -> Value {
    let records: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "postId": n / 5 + 1,
                "id": n + 1,
                "name": format!("comment {n}"),
                "email": format!("writer{n}@example.com"),
                "body": format!("seed body {n}"),
            })
        })
        .collect();
    Value::Array(records)
}

async fn get_entries(client: &Client, base_url: &str) -> EntriesResponse {
    client
        .get(format!("{base_url}/api/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn wait_for_total(client: &Client, base_url: &str, expected: usize) -> EntriesResponse {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let current = get_entries(client, base_url).await;
        if current.total == expected {
            return current;
        }
        if Instant::now() > deadline {
            panic!(
                "diary never reached {expected} entries, stuck at {}",
                current.total
            );
        }
        sleep(Duration::from_millis(100)).await;
    }
}

#[tokio::test]
async fn seed_loads_a_prefix_of_twenty_records() {
    let feed_url = spawn_mock_feed(canned_comments(25)).await;
    let server = spawn_server(&feed_url).await;
    let client = Client::new();

    let seeded = wait_for_total(&client, &server.base_url, 20).await;

    for (n, entry) in seeded.entries.iter().enumerate() {
        assert_eq!(entry.id, n as u64);
        assert_eq!(entry.author, format!("writer{n}@example.com"));
        assert_eq!(entry.content, format!("seed body {n}"));
        assert!((1..=5).contains(&entry.emotion));
        assert!(entry.create_date > 0);
    }

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.good_count + stats.bad_count, 20);
    assert!(stats.good_ratio.is_some());
}

#[tokio::test]
async fn seed_failure_leaves_the_diary_empty_and_usable() {
    let server = spawn_server(&unreachable_seed_url()).await;
    let client = Client::new();

    // Give the doomed fetch a moment to fail.
    sleep(Duration::from_millis(300)).await;
    let empty = get_entries(&client, &server.base_url).await;
    assert_eq!(empty.total, 0);

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.good_count, 0);
    assert_eq!(stats.bad_count, 0);
    assert_eq!(stats.good_ratio, None);

    // The diary still works; with no seed entries the allocator starts at 0.
    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&json!({ "author": "mira", "content": "fresh start", "emotion": 4 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let after: EntriesResponse = response.json().await.unwrap();
    assert_eq!(after.total, 1);
    assert_eq!(after.entries[0].id, 0);
}

#[tokio::test]
async fn seed_malformed_payload_leaves_the_diary_empty() {
    let app = Router::new().route("/comments", get(|| async { "definitely not json" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let server = spawn_server(&format!("http://{addr}/comments")).await;
    let client = Client::new();

    sleep(Duration::from_millis(300)).await;
    let entries = get_entries(&client, &server.base_url).await;
    assert_eq!(entries.total, 0);
}
