use crate::models::{now_millis, Entry, EMOTION_MAX, EMOTION_MIN};
use crate::reducer::DiaryAction;
use crate::state::{AppState, DiaryData};
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use tracing::{info, warn};

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/comments";

/// Only this many records from the front of the remote payload become
/// diary entries.
pub const SEED_PREFIX: usize = 20;

/// The slice of a remote record the diary cares about; everything else in
/// the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct SeedRecord {
    pub email: String,
    pub body: String,
}

pub fn resolve_seed_url() -> String {
    env::var("DIARY_SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string())
}

pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<SeedRecord>, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// One-shot, best-effort population of the diary at startup. A failed or
/// malformed response is logged and the diary simply stays empty; there is
/// no retry and nothing is surfaced to the user.
pub async fn populate(state: AppState, url: String) {
    let client = Client::new();
    match fetch_records(&client, &url).await {
        Ok(records) => {
            let mut data = state.data.lock().await;
            let entries = seed_entries(records, &mut data, &mut rand::thread_rng());
            let count = entries.len();
            data.apply(DiaryAction::Init { data: entries });
            info!("seeded {count} diary entries from {url}");
        }
        Err(err) => warn!("seed fetch from {url} failed, starting with an empty diary: {err}"),
    }
}

/// Maps remote records onto entries: `email` becomes the author, `body` the
/// content, and each entry gets a rolled emotion plus a fresh id and
/// timestamp.
fn seed_entries(
    records: Vec<SeedRecord>,
    data: &mut DiaryData,
    rng: &mut impl Rng,
) -> Vec<Entry> {
    records
        .into_iter()
        .take(SEED_PREFIX)
        .map(|record| Entry {
            id: data.allocate_id(),
            author: record.email,
            content: record.body,
            emotion: rng.gen_range(EMOTION_MIN..=EMOTION_MAX),
            create_date: now_millis(),
        })
        .collect()
}
