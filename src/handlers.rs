use crate::errors::AppError;
use crate::models::{
    DiaryStats, EditEntryRequest, EntriesResponse, NewEntryRequest, EMOTION_MAX, EMOTION_MIN,
};
use crate::reducer::DiaryAction;
use crate::state::{AppState, DiaryData};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut data = state.data.lock().await;
    let stats = data.stats();
    Html(render_index(data.entries().len(), &stats))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<EntriesResponse> {
    let data = state.data.lock().await;
    Json(to_response(&data))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<EntriesResponse>, AppError> {
    let author = payload.author.trim();
    let content = payload.content.trim();
    if author.is_empty() {
        return Err(AppError::bad_request("author must not be empty"));
    }
    if content.is_empty() {
        return Err(AppError::bad_request("content must not be empty"));
    }
    if !(EMOTION_MIN..=EMOTION_MAX).contains(&payload.emotion) {
        return Err(AppError::bad_request(format!(
            "emotion must be between {EMOTION_MIN} and {EMOTION_MAX}"
        )));
    }

    let mut data = state.data.lock().await;
    // The id is only burned once the request has passed validation.
    let id = data.allocate_id();
    data.apply(DiaryAction::Create {
        author: author.to_string(),
        content: content.to_string(),
        emotion: payload.emotion,
        id,
    });

    Ok(Json(to_response(&data)))
}

/// Unknown ids fall through as a no-op; the caller still gets the current
/// list back with a 200.
pub async fn edit_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<EditEntryRequest>,
) -> Json<EntriesResponse> {
    let mut data = state.data.lock().await;
    data.apply(DiaryAction::Edit {
        target_id: id,
        new_content: payload.content,
    });

    Json(to_response(&data))
}

/// Same no-op contract as [`edit_entry`] for unknown ids.
pub async fn remove_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<EntriesResponse> {
    let mut data = state.data.lock().await;
    data.apply(DiaryAction::Remove { target_id: id });

    Json(to_response(&data))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<DiaryStats> {
    let mut data = state.data.lock().await;
    Json(data.stats())
}

fn to_response(data: &DiaryData) -> EntriesResponse {
    EntriesResponse {
        total: data.entries().len(),
        entries: data.entries().to_vec(),
    }
}
