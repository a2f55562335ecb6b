use crate::models::{now_millis, Entry};

/// An intent against the diary, resolved by [`transition`]. The enum is
/// closed, so there is no catch-all arm: an action kind that the diary does
/// not understand cannot be constructed in the first place.
#[derive(Debug, Clone)]
pub enum DiaryAction {
    /// Replace the whole list with `data`, verbatim. Used once by the seed
    /// loader, but idempotent if applied again.
    Init { data: Vec<Entry> },
    /// Prepend a new entry built from the fields, the caller-allocated id,
    /// and a `create_date` stamped at transition time.
    Create {
        author: String,
        content: String,
        emotion: u8,
        id: u64,
    },
    /// Drop the entry with `target_id`. Identity when absent.
    Remove { target_id: u64 },
    /// Replace the content of the entry with `target_id`. Identity when
    /// absent; never touches any other field.
    Edit { target_id: u64, new_content: String },
}

/// Resolves one action into the next entry list. Takes the current list by
/// value and never fails; callers replace their copy with the return value.
pub fn transition(state: Vec<Entry>, action: DiaryAction) -> Vec<Entry> {
    match action {
        DiaryAction::Init { data } => data,
        DiaryAction::Create {
            author,
            content,
            emotion,
            id,
        } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.push(Entry {
                id,
                author,
                content,
                emotion,
                create_date: now_millis(),
            });
            next.extend(state);
            next
        }
        DiaryAction::Remove { target_id } => state
            .into_iter()
            .filter(|entry| entry.id != target_id)
            .collect(),
        DiaryAction::Edit {
            target_id,
            new_content,
        } => {
            let mut next = state;
            if let Some(entry) = next.iter_mut().find(|entry| entry.id == target_id) {
                entry.content = new_content;
            }
            next
        }
    }
}
