pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reducer;
pub mod seed;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use seed::{populate, resolve_seed_url};
pub use state::AppState;
