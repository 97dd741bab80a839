pub mod app_state;
pub mod cafe;
pub mod config;
pub mod digest;
pub mod feed;
pub mod fetcher;
pub mod health;
pub mod models;
pub mod router;
pub mod skill;
pub mod sources;
pub mod text;

pub use app_state::AppState;
pub use router::build_router;
