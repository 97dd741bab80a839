pub mod callback;
pub mod dtos;
pub mod handlers;

pub use dtos::{CallbackAck, SkillRequest, SkillResponse};
pub use handlers::news_digest;
