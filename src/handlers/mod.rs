pub mod post_handlers;
pub mod user_handlers;
