pub mod auth;
pub mod blog;
pub mod content;
pub mod repository;
pub mod slug;
pub mod tour;
