// src/application/commands/favorite_sources/mod.rs
mod create;
mod service;

pub use create::{CreateFavoriteSourceCommand, CreateFavoriteSourceCommandBuilder};
pub use service::FavoriteSourceCommandService;
