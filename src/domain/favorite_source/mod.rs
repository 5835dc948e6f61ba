// src/domain/favorite_source/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{FavoriteSource, NewFavoriteSource};
pub use repository::FavoriteSourceRepository;
pub use value_objects::{FavoriteSourceId, NewsApiKey, SourceId};
