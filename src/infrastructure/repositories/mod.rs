// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_favorite_source;

pub use error::map_sqlx;
pub use postgres_favorite_source::PostgresFavoriteSourceRepository;
