pub mod favorite_sources;

pub use favorite_sources::{FavoriteSourceDto, FavoriteSourceLookup};
