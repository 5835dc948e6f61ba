pub mod favorite_sources;
