// src/presentation/http/controllers/mod.rs
pub mod favorite_sources;
