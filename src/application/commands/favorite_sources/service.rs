// src/application/commands/favorite_sources/service.rs
use std::sync::Arc;

use crate::domain::favorite_source::FavoriteSourceRepository;

pub struct FavoriteSourceCommandService {
    pub(super) repo: Arc<dyn FavoriteSourceRepository>,
}

impl FavoriteSourceCommandService {
    pub fn new(repo: Arc<dyn FavoriteSourceRepository>) -> Self {
        Self { repo }
    }
}
