use std::sync::Arc;

use crate::domain::favorite_source::FavoriteSourceRepository;

pub struct FavoriteSourceQueryService {
    pub(super) repo: Arc<dyn FavoriteSourceRepository>,
}

impl FavoriteSourceQueryService {
    pub fn new(repo: Arc<dyn FavoriteSourceRepository>) -> Self {
        Self { repo }
    }
}
