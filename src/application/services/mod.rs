// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::favorite_sources::FavoriteSourceCommandService,
        ports::localization::MessageLocalizer,
        queries::favorite_sources::FavoriteSourceQueryService,
    },
    domain::favorite_source::FavoriteSourceRepository,
};

pub struct ApplicationServices {
    pub favorite_source_commands: Arc<FavoriteSourceCommandService>,
    pub favorite_source_queries: Arc<FavoriteSourceQueryService>,
    localizer: Arc<dyn MessageLocalizer>,
}

impl ApplicationServices {
    pub fn new(
        favorite_source_repo: Arc<dyn FavoriteSourceRepository>,
        localizer: Arc<dyn MessageLocalizer>,
    ) -> Self {
        let favorite_source_commands = Arc::new(FavoriteSourceCommandService::new(Arc::clone(
            &favorite_source_repo,
        )));
        let favorite_source_queries = Arc::new(FavoriteSourceQueryService::new(Arc::clone(
            &favorite_source_repo,
        )));

        Self {
            favorite_source_commands,
            favorite_source_queries,
            localizer,
        }
    }

    pub fn localizer(&self) -> Arc<dyn MessageLocalizer> {
        Arc::clone(&self.localizer)
    }
}
