// src/application/commands/favorite_sources/create.rs
use super::FavoriteSourceCommandService;
use crate::{
    application::{
        dto::FavoriteSourceDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        favorite_source::{NewFavoriteSource, NewsApiKey, SourceId},
    },
};

const DUPLICATE_MESSAGE: &str =
    "favorite source with this sourceId and newsApiKey already exists";

pub struct CreateFavoriteSourceCommand {
    pub news_api_key: String,
    pub source_id: String,
}

impl CreateFavoriteSourceCommand {
    pub fn builder() -> CreateFavoriteSourceCommandBuilder {
        CreateFavoriteSourceCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateFavoriteSourceCommandBuilder {
    news_api_key: Option<String>,
    source_id: Option<String>,
}

impl CreateFavoriteSourceCommandBuilder {
    pub fn news_api_key(mut self, news_api_key: impl Into<String>) -> Self {
        self.news_api_key = Some(news_api_key.into());
        self
    }

    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    pub fn build(self) -> Result<CreateFavoriteSourceCommand, &'static str> {
        Ok(CreateFavoriteSourceCommand {
            news_api_key: self.news_api_key.ok_or("newsApiKey is required")?,
            source_id: self.source_id.ok_or("sourceId is required")?,
        })
    }
}

impl FavoriteSourceCommandService {
    pub async fn create_favorite_source(
        &self,
        command: CreateFavoriteSourceCommand,
    ) -> ApplicationResult<FavoriteSourceDto> {
        let news_api_key = NewsApiKey::new(command.news_api_key)?;
        let source_id = SourceId::new(command.source_id)?;

        if self
            .repo
            .find_by_key(&news_api_key, &source_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(DUPLICATE_MESSAGE));
        }

        let pending = NewFavoriteSource::new(news_api_key.clone(), source_id.clone());
        let created = match self.repo.add(pending).await {
            Ok(created) => created,
            // a concurrent request inserted the same key after the lookup above
            Err(DomainError::Conflict(_)) => {
                tracing::warn!(
                    news_api_key = %news_api_key,
                    source_id = %source_id,
                    "favorite source insert hit uniqueness constraint"
                );
                return Err(ApplicationError::conflict(DUPLICATE_MESSAGE));
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    news_api_key = %news_api_key,
                    source_id = %source_id,
                    "an error occurred while creating the favorite source"
                );
                return Err(ApplicationError::infrastructure(
                    "favorite source could not be created",
                ));
            }
        };

        tracing::info!(
            id = %created.id,
            news_api_key = %created.news_api_key,
            source_id = %created.source_id,
            "favorite source created"
        );
        Ok(created.into())
    }
}
