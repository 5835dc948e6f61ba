// tests/support/builders.rs
use catchup_platform::domain::favorite_source::{
    FavoriteSource, FavoriteSourceId, NewsApiKey, SourceId,
};

pub struct FavoriteSourceBuilder {
    id: i64,
    news_api_key: String,
    source_id: String,
}

impl FavoriteSourceBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            news_api_key: "abc".into(),
            source_id: "bbc-news".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn news_api_key(mut self, news_api_key: impl Into<String>) -> Self {
        self.news_api_key = news_api_key.into();
        self
    }

    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    pub fn build(self) -> FavoriteSource {
        FavoriteSource {
            id: FavoriteSourceId::new(self.id).unwrap(),
            news_api_key: NewsApiKey::new(self.news_api_key).unwrap(),
            source_id: SourceId::new(self.source_id).unwrap(),
        }
    }
}

impl Default for FavoriteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
