use crate::domain::errors::DomainError;

const CNT_FAVORITE_SOURCE_KEY: &str = "favorite_sources_news_api_key_source_id_key";
const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_FAVORITE_SOURCE_KEY => DomainError::Conflict(
                        "favorite source with this sourceId and newsApiKey already exists".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DomainError::Conflict("unique constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
