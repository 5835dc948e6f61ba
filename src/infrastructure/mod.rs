pub mod database;
pub mod localization;
pub mod repositories;
