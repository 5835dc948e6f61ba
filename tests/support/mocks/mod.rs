// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod favorite_source_repos;

// お気に入りソースリポジトリ
pub use favorite_source_repos::{
    BlindLookupFavoriteSourceRepo, FailingFavoriteSourceRepo, InMemoryFavoriteSourceRepo,
    UNAVAILABLE_DB_DETAIL, UnavailableFavoriteSourceRepo,
};
