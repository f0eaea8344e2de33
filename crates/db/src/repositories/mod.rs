//! Read-only repositories for the catalog tables.
//!
//! Each repository is a zero-sized struct with associated async functions
//! taking a `&PgPool`.

pub mod anime_repo;
pub mod episode_repo;
pub mod season_repo;

pub use anime_repo::AnimeRepo;
pub use episode_repo::EpisodeRepo;
pub use season_repo::SeasonRepo;
