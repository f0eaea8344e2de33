//! Catalog services used by the handlers.
//!
//! - [`fetcher`] -- Admin-only single-row lookups.
//! - [`assembler`] -- Public seasons-with-episodes views that never fail.

pub mod assembler;
pub mod fetcher;

pub use assembler::{assemble_seasons, load_anime_page, AnimeWithSeasons};
pub use fetcher::{fetch_entity, CatalogEntity};
