//! Marvel comics catalog client.
//!
//! Reads paged comics and searches characters through the public Marvel API.

pub mod client;
pub mod types;

pub use client::{api_config, ApiOptions, MarvelClient, MARVEL_API};
pub use types::{Character, Characters, Comic, Comics, DataContainer, Image, ImageVariant, Path};
