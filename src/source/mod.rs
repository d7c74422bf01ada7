//! Catalog data sources.
//!
//! The catalog is loaded once at startup either from the dataset embedded in the binary or
//! from the lessons endpoint. Both implement [`CatalogSource`] and [`Source`] picks between
//! them based on [`Config`].

pub mod bundled;
pub mod remote;


use crate::{config::Config, config::DataSource, error::FetchError, model::course::Course};

pub use self::{bundled::BundledSource, remote::RemoteSource};

/// Produces the full list of courses for the catalog
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch(&self) -> Result<Vec<Course>, FetchError>;
}

/// The source selected by configuration
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Bundled(BundledSource),
    Remote(RemoteSource),
}

impl Source {
    pub fn from_config(config: &Config) -> Self {
        match config.data_source {
            DataSource::Bundled => Self::Bundled(BundledSource),
            DataSource::Remote => Self::Remote(RemoteSource::new(
                config.lessons_url(),
                config.image_host.clone(),
            )),
        }
    }
}

impl CatalogSource for Source {
    async fn fetch(&self) -> Result<Vec<Course>, FetchError> {
        match self {
            Self::Bundled(source) => source.fetch().await,
            Self::Remote(source) => source.fetch().await,
        }
    }
}
