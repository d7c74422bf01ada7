use crate::{error::FetchError, model::course::Course, source::CatalogSource};

const BUNDLED_LESSONS: &str = include_str!("../../assets/data/lessons.json");

/// Courses shipped inside the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn courses(&self) -> Result<Vec<Course>, FetchError> {
        Ok(serde_json::from_str(BUNDLED_LESSONS)?)
    }
}

impl CatalogSource for BundledSource {
    async fn fetch(&self) -> Result<Vec<Course>, FetchError> {
        self.courses()
    }
}
