use serde_json::Value;

use crate::{fixtures::lesson::factory, TestError};

/// Builds a lessons API response body.
///
/// # Example
/// ```
/// use storefront_test_utils::LessonsBuilder;
///
/// let body = LessonsBuilder::new().with_lesson(1, 5, 10.0).build().unwrap();
/// assert!(body.starts_with('['));
/// ```
#[derive(Default)]
pub struct LessonsBuilder {
    lessons: Vec<Value>,
}

impl LessonsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lesson(mut self, id: u32, stock: u32, price: f64) -> Self {
        self.lessons.push(factory::mock_lesson(id, stock, price));
        self
    }

    pub fn with_legacy_lesson(mut self, id: u32, spaces: u32, price: f64) -> Self {
        self.lessons
            .push(factory::mock_legacy_lesson(id, spaces, price));
        self
    }

    /// Adds `count` lessons with sequential IDs starting after those already added
    pub fn with_lessons(mut self, count: u32) -> Self {
        let start = self.lessons.len() as u32 + 1;
        for id in start..start + count {
            self.lessons.push(factory::mock_lesson(id, 5, 10.0 * id as f64));
        }
        self
    }

    /// Serializes the lessons as a JSON array
    pub fn build(self) -> Result<String, TestError> {
        Ok(serde_json::to_string(&Value::Array(self.lessons))?)
    }
}
