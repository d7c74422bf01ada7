pub mod builder;
pub mod error;
pub mod fixtures;

pub use builder::LessonsBuilder;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::lesson::factory, LessonsBuilder, TestError};
}
