use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
