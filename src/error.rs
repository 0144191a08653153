use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Missing or unusable dictionary resource at startup.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// Malformed caller-supplied letter pool.
    #[error("letter pool error: {0}")]
    Pool(String),
}
