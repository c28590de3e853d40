use std::path::PathBuf;

use crate::types::UserId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: UserId },

    /// A data source (presence log, user directory) could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed user directory: {0}")]
    Directory(String),
}

impl CoreError {
    pub fn user_not_found(id: UserId) -> Self {
        Self::NotFound { entity: "User", id }
    }
}
