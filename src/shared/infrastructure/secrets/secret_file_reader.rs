use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_SECRETS_DIRECTORY: &str = "/run/secrets";

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("unable to read secret {name} from {path}: {source}")]
    Unreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a mounted secret (docker/k8s style) from `/run/secrets`.
pub async fn read_secret(name: &str) -> Result<String, SecretError> {
    read_secret_from(Path::new(DEFAULT_SECRETS_DIRECTORY), name).await
}

pub async fn read_secret_from(directory: &Path, name: &str) -> Result<String, SecretError> {
    let path = directory.join(name);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| SecretError::Unreadable {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

    Ok(raw.strip_suffix('\n').unwrap_or(&raw).to_string())
}
