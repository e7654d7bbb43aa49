//! Where the bridge CSV comes from.

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read '{path}': {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to fetch '{url}': {source}")]
    Http { url: String, source: reqwest::Error },
    #[error("Unable to fetch '{url}': HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// A local file or a remote HTTP(S) resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    File(PathBuf),
    Url(String),
}

impl CsvSource {
    /// Reads the whole resource into memory.
    pub async fn fetch_text(&self) -> Result<String, Error> {
        log::debug!("Fetch CSV data from {self}");
        match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| Error::File {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Url(url) => fetch_url(url).await,
        }
    }
}

async fn fetch_url(url: &str) -> Result<String, Error> {
    let http_error = |source| Error::Http {
        url: url.to_owned(),
        source,
    };
    let response = reqwest::get(url).await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status,
        });
    }
    response.text().await.map_err(http_error)
}

impl FromStr for CsvSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_owned()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
