use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("Unable to fetch {url}: HTTP status {status}")]
    Status { url: String, status: u16 },
}

/// Fetches the bridge CSV as text.
pub async fn fetch_csv(url: &str) -> Result<String, Error> {
    let response = Request::get(url).send().await?;
    // ensure we've got 2xx status
    if !response.ok() {
        return Err(Error::Status {
            url: url.to_owned(),
            status: response.status(),
        });
    }
    Ok(response.text().await?)
}
