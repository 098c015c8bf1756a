use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}
