pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}
