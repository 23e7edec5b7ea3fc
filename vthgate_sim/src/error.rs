pub type VthGateSimResult<T> = Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", _0)]
    Engine(vthgate_rs::Error),
    #[error("IO error: {}", _0)]
    Io(std::io::Error),
    #[error("invalid configuration: {}", _0)]
    InvalidConfig(String),
}

impl Error {
    /// Whether the error is a rejected threshold voltage.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Engine(e) if e.is_validation())
    }
}

impl From<vthgate_rs::Error> for Error {
    fn from(value: vthgate_rs::Error) -> Self {
        Self::Engine(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
