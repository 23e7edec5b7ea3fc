use thiserror::Error;
use vthgate_rs::selector;

pub type VthGateTuiResult<T> = Result<T, VthGateTuiError>;

#[derive(Error, Debug)]
pub enum VthGateTuiError {
    #[error("vthgate_tui: IO error: {}", _0)]
    IoError(std::io::Error),
    #[error("{}", _0)]
    Sim(vthgate_sim::Error),
}

impl From<std::io::Error> for VthGateTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<vthgate_sim::Error> for VthGateTuiError {
    fn from(error: vthgate_sim::Error) -> Self {
        Self::Sim(error)
    }
}

impl VthGateTuiError {
    /// Message shown to the user when a run ends with this error.
    pub fn user_message(&self, vdd: f64) -> String {
        match self {
            Self::Sim(vthgate_sim::Error::Engine(vthgate_rs::Error::Validation(e))) => match e {
                selector::Error::NotANumber(_) => {
                    "Please enter a valid number for the threshold voltage".to_string()
                }
                selector::Error::OutOfRange { .. } => format!(
                    "Invalid threshold voltage. Please enter a value between 0 and {vdd}V"
                ),
            },
            other => format!("An error occurred: {other}"),
        }
    }
}
