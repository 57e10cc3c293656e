use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to lock state: poisoned"))]
    LockPoisoned,

    #[snafu(display("No view registered for path {path:?}"))]
    UnknownRoute { path: String },

    #[snafu(display("View refused to mount: {message}"))]
    ViewPrepare { message: String },
}

impl Error {
    /// Shorthand for views signalling a failed `prepare`.
    pub fn prepare(message: impl Into<String>) -> Self {
        Error::ViewPrepare {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
