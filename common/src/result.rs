use crate::account::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sled(#[from] sled::Error),
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    AddrParse(#[from] std::net::AddrParseError),
    #[error(transparent)]
    FromHex(#[from] hex::FromHexError),
    #[error("Invalid Key Length")]
    InvalidKeyLength,
    #[error("User name is taken")]
    UserNameTaken,
    #[error("Username or password is wrong")]
    InvalidCredentials,
    #[error("Allowed origin must be an exact origin")]
    InvalidOrigin,
    #[error("Invalid Session")]
    InvalidSession,
    #[error("Invalid input in {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("{0}, Inner: {1}")]
    Context(String, Box<Error>),
}

impl Error {
    pub fn context<S: Into<String>>(self, context: S) -> Error {
        Error::Context(context.into(), Box::new(self))
    }

    /// Strips any [`Error::Context`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context(_, inner) => inner.root(),
            err => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait ResultExt<T> {
    fn context<S: Into<String>>(self, context: S) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context<S: Into<String>>(self, context: S) -> Result<T> {
        self.map_err(|e| e.into().context(context))
    }
}
