pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid base64 payload in data uri {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

impl Error {
    pub fn is_base64_decode_error(&self) -> bool {
        matches!(self, Error::Base64Decode(_))
    }
}
