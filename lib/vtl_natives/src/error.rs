#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid input: {msg}")]
    InvalidInput { msg: String },
}

pub fn invalid_input(msg: impl Into<String>) -> anyhow::Error {
    Error::InvalidInput { msg: msg.into() }.into()
}
