use std::num::{ParseFloatError, ParseIntError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected `kind:value`, got `{0}`")]
    MissingKind(String),

    #[error("Unknown kind `{0}` [expected one of: i8, i16, i32, i64, f64, text]")]
    UnknownKind(String),

    #[error("Cannot parse `{value}` as {kind}")]
    InvalidInt {
        kind: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Cannot parse `{value}` as f64")]
    InvalidFloat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid hex record `{input}`")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },
}
