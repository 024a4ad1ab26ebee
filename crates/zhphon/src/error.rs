use std::fmt;

#[derive(Debug)]
pub enum PhonemeError {
    UnknownSymbol(String),
    Converter(String),
    IdMap(String),
    Config(String),
    Download(String),
    Archive(String),
    Io(String),
}

impl fmt::Display for PhonemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonemeError::UnknownSymbol(symbol) => write!(f, "unknown phoneme symbol: {symbol:?}"),
            PhonemeError::Converter(msg) => write!(f, "converter error: {msg}"),
            PhonemeError::IdMap(msg) => write!(f, "id map error: {msg}"),
            PhonemeError::Config(msg) => write!(f, "config error: {msg}"),
            PhonemeError::Download(msg) => write!(f, "download error: {msg}"),
            PhonemeError::Archive(msg) => write!(f, "archive error: {msg}"),
            PhonemeError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for PhonemeError {}

impl From<std::io::Error> for PhonemeError {
    fn from(err: std::io::Error) -> Self {
        PhonemeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PhonemeError {
    fn from(err: serde_json::Error) -> Self {
        PhonemeError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for PhonemeError {
    fn from(err: reqwest::Error) -> Self {
        PhonemeError::Download(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhonemeError>;
