use std::fmt;
#[derive(Debug)]
pub enum YfinError {
    RequestError(reqwest::Error),
    ParseError(serde_json::Error),
    Other(String),
}
impl fmt::Display for YfinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YfinError::RequestError(e) => write!(f, "Request error: {}", e),
            YfinError::ParseError(e) => write!(f, "Parse error: {}", e),
            YfinError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}
impl std::error::Error for YfinError {}
impl From<reqwest::Error> for YfinError {
    fn from(err: reqwest::Error) -> Self {
        YfinError::RequestError(err)
    }
}
impl From<serde_json::Error> for YfinError {
    fn from(err: serde_json::Error) -> Self {
        YfinError::ParseError(err)
    }
}
impl From<String> for YfinError {
    fn from(s: String) -> YfinError {
        YfinError::Other(s)
    }
}
