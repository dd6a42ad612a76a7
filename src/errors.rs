use std::fmt;

#[derive(Debug)]
pub enum CountdownError {
    InvalidInstant(String),
    Config(String),
}

impl fmt::Display for CountdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownError::InvalidInstant(input) => {
                write!(f, "Invalid instant (expected RFC 3339): {}", input)
            }
            CountdownError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for CountdownError {}
