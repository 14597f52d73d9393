//!
//! The project configuration error.
//!

///
/// The project configuration error.
///
#[derive(Debug)]
pub enum Error {
    /// The file system error.
    FileSystem(std::io::Error),
    /// The JSON parsing error.
    Parsing(serde_json::Error),
    /// The configuration validation error.
    Validation(ValidationError),
    /// The network profile cannot be found.
    NetworkNotFound(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::FileSystem(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Parsing(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileSystem(error) => write!(f, "file system error: {}", error),
            Self::Parsing(error) => write!(f, "configuration parsing error: {}", error),
            Self::Validation(error) => write!(f, "{}", error),
            Self::NetworkNotFound(name) => write!(
                f,
                "network profile `{}` is not defined in the configuration",
                name
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem(error) => Some(error),
            Self::Parsing(error) => Some(error),
            Self::Validation(_) => None,
            Self::NetworkNotFound(_) => None,
        }
    }
}

///
/// The configuration validation error.
///
/// Carries the dotted path of the offending field, e.g. `networks.dev.host`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The dotted path of the offending field.
    pub path: String,
    /// The error description.
    pub message: String,
}

impl ValidationError {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: String, message: String) -> Self {
        Self { path, message }
    }

    ///
    /// A shortcut constructor for a missing required field.
    ///
    pub fn missing(path: String) -> Self {
        Self::new(path, "is missing".to_owned())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration field `{}` {}", self.path, self.message)
    }
}
