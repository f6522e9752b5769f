use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    BadAddress(String),
    PortOutOfRange(u16),
    StorageDirUnavailable(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::BadAddress(e) => write!(f, "Bind address error: {}", e),
            ConfigError::PortOutOfRange(p) => {
                write!(f, "Port {} is reserved, use 1024-65535", p)
            }
            ConfigError::StorageDirUnavailable(e) => write!(f, "Storage directory error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug, PartialEq)]
pub enum StorageError {
    ReadFailed,
    WriteFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed => write!(f, "Storage read failed"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug, PartialEq)]
pub enum UploadError {
    NotADataUrl,
    UnsupportedFormat(String),
    TooLarge(usize),
    BadMonth(u32),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NotADataUrl => write!(f, "Not a base64 image data URL"),
            UploadError::UnsupportedFormat(m) => {
                write!(f, "Unsupported format {}: use JPG, PNG or WEBP", m)
            }
            UploadError::TooLarge(size) => {
                write!(f, "Photo is {} bytes, maximum is 5MB", size)
            }
            UploadError::BadMonth(m) => write!(f, "Month {} is out of range 0-11", m),
        }
    }
}

impl std::error::Error for UploadError {}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    StorageError(StorageError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}
