use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load YAML from `{}`: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Failed to download `{}`: {}", .url, .original)]
    Download {
        url: String,
        original: reqwest::Error,
    },

    #[error("The top level of `{}` must be a mapping.", .path)]
    NotAMapping { path: String },

    #[error("Must provide YAML via stdin or -f <file|url>")]
    NoConfigSource,

    #[error("Command failed: {} (exit code {})", .command, .code.map_or("unknown".to_string(), |c| c.to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("Failed to initialise the terminal: {}", _0)]
    Terminal(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn yaml_error(path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml { path, original }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn download_error(url: String, original: reqwest::Error) -> Self {
        Self::Download { url, original }
    }

    pub fn command_failed(command: String, code: Option<i32>) -> Self {
        Self::CommandFailed { command, code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_with_code() {
        let error = Error::command_failed("false".to_string(), Some(1));
        assert_eq!(error.to_string(), "Command failed: false (exit code 1)");
    }

    #[test]
    fn test_command_failed_message_without_code() {
        let error = Error::command_failed("sleep 10".to_string(), None);
        assert_eq!(
            error.to_string(),
            "Command failed: sleep 10 (exit code unknown)"
        );
    }

    #[test]
    fn test_no_config_source_message() {
        assert_eq!(
            Error::NoConfigSource.to_string(),
            "Must provide YAML via stdin or -f <file|url>"
        );
    }
}
