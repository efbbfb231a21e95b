use crate::error::{EngineError, Result};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Display name for standard input.
pub const STDIN_NAME: &str = "stdin";

/// Something to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `-` means standard input, anything else is a path.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_string(),
            Self::Path(path) => path.display().to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns `EngineError::Open` if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(std::io::stdin().lock())),
            Self::Path(path) => {
                let file = File::open(path).map_err(|source| EngineError::Open {
                    path: self.name(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
