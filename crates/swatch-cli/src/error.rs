use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] swatch_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
