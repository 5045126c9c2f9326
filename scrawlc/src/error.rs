use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory expected")]
    DirectoryExpected(PathBuf),
    #[error("IO failure")]
    IoError(#[from] io::Error),
    #[error(transparent)]
    GlyphError(#[from] scrawlir::error::Error),
    #[error(transparent)]
    BackendError(#[from] scrawlbe::error::Error),
}
