use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeomError {
    #[error("Unsupported file format: `{0}`")]
    UnsupportedFileFormat(String),
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}
