use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum MError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The tracker configuration is not valid: {0}")]
    Configuration(String),
    #[error("The point has {1} values, but the tracker expects {0} dimensions")]
    DimensionMismatch(usize, usize),
    #[error("NaN detected in {0}")]
    NaN(String),
    #[error("An error occurred when reading points from '{0}': {1}")]
    PointSource(String, String),
    #[error("An error occurred when exporting the tracker data: {0}")]
    Export(String),
}
