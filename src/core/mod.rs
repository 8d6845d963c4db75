pub use error::MError;
pub use point::Point;

mod error;
pub(crate) mod point;
pub(crate) mod test_utils;
pub(crate) mod utils;
