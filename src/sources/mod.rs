pub use delimited::{read_points, DelimitedFileOptions};
pub use random::RandomPoints;

mod delimited;
mod random;
