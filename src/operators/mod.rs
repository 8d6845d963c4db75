pub use approximate::ApproximateComparison;
pub use comparison::{
    is_strictly_better, is_strictly_worse, DiscardPolicy, DominanceComparison, PairOutcome,
};
pub use exact::ExactComparison;

mod approximate;
mod comparison;
mod exact;
