//! Value objects - Immutable objects defined by their attributes

mod names;
mod quantity;

pub use names::ItemName;
pub use quantity::{validate_delta, QuantityChange};
