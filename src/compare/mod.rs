//! Per-attribute comparison between a guessed and a target theorem

mod attribute;
mod century;
mod year;


pub use attribute::*;
pub use century::*;
pub use year::*;
