//! Game session: attempts, termination, hints, statistics and persistence

mod daily;
mod game;
mod highlight;
mod hint;
mod record;
mod stats;
mod store;


pub use daily::*;
pub use game::*;
pub use highlight::*;
pub use hint::*;
pub use record::*;
pub use stats::*;
pub use store::*;
