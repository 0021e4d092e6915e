mod aggregate;
mod amount;
mod date;
mod transaction;

pub use aggregate::*;
pub use amount::*;
pub use date::*;
pub use transaction::*;
