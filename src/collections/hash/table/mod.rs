mod error;
mod fixed_hash_table;
mod iter;
mod name;
mod record;
mod tests;

pub use error::*;
pub use fixed_hash_table::*;
pub use iter::*;
pub use name::*;
pub use record::*;
