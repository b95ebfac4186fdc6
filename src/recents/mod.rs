pub mod persistence;
pub mod store;
pub mod summary;

pub use persistence::*;
pub use store::*;
pub use summary::*;
