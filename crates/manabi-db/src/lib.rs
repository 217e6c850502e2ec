pub mod problem;
pub mod util;
pub mod worksheet;

pub use sea_orm;
