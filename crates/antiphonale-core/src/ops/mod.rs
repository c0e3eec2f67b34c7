pub mod antiphona_ops;
pub mod assignment_ops;
pub mod missa_ops;
pub mod missa_type_ops;
pub mod reference_ops;
pub mod store;
pub mod suggestion_ops;

pub use store::{Store, Stored, Table};
