//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Missing rows are
//! reported as `Ok(None)` / `Ok(false)`; only storage failures are errors.

pub mod category_repo;
pub mod remark_repo;
pub mod wish_item_repo;

pub use category_repo::CategoryRepo;
pub use remark_repo::RemarkRepo;
pub use wish_item_repo::WishItemRepo;
