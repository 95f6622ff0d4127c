//! Domain types, status lifecycle, and input validation shared by the
//! storage and HTTP layers. Nothing in this crate touches the database.

pub mod error;
pub mod nullable;
pub mod types;
pub mod validation;
pub mod wish_status;
