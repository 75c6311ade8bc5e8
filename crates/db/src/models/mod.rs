//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod post;
pub mod project;
pub mod session;
pub mod skill;
pub mod user;
