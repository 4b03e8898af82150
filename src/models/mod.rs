//! Domain models shared across the gateways and view-state composers.
//!
//! Field names serialize in camelCase to match the stored document shape,
//! so a record written by any client version reads back identically.

pub mod question;
pub mod user;

pub use question::{AnswerPatch, Category, CategoryFilter, Question};
pub use user::{Role, User, UserPatch};
