//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs are separate structs (`NewLink`) so the store controls the fields
//! it owns, such as creation time and the click counter.

pub mod link;

pub use link::{Link, NewLink};
