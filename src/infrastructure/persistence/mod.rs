//! Concrete repository implementations.
//!
//! Implements the domain repository traits. The service ships with the
//! in-memory store; a durable backend can be added behind the same trait
//! without touching call sites.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
