//! Repository implementations backed by process memory.

mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
