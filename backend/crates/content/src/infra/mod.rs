//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;

pub use memory::MemoryContentRepository;
