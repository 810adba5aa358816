//! # Algorithms Module
//!
//! Core algorithms for the Shard Packer.

pub mod packing;

pub use packing::{pack, pack_with_config};
