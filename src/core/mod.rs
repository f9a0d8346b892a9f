// src/core/mod.rs

pub mod builder;
pub mod engine;
pub mod filter;
pub mod frequency;
pub mod segment;
pub mod trie;
pub mod types;
