/// State management module
/// 
/// This module holds all gallery state, including:
/// - Shared data structures (data.rs)
/// - The in-memory picture collection and UI state (gallery.rs)
/// - Author search over the collection (filter.rs)
/// - Random entries for the add button (generator.rs)

pub mod data;
pub mod filter;
pub mod gallery;
pub mod generator;
