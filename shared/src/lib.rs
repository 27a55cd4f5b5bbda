//! # Shared Types Library
//!
//! Types and helpers shared by the workspace crates.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Token references from token lists
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! DTOs serialize to JSON with camelCase keys so they can be read straight
//! from public token lists.

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
