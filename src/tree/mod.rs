//! Content tree: nodes, ordinals, and directory walking

pub mod node;
pub mod ordinal;
pub mod walker;

pub use node::{ContentNode, NodeKind};
pub use ordinal::{display_name, extract_ordinal};
pub use walker::{discover_markdown, list_children, list_markdown, WalkerConfig};
