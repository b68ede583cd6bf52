//! Document tree types.
//!
//! This module mirrors the host editor's tree closely enough for layout
//! resolution: typed nodes with JSON attribute bags, the host's position
//! arithmetic, and a transaction that applies single-attribute writes.

mod attrs;
mod document;
mod node;
mod transaction;

pub use attrs::{AttrKey, Attrs};
pub use document::Document;
pub use node::{Node, NodeType, REGION_TAG_ATTR};
pub use transaction::{AttrStep, AttributeWriter, Transaction};
