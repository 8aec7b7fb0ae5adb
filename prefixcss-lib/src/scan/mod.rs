//! Textual scanning helpers shared by the cleaner and the prefixer.

pub mod block;

pub use block::{collect_block, Block};
