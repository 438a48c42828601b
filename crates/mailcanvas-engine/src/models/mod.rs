pub mod block;
pub mod template;

pub use block::{Block, BlockId, BlockKind, UnknownBlockKind};
pub use template::Template;
