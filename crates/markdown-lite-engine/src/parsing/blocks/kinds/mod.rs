pub mod bullet_list;
pub mod code_fence;
pub mod heading;

pub use bullet_list::BulletList;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
