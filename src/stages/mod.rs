pub mod stage1_merge;
pub mod stage2_resolve;
pub mod stage3_emit;

pub use stage1_merge::*;
pub use stage2_resolve::*;
pub use stage3_emit::*;
