pub mod base;
pub mod letta;
