pub mod configs;
pub mod letta;
pub mod types;
pub mod utils;
