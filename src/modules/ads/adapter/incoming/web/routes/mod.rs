pub mod active;
pub mod dto;
pub mod manage;

pub use active::*;
pub use dto::*;
pub use manage::*;
