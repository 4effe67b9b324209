pub mod cover;
pub mod delete;
pub mod dto;
pub mod engagement;
pub mod listing;
pub mod upload;

pub use cover::*;
pub use delete::*;
pub use dto::*;
pub use engagement::*;
pub use listing::*;
pub use upload::*;
