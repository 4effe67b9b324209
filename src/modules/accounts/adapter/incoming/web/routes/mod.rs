pub mod login;
pub mod moderation;
pub mod profile;
pub mod register;

pub use login::*;
pub use moderation::*;
pub use profile::*;
pub use register::*;
