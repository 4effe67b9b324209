pub mod accounts;
pub mod ads;
pub mod content;
