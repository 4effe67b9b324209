pub mod manage_ads;
pub mod select_active_ads;
