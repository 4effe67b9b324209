pub mod ensure_profile;
pub mod fetch_profile;
pub mod login_account;
pub mod moderate_profile;
pub mod register_account;
pub mod update_profile;
