pub mod delete_content;
pub mod download_content;
pub mod list_content;
pub mod search_content;
pub mod set_cover_image;
pub mod upload_content;
pub mod view_content;
