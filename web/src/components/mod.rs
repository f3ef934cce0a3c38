pub mod nav;
pub mod profile_header;
pub mod user_card;
pub mod video_card;
