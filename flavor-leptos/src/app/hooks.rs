pub mod use_bg_height;
pub mod use_viewport;
