pub mod bg_height;
pub mod breakpoint;
pub mod page_meta;
pub mod viewport_size;
