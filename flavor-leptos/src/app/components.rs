pub mod footer;
pub mod guild_logo;
pub mod header;
pub mod layout;
