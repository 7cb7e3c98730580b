pub mod chat;
pub mod theme_toggle;
