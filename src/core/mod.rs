pub mod launcher;
pub mod menu;
