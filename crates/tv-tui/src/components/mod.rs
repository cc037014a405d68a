pub mod category_bar;
pub mod channel_list;
pub mod header;
pub mod help_overlay;
pub mod player_panel;
pub mod shelves;
