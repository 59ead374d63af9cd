// src/gui/components/mod.rs
pub mod address_bar;
pub mod data_table;
pub mod distance_bar;
pub mod pick_panel;
pub mod tag_panel;
