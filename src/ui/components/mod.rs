pub mod atoms;
pub mod controls;
pub mod description;
pub mod divider;
pub mod editor;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod navigator;
pub mod overlay;
pub mod strip;
pub mod test_cases;
pub mod text_utils;
