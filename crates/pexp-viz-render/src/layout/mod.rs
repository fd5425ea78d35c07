pub mod axes;
pub mod margins;
pub mod multi_panel;
