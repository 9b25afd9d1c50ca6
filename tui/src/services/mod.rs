pub mod controls;
pub mod handlers;
pub mod panels;
pub mod selector;
pub mod slide;
pub mod transition;
