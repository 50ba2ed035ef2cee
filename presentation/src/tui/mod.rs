//! Terminal user interface for browsing, comparing and discussing policies

pub mod app;
pub mod carousel;
pub mod mode;
pub mod nav;
pub mod screens;
pub mod state;
pub mod widgets;
