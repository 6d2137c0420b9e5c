pub mod navigation;

pub use navigation::{navigate_down, navigate_up};
