pub mod comp;
pub mod domain;
mod panel;
mod presence;
mod scroll;
mod styles;
mod support;

pub use comp::MenuBar;
