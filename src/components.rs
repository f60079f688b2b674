#![allow(non_upper_case_globals)]

pub mod imports;

mod default_styling;
mod icons;
mod page;
mod state;
mod title;

pub mod menu;
pub mod theme;

pub use default_styling::DefaultStyling;
pub use menu::MenuBar;
pub use page::Showcase;
pub use title::PageTitle;
