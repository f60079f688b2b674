pub use crate::components::icons::Icon;
pub use crate::components::theme::prelude::*;
pub use crate::conf::{Conf, SupportConf};

pub use std::rc::Rc;

pub use gloo_console as console;
pub use stylist::yew::{styled_component, Global};
pub use stylist::{css, StyleSource};
pub use yew::prelude::*;
