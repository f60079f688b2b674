use crate::components::theme::prelude::WithTheme;
use crate::components::{DefaultStyling, MenuBar, Showcase};
use crate::conf::Conf;

use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let conf = use_memo(|_| Conf::derive(), ());

    html! {
        <WithTheme>
            <DefaultStyling>
                <Showcase/>
                <MenuBar conf={Rc::clone(&conf)}/>
            </DefaultStyling>
        </WithTheme>
    }
}
