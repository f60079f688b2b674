use super::domain::ThemeEntry;
use super::styles;
use super::support::{Credit, SupportLink};
use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ThemeMenuProps {
    pub entries: Rc<[ThemeEntry]>,
    pub onselect: Callback<AttrValue>,
    pub conf: Rc<Conf>,
    #[prop_or_default]
    pub exiting: bool,
}

#[styled_component]
pub fn ThemeMenu(props: &ThemeMenuProps) -> Html {
    let ThemeMenuProps {
        entries,
        onselect,
        conf,
        exiting,
    } = props;

    let entries = entries.iter().map(|entry| {
        let onclick = {
            let id = entry.id.clone();
            onselect.reform(move |_: MouseEvent| id.clone())
        };

        html! {
            <button
                key={entry.id.to_string()}
                {onclick}
                class={styles::entry(entry.selected)}
                aria-pressed={entry.selected.to_string()}
            >
                { entry.icon.view(classes!(styles::icon("1.25rem"))) }
                <span>{ &entry.name }</span>
            </button>
        }
    });

    html! {
        <div
            class={styles::panel(*exiting, conf.exit_ms)}
            aria-label="Theme menu"
            aria-hidden={exiting.to_string()}
        >
            <h3 class={styles::heading()}>{ "Themes" }</h3>
            <div class={styles::grid()}>
                { for entries }
            </div>
            <hr class={styles::divider()}/>
            <SupportLink support={conf.support.clone()}/>
            <Credit author={conf.credit.clone()}/>
        </div>
    }
}
