use super::styles;
use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct SupportLinkProps {
    pub support: SupportConf,
}

#[styled_component]
pub fn SupportLink(props: &SupportLinkProps) -> Html {
    let SupportConf {
        href,
        title,
        caption,
    } = &props.support;

    html! {
        <a href={href.clone()} target="_blank" rel="noopener noreferrer" class={styles::support_link()}>
            <div class={classes!(styles::support_badge(), "support-badge")}>
                { Icon::Coffee.view(classes!(styles::icon("1.25rem"))) }
            </div>
            <div class={styles::support_text()}>
                <p class="support-title">{ title }</p>
                <p class="support-caption">{ caption }</p>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CreditProps {
    pub author: AttrValue,
}

#[styled_component]
pub fn Credit(props: &CreditProps) -> Html {
    html! {
        <p class={styles::credit()}>
            { "Made with" }
            { Icon::Heart.view(classes!(styles::icon("0.75rem"), styles::heart())) }
            { format!("by {}", props.author) }
        </p>
    }
}
