#![allow(non_upper_case_globals)]

use crate::components::imports::*;
use crate::components::PageTitle;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Pick a theme",
        "Open the menu in the top right corner and choose one of the themes. \
         The whole page follows the selection and it is remembered for the next visit.",
    ),
    (
        "Compare quickly",
        "The menu stays open after a selection, so themes can be flipped through one after another.",
    ),
    (
        "Scroll down",
        "Once the page is scrolled a little the button switches to a lighter surface, \
         scroll back to the top to see it change again.",
    ),
    (
        "Support",
        "The menu also links to a page where the project can be supported.",
    ),
];

pub struct Showcase {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or("Themes".into())]
    pub title: AttrValue,
}

impl Component for Showcase {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.current();
        let contrast_bg_color = &theme.contrast_bg_color;
        let box_border_color = &theme.box_border_color;

        let wrapper_style = css!(
            "
                max-width: 40rem;
                margin: 0 auto;
                padding: 6rem 1.5rem 60vh;
            "
        );

        let section_style = css!(
            "
                margin: 2rem 0;
                padding: 2rem;
                min-height: 30vh;
                border-radius: 1rem;
                background-color: ${contrast_bg_color};
                border: 1px solid ${box_border_color};
            ",
            contrast_bg_color = contrast_bg_color,
            box_border_color = box_border_color,
        );

        let sections = SECTIONS.iter().map(|(heading, body)| {
            html! {
                <section class={section_style.clone()}>
                    <h2>{ heading }</h2>
                    <p>{ body }</p>
                </section>
            }
        });

        html! {
            <>
                <PageTitle title={ctx.props().title.clone()}/>
                <main class={wrapper_style}>
                    <h1>{ &ctx.props().title }</h1>
                    <p>{ format!("Current theme: {}", theme.name) }</p>
                    { for sections }
                </main>
            </>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
