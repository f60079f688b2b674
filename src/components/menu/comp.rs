use crate::components::imports::*;
use gloo_timers::callback::Timeout;

use super::domain::{MenuEvent, MenuState, ThemeEntry};
use super::panel::ThemeMenu;
use super::presence::Presence;
use super::scroll::ScrollObserver;
use super::styles;

// Floating button in the top right corner, toggles the theme panel
pub struct MenuBar {
    state: MenuState,
    presence: Presence,
    theme_ctx: ThemeCtxSub,

    // pending unmount of a closed panel, dropping it cancels
    exit_timeout: Option<Timeout>,
    _scroll: ScrollObserver,
}

pub enum MenuBarMsg {
    ThemeContextUpdate(ThemeCtx),
    Toggle,
    Scrolled(f64),
    SelectTheme(AttrValue),
    ExitFinished(u32),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub conf: Rc<Conf>,
}

impl Component for MenuBar {
    type Message = MenuBarMsg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let scroll = {
            let link = ctx.link().clone();
            ScrollObserver::observe(move |offset| {
                link.send_message(Self::Message::Scrolled(offset));
            })
        };

        Self {
            state: MenuState::new(ctx.props().conf.scroll_threshold),
            presence: Presence::default(),
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            exit_timeout: None,
            _scroll: scroll,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| Self::Message::Toggle);
        let open = self.state.open();
        let theme = self.theme_ctx.current();

        let panel = if self.presence.mounted() {
            let entries: Rc<[ThemeEntry]> =
                ThemeEntry::list(self.theme_ctx.available(), &theme.id).into();
            let onselect = ctx.link().callback(Self::Message::SelectTheme);
            let conf = ctx.props().conf.clone();

            html! {
                <ThemeMenu {entries} {onselect} {conf} exiting={self.presence.exiting()}/>
            }
        } else {
            html! {}
        };

        html! {
            <div class={styles::anchor()}>
                <style>{ styles::KEYFRAMES }</style>
                <button
                    {onclick}
                    class={styles::trigger(self.state.trigger_variant(), &theme.box_border_color)}
                    aria-label={if open { "Close menu" } else { "Open menu" }}
                    aria-expanded={open.to_string()}
                >
                    { self.state.trigger_icon().view(classes!(styles::icon("1.5rem"))) }
                </button>
                { panel }
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from MenuBar");
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Toggle => {
                let rerender = self.state.handle(MenuEvent::Toggle, &self.theme_ctx.ctx);
                let open = self.state.open();
                console::log!(format!("menu open: {open}"));

                match self.presence.sync(open) {
                    Some(generation) => self.schedule_exit(ctx, generation),
                    None => self.exit_timeout = None,
                }
                rerender
            }
            Self::Message::Scrolled(offset) => self
                .state
                .handle(MenuEvent::Scrolled(offset), &self.theme_ctx.ctx),
            Self::Message::SelectTheme(id) => {
                console::log!(format!("theme selected from MenuBar: {id}"));
                self.state.handle(MenuEvent::Select(id), &self.theme_ctx.ctx)
            }
            Self::Message::ExitFinished(generation) => {
                let unmounted = self.presence.finish_exit(generation);
                if unmounted {
                    self.exit_timeout = None;
                }
                unmounted
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state.set_threshold(ctx.props().conf.scroll_threshold);
        // exit duration and support link may have changed too
        true
    }
}

impl MenuBar {
    fn schedule_exit(&mut self, ctx: &Context<Self>, generation: u32) {
        let exit_ms = ctx.props().conf.exit_ms;
        if exit_ms == 0 {
            self.presence.finish_exit(generation);
            self.exit_timeout = None;
            return;
        }

        let link = ctx.link().clone();
        self.exit_timeout = Some(Timeout::new(exit_ms, move || {
            link.send_message(MenuBarMsg::ExitFinished(generation));
        }));
    }
}
