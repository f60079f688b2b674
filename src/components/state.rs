// Root ctx component owns the data, children subscribe to it.
//
// Subscribers read the state and may push a replacement upstream,
// the root then rerenders every subscriber with the new value.

use crate::components::imports::*;
use std::fmt::Debug;

pub mod imports {
    pub use super::{StateCtx, StateCtxSub, StateDefault, WithState};
}

pub trait StateDefault {
    fn default_state() -> Self;
}

#[derive(derivative::Derivative)]
#[derivative(Clone(bound = "S: Clone"), Debug(bound = "S: Debug"), PartialEq(bound = "S: PartialEq"))]
pub struct StateCtx<S> {
    pub state: S,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    upstream_cb: Callback<S>,
}

impl<S: Clone + Debug> StateCtx<S> {
    // all changes must be done in one go before upstreaming
    //
    // ! does not modify the variable it's called on,
    // the provider rerenders subscribers with the new state
    pub fn upstream_fn<F>(&self, origin: &str, f: F)
    where
        F: FnOnce(S) -> S,
    {
        let state = f(self.state.clone());
        console::log!(format!(
            "{}\n\n  {:?}\n\t->\n  {:?}",
            origin, &self.state, &state,
        ));
        self.upstream_cb.emit(state);
    }
}

pub struct WithState<S> {
    state: S,
}

pub struct StateCtxSub<S>
where
    S: Clone + PartialEq + 'static,
{
    pub ctx: StateCtx<S>,
    // keep handle for component rerender after a state is changed
    _ctx_handle: ContextHandle<StateCtx<S>>,
}

impl<S> AsRef<S> for StateCtxSub<S>
where
    S: Clone + PartialEq + 'static,
{
    fn as_ref(&self) -> &S {
        &self.ctx.state
    }
}

impl<S> StateCtxSub<S>
where
    S: Clone + PartialEq + 'static,
{
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(StateCtx<S>) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("state context to exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: StateCtx<S>) {
        self.ctx = ctx;
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg<S> {
    StateChanged(S),
}

impl<S> Component for WithState<S>
where
    S: StateDefault + Clone + PartialEq + Debug + 'static,
{
    type Message = Msg<S>;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: S::default_state(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = StateCtx {
            state: self.state.clone(),
            upstream_cb: ctx.link().callback(Msg::StateChanged),
        };

        html! {
            <ContextProvider<StateCtx<S>> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<StateCtx<S>>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::StateChanged(state) => {
                let changed = self.state != state;
                self.state = state;
                changed
            }
        }
    }
}
