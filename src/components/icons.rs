use yew::prelude::*;

// Inline 24x24 stroke icons, sized by the caller through css
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    Sun,
    Moon,
    Palette,
    Coffee,
    Heart,
}

impl Icon {
    pub fn for_theme(id: &str) -> Self {
        match id {
            "light" => Self::Sun,
            "dark" => Self::Moon,
            _ => Self::Palette,
        }
    }

    pub fn view(self, class: Classes) -> Html {
        html! {
            <svg
                {class}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { self.shape() }
            </svg>
        }
    }

    fn shape(self) -> Html {
        match self {
            Self::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="12" y2="12"/>
                    <line x1="4" x2="20" y1="6" y2="6"/>
                    <line x1="4" x2="20" y1="18" y2="18"/>
                </>
            },
            Self::Close => html! {
                <>
                    <path d="M18 6 6 18"/>
                    <path d="m6 6 12 12"/>
                </>
            },
            Self::Sun => html! {
                <>
                    <circle cx="12" cy="12" r="4"/>
                    <path d="M12 2v2"/>
                    <path d="M12 20v2"/>
                    <path d="m4.93 4.93 1.41 1.41"/>
                    <path d="m17.66 17.66 1.41 1.41"/>
                    <path d="M2 12h2"/>
                    <path d="M20 12h2"/>
                    <path d="m6.34 17.66-1.41 1.41"/>
                    <path d="m19.07 4.93-1.41 1.41"/>
                </>
            },
            Self::Moon => html! {
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
            },
            Self::Palette => html! {
                <>
                    <circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>
                    <circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>
                    <circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>
                    <circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>
                    <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>
                </>
            },
            Self::Coffee => html! {
                <>
                    <path d="M17 8h1a4 4 0 1 1 0 8h-1"/>
                    <path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z"/>
                    <line x1="6" x2="6" y1="2" y2="4"/>
                    <line x1="10" x2="10" y1="2" y2="4"/>
                    <line x1="14" x2="14" y1="2" y2="4"/>
                </>
            },
            Self::Heart => html! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_icons() {
        assert_eq!(Icon::for_theme("light"), Icon::Sun);
        assert_eq!(Icon::for_theme("dark"), Icon::Moon);
        assert_eq!(Icon::for_theme("pastel"), Icon::Palette);
        assert_eq!(Icon::for_theme(""), Icon::Palette);
    }
}
