use crate::components::imports::*;

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Themes {
    Dark,
    Light,
    Pastel,
    Ocean,
    Forest,
    Sunset,
}

impl Default for Themes {
    fn default() -> Self {
        Self::Dark
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown theme id: {0:?}")]
pub struct UnknownTheme(pub String);

impl<'a> RawTheme<'a> {
    pub fn dark() -> Self {
        let light = "white";

        Self {
            name: "Dark",
            id: "dark",
            bg_color: "#1B2430",
            contrast_bg_color: "#11171e",
            text_color: light,
            link_color: light,
            box_border_color: light,
        }
    }

    pub fn light() -> Self {
        let dark = "#212529";
        Self {
            name: "Light",
            id: "light",
            bg_color: "#FEFCF3",
            contrast_bg_color: "#efede6",
            text_color: dark,
            link_color: dark,
            box_border_color: dark,
        }
    }

    pub fn pastel() -> Self {
        let light = "#fffccd";
        Self {
            name: "Pastel",
            id: "pastel",
            bg_color: "#453C67",
            contrast_bg_color: "#312b49",
            text_color: light,
            link_color: light,
            box_border_color: light,
        }
    }

    pub fn ocean() -> Self {
        let light = "#e0f2fe";
        Self {
            name: "Ocean",
            id: "ocean",
            bg_color: "#0c4a6e",
            contrast_bg_color: "#083344",
            text_color: light,
            link_color: "#7dd3fc",
            box_border_color: light,
        }
    }

    pub fn forest() -> Self {
        let light = "#ecfccb";
        Self {
            name: "Forest",
            id: "forest",
            bg_color: "#1a2e05",
            contrast_bg_color: "#142404",
            text_color: light,
            link_color: "#bef264",
            box_border_color: light,
        }
    }

    pub fn sunset() -> Self {
        let light = "#fff7ed";
        Self {
            name: "Sunset",
            id: "sunset",
            bg_color: "#7c2d12",
            contrast_bg_color: "#5c210d",
            text_color: light,
            link_color: "#fdba74",
            box_border_color: light,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: AttrValue,
    pub id: AttrValue,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub link_color: AttrValue,
    pub box_border_color: AttrValue,
}

struct RawTheme<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub link_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme) -> Self {
        Theme {
            name: theme.name.to_owned().into(),
            id: theme.id.to_owned().into(),
            bg_color: theme.bg_color.to_owned().into(),
            contrast_bg_color: theme.contrast_bg_color.to_owned().into(),
            text_color: theme.text_color.to_owned().into(),
            link_color: theme.link_color.to_owned().into(),
            box_border_color: theme.box_border_color.to_owned().into(),
        }
    }
}

impl Themes {
    const SESSION_KEY: &str = "theme";

    // display order of the catalog
    pub const ALL: [Themes; 6] = [
        Self::Dark,
        Self::Light,
        Self::Pastel,
        Self::Ocean,
        Self::Forest,
        Self::Sunset,
    ];

    pub fn catalog() -> Rc<[Theme]> {
        Self::ALL.into_iter().map(Theme::from).collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Pastel => "pastel",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
        }
    }

    pub fn derived() -> Self {
        let remembered = || {
            use gloo_storage::{LocalStorage, Storage};
            LocalStorage::get::<String>(Self::SESSION_KEY)
        };

        let remembered_default = || {
            let theme = Self::default();
            theme.remember();
            theme
        };

        match remembered() {
            Ok(theme) => match Self::try_from(theme.as_str()) {
                Ok(theme) => theme,
                Err(e) => {
                    console::warn!(format!("ignoring remembered theme, {e}"));
                    remembered_default()
                }
            },
            Err(_) => remembered_default(),
        }
    }

    pub fn remember(&self) {
        use gloo_storage::{LocalStorage, Storage};
        match LocalStorage::set(Self::SESSION_KEY, self.id()) {
            Ok(()) => {}
            Err(_) => console::log!("failed to store theme in local storage"),
        }
    }
}

impl From<Themes> for Theme {
    fn from(value: Themes) -> Self {
        match value {
            Themes::Dark => RawTheme::dark(),
            Themes::Light => RawTheme::light(),
            Themes::Pastel => RawTheme::pastel(),
            Themes::Ocean => RawTheme::ocean(),
            Themes::Forest => RawTheme::forest(),
            Themes::Sunset => RawTheme::sunset(),
        }
        .into()
    }
}

impl TryFrom<&str> for Themes {
    type Error = UnknownTheme;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.id() == value)
            .ok_or_else(|| UnknownTheme(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_back_to_themes() {
        for theme in Themes::ALL {
            assert_eq!(Themes::try_from(theme.id()), Ok(theme));
            assert_eq!(
                &*Theme::from(theme).id,
                theme.id(),
                "raw theme id must match the catalog id"
            );
        }
    }

    #[test]
    fn unknown_id() {
        assert_eq!(
            Themes::try_from("solarized"),
            Err(UnknownTheme("solarized".into()))
        );
        assert!(Themes::try_from("").is_err());
        assert!(Themes::try_from("Dark").is_err());
    }

    #[test]
    fn catalog_order() {
        let ids: Vec<_> = Themes::catalog()
            .iter()
            .map(|theme| theme.id.to_string())
            .collect();
        assert_eq!(ids, ["dark", "light", "pastel", "ocean", "forest", "sunset"]);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Themes::default(), Themes::Dark);
    }
}
