// Configuration definitions, functions and tests
//

use gloo_console as console;
use serde::Deserialize;

static ENV_PREFIX: &str = "MENUBAR";

// Compile-time, the page has no process environment at runtime
const ENV_CONF: Option<&str> = option_env!("MENUBAR__CONF");

pub const SCROLL_THRESHOLD: f64 = 50.0; // in pixels
pub const EXIT_MS: u32 = 200;

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("{}__CONF is not valid json", ENV_PREFIX)]
    Parse(#[source] serde_json::Error),

    #[error("scroll threshold must be a finite non-negative number, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Conf {
    pub scroll_threshold: f64,
    pub exit_ms: u32,
    pub support: SupportConf,
    pub credit: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SupportConf {
    pub href: String,
    pub title: String,
    pub caption: String,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD,
            exit_ms: EXIT_MS,
            support: SupportConf::default(),
            credit: "TAB".into(),
        }
    }
}

impl Default for SupportConf {
    fn default() -> Self {
        Self {
            href: "https://buymeacoffee.com".into(),
            title: "Buy me a Coffee".into(),
            caption: "Support this project".into(),
        }
    }
}

impl Conf {
    pub fn derive() -> Self {
        match ENV_CONF {
            None => Self::default(),
            Some(raw) => match Self::parse(raw) {
                Ok(conf) => conf,
                Err(e) => {
                    console::error!(format!("{e}, falling back to defaults"));
                    Self::default()
                }
            },
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfError> {
        let conf: Self = serde_json::from_str(raw).map_err(ConfError::Parse)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), ConfError> {
        let threshold = self.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let conf = Conf::default();
        assert_eq!(conf.scroll_threshold, 50.0);
        assert_eq!(conf.exit_ms, 200);
        assert_eq!(conf.support.href, "https://buymeacoffee.com");
        assert_eq!(conf.credit, "TAB");
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let conf = Conf::parse(r#"{ "scroll_threshold": 120, "support": { "title": "Tip jar" } }"#)
            .unwrap();

        assert_eq!(conf.scroll_threshold, 120.0);
        assert_eq!(conf.exit_ms, EXIT_MS);
        assert_eq!(conf.support.title, "Tip jar");
        assert_eq!(conf.support.href, SupportConf::default().href);
        assert_eq!(conf.credit, "TAB");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Conf::parse("{}").unwrap(), Conf::default());
    }

    #[test]
    fn negative_threshold_rejected() {
        let result = Conf::parse(r#"{ "scroll_threshold": -1 }"#);
        assert!(matches!(result, Err(ConfError::InvalidThreshold(t)) if t == -1.0));
    }

    #[test]
    fn non_finite_threshold_rejected() {
        let conf = Conf {
            scroll_threshold: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            conf.validate(),
            Err(ConfError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(Conf::parse("{ nope"), Err(ConfError::Parse(_))));
        assert!(matches!(
            Conf::parse(r#"{ "exit_ms": "soon" }"#),
            Err(ConfError::Parse(_))
        ));
    }
}
