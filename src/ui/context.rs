use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: ColorWhen) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, cli_color: ColorWhen, caps: TerminalCapabilities) -> Self {
        let color = !json
            && match cli_color {
                ColorWhen::Never => false,
                ColorWhen::Always => true,
                ColorWhen::Auto => caps.supports_color,
            };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
        }
    }

    #[test]
    fn auto_follows_terminal() {
        let ui = UiContext::from_caps(false, ColorWhen::Auto, tty_caps());
        assert!(ui.color);
    }

    #[test]
    fn json_never_colors() {
        let ui = UiContext::from_caps(true, ColorWhen::Always, tty_caps());
        assert!(!ui.color);
    }

    #[test]
    fn never_overrides_terminal() {
        let ui = UiContext::from_caps(false, ColorWhen::Never, tty_caps());
        assert!(!ui.color);
        assert!(ui.unicode);
    }
}
