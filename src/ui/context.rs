use is_terminal::IsTerminal as _;

use primer::config::{ColorMode, Config};
use primer::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let supports_color =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::from_caps(json, cli_color, config, supports_color)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        supports_color: bool,
    ) -> Self {
        let color = if json {
            false
        } else {
            match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => supports_color,
                },
            }
        };

        Self { json, color }
    }
}
