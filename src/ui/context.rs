use clap::ValueEnum;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use jobprune::config::{ColorMode, Config};
use jobprune::TreeGlyphs;

/// `--color` flag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, cli_ascii: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(verbose, cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            color,
            unicode,
        }
    }

    pub fn glyphs(&self) -> TreeGlyphs {
        TreeGlyphs::for_unicode(self.unicode)
    }
}
