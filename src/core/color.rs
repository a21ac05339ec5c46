// src/core/color.rs

/// The handful of colors used for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Reset,
    Red,
    Green,
    Cyan,
}

/// Converts an `AnsiColor` enum into its raw ANSI escape code representation.
pub fn ansi_color_to_code(color: AnsiColor) -> &'static str {
    match color {
        AnsiColor::Reset => "\x1b[0m",
        AnsiColor::Red => "\x1b[31m",
        AnsiColor::Green => "\x1b[32m",
        AnsiColor::Cyan => "\x1b[36m",
    }
}

/// Styles status text. Built once from the startup settings; when colors are
/// disabled every code is the empty string and text passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(self) -> bool {
        self.enabled
    }

    pub fn code(self, color: AnsiColor) -> &'static str {
        if self.enabled {
            ansi_color_to_code(color)
        } else {
            ""
        }
    }

    pub fn paint(self, text: &str, color: AnsiColor) -> String {
        format!(
            "{}{}{}",
            self.code(color),
            text,
            self.code(AnsiColor::Reset)
        )
    }

    /// Name of a pipeline step, printed before its commands run.
    pub fn header(self, name: &str) -> String {
        self.paint(name, AnsiColor::Cyan)
    }

    pub fn ok(self) -> String {
        self.paint("ok", AnsiColor::Green)
    }

    pub fn failed(self) -> String {
        self.paint("FAILED", AnsiColor::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_is_plain_text() {
        let palette = Palette::new(false);
        assert_eq!(palette.code(AnsiColor::Red), "");
        assert_eq!(palette.ok(), "ok");
        assert_eq!(palette.failed(), "FAILED");
        assert_eq!(palette.header("clippy"), "clippy");
    }

    #[test]
    fn test_enabled_palette_wraps_in_escape_codes() {
        let palette = Palette::new(true);
        assert_eq!(palette.ok(), "\x1b[32mok\x1b[0m");
        assert_eq!(palette.failed(), "\x1b[31mFAILED\x1b[0m");
        assert_eq!(palette.header("rustfmt"), "\x1b[36mrustfmt\x1b[0m");
    }
}
