use std::time::Duration;

use ratatui_image::picker::{Capability, Picker, ProtocolType, cap_parser::QueryStdioOptions};

/// What the environment says about the terminal we are drawing into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TerminalHints {
    kitty: bool,
    iterm: bool,
    tmux: bool,
}

impl TerminalHints {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).is_some_and(|v| !v.trim().is_empty());
        let contains = |key: &str, needle: &str| lookup(key).is_some_and(|v| v.contains(needle));

        Self {
            // `KITTY_WINDOW_ID` is not forwarded over SSH, `TERM` is.
            kitty: non_empty("KITTY_WINDOW_ID")
                || lookup("TERM").is_some_and(|t| t.trim().starts_with("xterm-kitty")),
            iterm: non_empty("ITERM_SESSION_ID")
                || contains("TERM_PROGRAM", "iTerm")
                || contains("LC_TERMINAL", "iTerm"),
            tmux: lookup("TMUX").is_some(),
        }
    }

    /// `None` means querying is pointless and halfblocks are used directly.
    pub(crate) fn query_timeout(&self) -> Option<Duration> {
        if self.kitty || self.iterm {
            Some(Duration::from_millis(1500))
        } else if self.tmux {
            // Passthrough may be off; keep startup snappy.
            Some(Duration::from_millis(300))
        } else {
            None
        }
    }
}

pub(crate) fn detect_picker(hints: TerminalHints) -> Picker {
    if hints.tmux {
        enable_tmux_passthrough();
    }

    let mut picker = match hints.query_timeout() {
        Some(timeout) => {
            let mut options = QueryStdioOptions::default();
            options.timeout = timeout;
            options.text_sizing_protocol = false;
            Picker::from_query_stdio_with_options(options).unwrap_or_else(|_| Picker::halfblocks())
        }
        None => Picker::halfblocks(),
    };
    picker.set_background_color(image::Rgba([255u8, 255u8, 255u8, 255u8]));

    let kitty_capable = hints.kitty
        || picker
            .capabilities()
            .iter()
            .any(|cap| matches!(cap, Capability::Kitty));
    if kitty_capable && !hints.iterm {
        picker.set_protocol_type(ProtocolType::Kitty);
    }
    picker
}

fn enable_tmux_passthrough() {
    // Needed for graphics passthrough; old tmux or restricted envs just fail.
    let _ = std::process::Command::new("tmux")
        .args(["set-option", "-g", "allow-passthrough", "on"])
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();
}

/// Pixel width of one terminal cell, used to measure drags in pixels.
pub(crate) fn cell_width_px(picker: &Picker) -> i32 {
    i32::from(picker.font_size().0.max(1))
}

pub(crate) fn protocol_label(picker: &Picker) -> &'static str {
    match picker.protocol_type() {
        ProtocolType::Halfblocks => "halfblocks",
        ProtocolType::Sixel => "sixel",
        ProtocolType::Kitty => "kitty",
        ProtocolType::Iterm2 => "iterm2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(pairs: &[(&str, &str)]) -> TerminalHints {
        TerminalHints::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn plain_terminal_skips_query() {
        let hints = hints(&[("TERM", "xterm-256color")]);
        assert_eq!(hints, TerminalHints::default());
        assert_eq!(hints.query_timeout(), None);
    }

    #[test]
    fn kitty_term_over_ssh_is_detected() {
        let hints = hints(&[("TERM", "xterm-kitty")]);
        assert!(hints.kitty);
        assert_eq!(hints.query_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn iterm_and_tmux_are_detected() {
        assert!(hints(&[("TERM_PROGRAM", "iTerm.app")]).iterm);
        assert!(hints(&[("LC_TERMINAL", "iTerm2")]).iterm);
        let tmux = hints(&[("TMUX", "/tmp/tmux-1000/default,1,0")]);
        assert!(tmux.tmux);
        assert_eq!(tmux.query_timeout(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn blank_window_id_is_ignored() {
        assert!(!hints(&[("KITTY_WINDOW_ID", "  ")]).kitty);
    }

    #[test]
    fn halfblocks_label_and_cell_width() {
        let picker = Picker::halfblocks();
        assert_eq!(protocol_label(&picker), "halfblocks");
        assert!(cell_width_px(&picker) >= 1);
    }
}
