//! Progress bar styling options.
//!
//! Download listeners receive integer percentages, so the bars built from
//! [`ProgressBarOpts`] always have a length of 100 and their position is the
//! latest percentage.
//!
//! # Examples
//!
//! ```rust
//! use ferry::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::new(
//!     Some(ProgressBarOpts::TEMPLATE_MESSAGE.to_string()),
//!     Some(ProgressBarOpts::CHARS_FINE.to_string()),
//!     true,
//!     false,
//! );
//! let bar = opts.to_progress_bar();
//! assert_eq!(bar.length(), Some(100));
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_PERCENT.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Length of every bar: positions are percentages.
    pub const LEN: u64 = 100;

    /// Template representing the bar and the percentage.
    ///
    ///`███████████████████████████████████▌     88% eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_PERCENT: &'static str =
        "{bar:40.blue} {pos:>3}% eta {eta_precise:.blue}";
    /// Template prefixed by the bar message, usually the file name.
    ///
    /// `archive.zip ━━━━━━━━━━━━━━━━━━━━╾─────────────────── 51%`
    pub const TEMPLATE_MESSAGE: &'static str = "{msg} {bar:40.green/black} {pos:>3}%";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = match self.template {
            Some(template) => ProgressStyle::with_template(&template).unwrap_or_else(|e| {
                warn!("Invalid progress bar template {:?}: {}", template, e);
                ProgressStyle::default_bar()
            }),
            None => ProgressStyle::default_bar(),
        };
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        ProgressBar::new(Self::LEN).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] with a line bar and a message prefix.
    pub fn with_message_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_MESSAGE.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Return `true` if the bar is drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
