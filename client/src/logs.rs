//! Terminal logging helpers.
//!
//! Seeding output (see [`crate::metrics::SeededMetrics`]) is printed uncolored so downstream
//! tooling can match it; everything here is decoration for humans.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    println!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black()
    );
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Error,
    Warning,
    Header,
    Info,
    Muted,
}

impl From<LogColor> for Color {
    #[rustfmt::skip]
    fn from(value: LogColor) -> Color {
        match value {
            LogColor::Highlight => Color::TrueColor { r: 255, g: 215, b: 87  },
            LogColor::Label     => Color::TrueColor { r: 40,  g: 100, b: 153 },
            LogColor::Error     => Color::TrueColor { r: 255, g: 0,   b: 45  },
            LogColor::Warning   => Color::TrueColor { r: 180, g: 105, b: 0   },
            LogColor::Header    => Color::TrueColor { r: 0,   g: 255, b: 0   },
            LogColor::Info      => Color::TrueColor { r: 0,   g: 95,  b: 255 },
            LogColor::Muted     => Color::TrueColor { r: 95,  g: 95,  b: 95  },
        }
    }
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Level::Success, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Level::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}

pub fn log_divider() {
    println!("{}", "-".repeat(80).color(LogColor::Muted));
}

/// Formats a `key: value` line with the key highlighted. See [`print_kv!`](crate::print_kv).
pub fn format_kv(key: impl Display, value: impl Display) -> String {
    format!("{}: {}", key.to_string().color(LogColor::Header), value)
}

#[macro_export]
macro_rules! print_kv {
    ($key:expr, $value:expr $(,)?) => {
        println!("{}", $crate::logs::format_kv($key, $value))
    };
}
