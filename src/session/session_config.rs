//! Session configuration and runtime option handling.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption(String),
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(name) => write!(f, "unknown option: {name}"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "invalid value for option {name}: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause between the human move and the automated reply, so the human
    /// move is drawn first.
    pub reply_delay_ms: u64,
    /// Side played by the engine. `None` means both sides are human.
    pub automated_side: Option<Color>,
    pub seed: Option<u64>,
    pub debug: bool,
    pub log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 300,
            automated_side: Some(Color::Dark),
            seed: None,
            debug: false,
            log_capacity: 256,
        }
    }
}

impl SessionConfig {
    #[inline]
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Apply a named option. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value = value.trim();

        match name.trim().to_ascii_lowercase().as_str() {
            "replydelay" => {
                self.reply_delay_ms = value.parse::<u64>().map_err(|_| invalid())?;
            }
            "automatedside" => {
                self.automated_side = parse_automated_side(value).ok_or_else(invalid)?;
            }
            "seed" => {
                self.seed = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse::<u64>().map_err(|_| invalid())?)
                };
            }
            "debug" => {
                self.debug = parse_bool(value).ok_or_else(invalid)?;
            }
            "logcapacity" => {
                let capacity = value.parse::<usize>().map_err(|_| invalid())?;
                if capacity == 0 {
                    return Err(invalid());
                }
                self.log_capacity = capacity;
            }
            _ => return Err(ConfigError::UnknownOption(name.to_owned())),
        }

        Ok(())
    }

    /// Build a config from command-line flags such as `--delay-ms 500`,
    /// `--seed 7`, `--automated-side none` and `--debug`.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let option = match flag {
                "--delay-ms" => "ReplyDelay",
                "--seed" => "Seed",
                "--automated-side" => "AutomatedSide",
                "--log-capacity" => "LogCapacity",
                "--debug" => {
                    config.debug = true;
                    i += 1;
                    continue;
                }
                _ => return Err(ConfigError::UnknownOption(flag.to_owned())),
            };
            let value = args.get(i + 1).ok_or_else(|| ConfigError::InvalidValue {
                name: flag.to_owned(),
                value: String::new(),
            })?;
            config.set_option(option, value)?;
            i += 2;
        }
        Ok(config)
    }
}

fn parse_automated_side(value: &str) -> Option<Option<Color>> {
    match value.to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Some(Color::Light)),
        "black" | "b" => Some(Some(Color::Dark)),
        "none" | "off" => Some(None),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
