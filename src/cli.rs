// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::HiddenCursorPolicy;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenCursorArg {
    Reject,
    StalePose,
}

impl From<HiddenCursorArg> for HiddenCursorPolicy {
    fn from(arg: HiddenCursorArg) -> Self {
        match arg {
            HiddenCursorArg::Reject => HiddenCursorPolicy::Reject,
            HiddenCursorArg::StalePose => HiddenCursorPolicy::StalePose,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "surface-placer")]
#[command(about = "Headless surface cursor and instance placement run", long_about = None)]
pub struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 240)]
    pub frames: u64,

    /// Press the spawn button every N frames
    #[arg(long = "spawn-every", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub spawn_every: u64,

    /// Scale control value used for spawns
    #[arg(long)]
    pub scale: Option<f32>,

    /// Camera yaw sweep per frame, in degrees
    #[arg(long = "sweep", default_value_t = 0.5)]
    pub sweep_degrees: f32,

    /// Override how spawns behave while the cursor is hidden
    #[arg(long = "hidden-cursor", value_enum)]
    pub hidden_cursor: Option<HiddenCursorArg>,

    /// Only print the final summary
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["surface-placer"]);
        assert_eq!(cli.frames, 240);
        assert_eq!(cli.spawn_every, 30);
        assert!(cli.config.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_hidden_cursor_flag() {
        let cli = Cli::parse_from(["surface-placer", "--hidden-cursor", "stale-pose", "--scale", "0.3"]);
        assert_eq!(cli.hidden_cursor.map(HiddenCursorPolicy::from), Some(HiddenCursorPolicy::StalePose));
        assert_eq!(cli.scale, Some(0.3));
    }

    #[test]
    fn test_spawn_every_zero_rejected() {
        assert!(Cli::try_parse_from(["surface-placer", "--spawn-every", "0"]).is_err());
    }
}
