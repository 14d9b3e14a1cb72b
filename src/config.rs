use std::fmt;

use clap::Parser;

pub const MIN_FPS: f32 = 1.0;
pub const MIN_SPAWN_INTERVAL_IN_SECS: f32 = 0.001;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Headless arena driven by tagged entity groups")]
pub struct Cli {
    /// Target ticks per second.
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Stop after this many ticks, run forever if omitted.
    #[arg(long)]
    pub frames: Option<usize>,

    /// Seconds between two enemy spawns.
    #[arg(long, default_value_t = 0.5)]
    pub spawn_interval: f32,

    /// Seconds a projectile stays alive.
    #[arg(long, default_value_t = 1.5)]
    pub projectile_ttl: f32,

    /// Entities further than this from the origin on any axis are despawned.
    #[arg(long, default_value_t = 20.0)]
    pub arena_half_extent: f32,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    FpsOutOfRange(f32),
    SpawnIntervalTooShort(f32),
    NonPositiveProjectileTtl(f32),
    NonPositiveArenaHalfExtent(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FpsOutOfRange(value) => {
                write!(f, "fps must be finite and at least {MIN_FPS}, got {value}")
            }
            Self::SpawnIntervalTooShort(value) => write!(
                f,
                "spawn interval must be at least {MIN_SPAWN_INTERVAL_IN_SECS}, got {value}"
            ),
            Self::NonPositiveProjectileTtl(value) => {
                write!(f, "projectile ttl must be positive, got {value}")
            }
            Self::NonPositiveArenaHalfExtent(value) => {
                write!(f, "arena half extent must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    pub fps: f32,
    pub frame_limit: Option<usize>,
    pub spawn_interval_in_secs: f32,
    pub projectile_ttl_in_secs: f32,
    pub arena_half_extent: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            frame_limit: None,
            spawn_interval_in_secs: 0.5,
            projectile_ttl_in_secs: 1.5,
            arena_half_extent: 20.0,
        }
    }
}

impl TryFrom<&Cli> for ArenaConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        // written as negations so NaN is rejected too
        if !(cli.fps.is_finite() && cli.fps >= MIN_FPS) {
            return Err(ConfigError::FpsOutOfRange(cli.fps));
        }
        if !(cli.spawn_interval.is_finite() && cli.spawn_interval >= MIN_SPAWN_INTERVAL_IN_SECS) {
            return Err(ConfigError::SpawnIntervalTooShort(cli.spawn_interval));
        }
        if !(cli.projectile_ttl > 0.0) {
            return Err(ConfigError::NonPositiveProjectileTtl(cli.projectile_ttl));
        }
        if !(cli.arena_half_extent > 0.0) {
            return Err(ConfigError::NonPositiveArenaHalfExtent(
                cli.arena_half_extent,
            ));
        }

        Ok(Self {
            fps: cli.fps,
            frame_limit: cli.frames,
            spawn_interval_in_secs: cli.spawn_interval,
            projectile_ttl_in_secs: cli.projectile_ttl,
            arena_half_extent: cli.arena_half_extent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let cli = Cli::try_parse_from(["tagged_arena"]).unwrap();

        assert_eq!(ArenaConfig::try_from(&cli).unwrap(), ArenaConfig::default());
    }

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from([
            "tagged_arena",
            "--fps",
            "60",
            "--frames",
            "120",
            "--spawn-interval",
            "0.25",
        ])
        .unwrap();

        let config = ArenaConfig::try_from(&cli).unwrap();
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.frame_limit, Some(120));
        assert_eq!(config.spawn_interval_in_secs, 0.25);
    }

    #[test]
    fn reject_non_positive_values() {
        let cli = Cli::try_parse_from(["tagged_arena", "--fps", "0"]).unwrap();
        assert_eq!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::FpsOutOfRange(0.0))
        );

        let cli = Cli::try_parse_from(["tagged_arena", "--projectile-ttl=-1"]).unwrap();
        assert_eq!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::NonPositiveProjectileTtl(-1.0))
        );
    }

    #[test]
    fn reject_non_finite_fps() {
        let cli = Cli::try_parse_from(["tagged_arena", "--fps", "inf"]).unwrap();
        assert_eq!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::FpsOutOfRange(f32::INFINITY))
        );

        let cli = Cli::try_parse_from(["tagged_arena", "--fps", "1e-38"]).unwrap();
        assert_eq!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::FpsOutOfRange(1e-38))
        );

        let cli = Cli::try_parse_from(["tagged_arena", "--fps", "NaN"]).unwrap();
        assert!(matches!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::FpsOutOfRange(_))
        ));
    }

    #[test]
    fn reject_too_short_spawn_interval() {
        let cli = Cli::try_parse_from(["tagged_arena", "--spawn-interval", "1e-10"]).unwrap();
        assert_eq!(
            ArenaConfig::try_from(&cli),
            Err(ConfigError::SpawnIntervalTooShort(1e-10))
        );

        let cli = Cli::try_parse_from(["tagged_arena", "--spawn-interval", "0.001"]).unwrap();
        assert!(ArenaConfig::try_from(&cli).is_ok());
    }
}
