//! Engine configuration, supplied once when a session is created.
//!
//! # Environment Variables
//!
//! - `CHESS_BFS_BOARD_SIZE`: board size (default 8, valid 1..=16)
//! - `CHESS_BFS_STEP_MS`: milliseconds between BFS expansions (default 60)
//! - `CHESS_BFS_ANIM_SPEED`: path animation speed in segments per second (default 3.0)
//!
//! Unparsable or out-of-range values fall back to the default with a warning.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::types::{
    PieceVariant, ANIM_SEGMENTS_PER_SEC, BOARD_SIZE, DEFAULT_ARC_HEIGHT, KNIGHT_ARC_HEIGHT,
    MAX_BOARD_SIZE, STEP_INTERVAL_MS,
};

/// Hop height of the animated piece, per variant, in board squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcHeights {
    pub knight: f32,
    pub king: f32,
    pub rook: f32,
    pub bishop: f32,
    pub queen: f32,
}

impl ArcHeights {
    pub fn for_piece(&self, piece: PieceVariant) -> f32 {
        match piece {
            PieceVariant::Knight => self.knight,
            PieceVariant::King => self.king,
            PieceVariant::Rook => self.rook,
            PieceVariant::Bishop => self.bishop,
            PieceVariant::Queen => self.queen,
        }
    }
}

impl Default for ArcHeights {
    fn default() -> Self {
        Self {
            knight: KNIGHT_ARC_HEIGHT,
            king: DEFAULT_ARC_HEIGHT,
            rook: DEFAULT_ARC_HEIGHT,
            bishop: DEFAULT_ARC_HEIGHT,
            queen: DEFAULT_ARC_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub board_size: u8,
    pub arc_heights: ArcHeights,
    /// Minimum elapsed time between two BFS expansions.
    pub step_interval: Duration,
    /// Path animation speed in segments per second.
    pub anim_speed: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            arc_heights: ArcHeights::default(),
            step_interval: Duration::from_millis(STEP_INTERVAL_MS as u64),
            anim_speed: ANIM_SEGMENTS_PER_SEC,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let board_size = parse_or(
            &lookup,
            "CHESS_BFS_BOARD_SIZE",
            defaults.board_size,
            |v: &u8| (1..=MAX_BOARD_SIZE).contains(v),
        );
        let step_ms = parse_or(
            &lookup,
            "CHESS_BFS_STEP_MS",
            defaults.step_interval.as_millis() as u64,
            |_| true,
        );
        let anim_speed = parse_or(
            &lookup,
            "CHESS_BFS_ANIM_SPEED",
            defaults.anim_speed,
            |v: &f32| valid_anim_speed(*v),
        );

        Self {
            board_size,
            step_interval: Duration::from_millis(step_ms),
            anim_speed,
            ..defaults
        }
    }

    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size.clamp(1, MAX_BOARD_SIZE);
        self
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    /// Non-positive or non-finite speeds are ignored.
    pub fn with_anim_speed(mut self, anim_speed: f32) -> Self {
        if valid_anim_speed(anim_speed) {
            self.anim_speed = anim_speed;
        } else {
            warn!(anim_speed, "ignoring invalid animation speed");
        }
        self
    }

    /// Bring fields set directly back into range: board size clamped, an invalid
    /// animation speed replaced by the default.
    pub fn sanitized(self) -> Self {
        let anim_speed = if valid_anim_speed(self.anim_speed) {
            self.anim_speed
        } else {
            warn!(anim_speed = self.anim_speed, "ignoring invalid animation speed");
            ANIM_SEGMENTS_PER_SEC
        };
        Self {
            board_size: self.board_size.clamp(1, MAX_BOARD_SIZE),
            anim_speed,
            ..self
        }
    }

    pub fn with_arc_heights(mut self, arc_heights: ArcHeights) -> Self {
        self.arc_heights = arc_heights;
        self
    }

    pub fn arc_height(&self, piece: PieceVariant) -> f32 {
        self.arc_heights.for_piece(piece)
    }

    /// Animation progress covered in `elapsed`.
    pub fn anim_delta(&self, elapsed: Duration) -> f32 {
        elapsed.as_secs_f32() * self.anim_speed
    }
}

fn valid_anim_speed(speed: f32) -> bool {
    speed.is_finite() && speed > 0.0
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if valid(&v) => v,
        _ => {
            warn!(key, value = %raw, ?default, "ignoring invalid configuration value");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.step_interval, Duration::from_millis(60));
        assert_eq!(config.arc_height(PieceVariant::Knight), KNIGHT_ARC_HEIGHT);
        assert_eq!(config.arc_height(PieceVariant::Queen), DEFAULT_ARC_HEIGHT);
        assert!(config.arc_height(PieceVariant::Knight) > config.arc_height(PieceVariant::Rook));
    }

    #[test]
    fn test_from_lookup() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("CHESS_BFS_BOARD_SIZE", "10"),
            ("CHESS_BFS_STEP_MS", "5"),
            ("CHESS_BFS_ANIM_SPEED", "6.5"),
        ]));
        assert_eq!(config.board_size, 10);
        assert_eq!(config.step_interval, Duration::from_millis(5));
        assert_eq!(config.anim_speed, 6.5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("CHESS_BFS_BOARD_SIZE", "40"),
            ("CHESS_BFS_STEP_MS", "soon"),
            ("CHESS_BFS_ANIM_SPEED", "-1"),
        ]));
        assert_eq!(config, EngineConfig::default());

        let config = EngineConfig::from_lookup(lookup_from(&[("CHESS_BFS_BOARD_SIZE", "0")]));
        assert_eq!(config.board_size, BOARD_SIZE);
    }

    #[test]
    fn test_missing_values_use_defaults() {
        assert_eq!(EngineConfig::from_lookup(|_| None), EngineConfig::default());
    }

    #[test]
    fn test_builder_clamps_board_size() {
        assert_eq!(EngineConfig::default().with_board_size(0).board_size, 1);
        assert_eq!(
            EngineConfig::default().with_board_size(200).board_size,
            MAX_BOARD_SIZE
        );
    }

    #[test]
    fn test_custom_arc_heights() {
        let flat = ArcHeights {
            knight: 0.0,
            ..ArcHeights::default()
        };
        let config = EngineConfig::default().with_arc_heights(flat);
        assert_eq!(config.arc_height(PieceVariant::Knight), 0.0);
        assert_eq!(config.arc_height(PieceVariant::Bishop), DEFAULT_ARC_HEIGHT);
    }

    #[test]
    fn test_builder_ignores_invalid_anim_speed() {
        for bad in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let config = EngineConfig::default().with_anim_speed(bad);
            assert_eq!(config.anim_speed, ANIM_SEGMENTS_PER_SEC);
        }
        assert_eq!(EngineConfig::default().with_anim_speed(5.0).anim_speed, 5.0);
    }

    #[test]
    fn test_sanitized_fixes_direct_field_writes() {
        let config = EngineConfig {
            board_size: 20,
            anim_speed: 0.0,
            ..EngineConfig::default()
        }
        .sanitized();
        assert_eq!(config.board_size, MAX_BOARD_SIZE);
        assert_eq!(config.anim_speed, ANIM_SEGMENTS_PER_SEC);

        let config = EngineConfig {
            board_size: 0,
            ..EngineConfig::default()
        }
        .sanitized();
        assert_eq!(config.board_size, 1);
    }

    #[test]
    fn test_anim_delta() {
        let config = EngineConfig::default().with_anim_speed(2.0);
        assert!((config.anim_delta(Duration::from_millis(250)) - 0.5).abs() < 1e-6);
    }
}
