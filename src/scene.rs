//! Scene layout
//!
//! Startup placement for every entity, read from a RON file with a
//! built-in default layout. The file is optional; when it is absent the
//! default is used. A file that is present but unparseable or out of
//! bounds is rejected so a typo cannot silently spawn entities off
//! screen.

use serde::{Deserialize, Serialize};

use crate::game::entities::GemKind;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Validation limits for scene files
pub mod limits {
    /// Maximum number of robots in a scene
    pub const MAX_ROBOTS: usize = 64;
    /// Maximum number of gems in a scene
    pub const MAX_GEMS: usize = 256;
    /// Maximum heading magnitude per axis, in pixels per frame
    pub const MAX_HEADING: f32 = 512.0;
}

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::ParseError(e) => write!(f, "parse error: {}", e),
            SceneError::ValidationError(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

/// A fixed point on screen, top-left anchored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spawn {
    pub x: f32,
    pub y: f32,
}

/// A robot placement with its per-axis heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RobotSpawn {
    pub x: f32,
    pub y: f32,
    pub x_heading: f32,
    pub y_heading: f32,
}

/// A gem placement; the kind selects the sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GemSpawn {
    pub x: f32,
    pub y: f32,
    pub kind: GemKind,
}

/// Startup placement for the whole garden.
///
/// Sequence order is load-bearing: robots update and draw in list order,
/// gems draw in list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub player: Spawn,
    pub robots: Vec<RobotSpawn>,
    pub gems: Vec<GemSpawn>,
    pub princess: Spawn,
}

impl Scene {
    /// Parse and validate a scene from RON text.
    pub fn from_ron(text: &str) -> Result<Scene, SceneError> {
        let scene: Scene = ron::from_str(text)?;
        scene.validate().map_err(SceneError::ValidationError)?;
        Ok(scene)
    }

    fn validate(&self) -> Result<(), String> {
        if self.robots.len() > limits::MAX_ROBOTS {
            return Err(format!(
                "too many robots ({} > {})",
                self.robots.len(),
                limits::MAX_ROBOTS
            ));
        }
        if self.gems.len() > limits::MAX_GEMS {
            return Err(format!(
                "too many gems ({} > {})",
                self.gems.len(),
                limits::MAX_GEMS
            ));
        }

        validate_point(self.player.x, self.player.y, "player")?;
        validate_point(self.princess.x, self.princess.y, "princess")?;
        for (i, robot) in self.robots.iter().enumerate() {
            let context = format!("robot {}", i);
            validate_point(robot.x, robot.y, &context)?;
            validate_heading(robot.x_heading, &context)?;
            validate_heading(robot.y_heading, &context)?;
        }
        for (i, gem) in self.gems.iter().enumerate() {
            validate_point(gem.x, gem.y, &format!("gem {}", i))?;
        }
        Ok(())
    }
}

impl Default for Scene {
    /// The built-in garden: one player, three robots on different
    /// headings, three gems, and the princess in the top-right corner.
    fn default() -> Self {
        Scene {
            player: Spawn { x: 350.0, y: 200.0 },
            robots: vec![
                RobotSpawn { x: 500.0, y: 500.0, x_heading: 1.0, y_heading: 1.0 },
                RobotSpawn { x: 50.0, y: 50.0, x_heading: -2.0, y_heading: 2.0 },
                RobotSpawn { x: 500.0, y: 50.0, x_heading: 3.0, y_heading: 5.0 },
            ],
            gems: vec![
                GemSpawn { x: 600.0, y: 500.0, kind: GemKind::Blue },
                GemSpawn { x: 800.0, y: 500.0, kind: GemKind::Red },
                GemSpawn { x: 1000.0, y: 400.0, kind: GemKind::Red },
            ],
            princess: Spawn { x: 1000.0, y: 50.0 },
        }
    }
}

fn validate_point(x: f32, y: f32, context: &str) -> Result<(), String> {
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("{}: position is not finite", context));
    }
    if !(0.0..SCREEN_WIDTH).contains(&x) || !(0.0..SCREEN_HEIGHT).contains(&y) {
        return Err(format!("{}: position ({}, {}) is off screen", context, x, y));
    }
    Ok(())
}

fn validate_heading(heading: f32, context: &str) -> Result<(), String> {
    if !heading.is_finite() {
        return Err(format!("{}: heading is not finite", context));
    }
    if heading.abs() > limits::MAX_HEADING {
        return Err(format!(
            "{}: heading {} exceeds limit {}",
            context,
            heading,
            limits::MAX_HEADING
        ));
    }
    Ok(())
}
