//! Sprite loading and scaling
//!
//! All six sprites are loaded once at startup: PNG bytes come in through
//! macroquad's file API (works on both native and WASM), are decoded and
//! uniformly scaled with the `image` crate, then uploaded as GPU textures.
//! Entities never hold textures; they carry a [`SpriteId`] and the renderer
//! resolves it against the store.

use image::{imageops::FilterType, RgbaImage};
use macroquad::prelude::*;

use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Uniform scale applied to the raw player sprite
const PLAYER_SCALE: f32 = 0.2;
/// Uniform scale applied to the raw robot sprite
const ROBOT_SCALE: f32 = 0.08;
/// Uniform scale applied to both gem sprites
const GEM_SCALE: f32 = 0.02;
/// Uniform scale applied to the raw princess sprite
const PRINCESS_SCALE: f32 = 0.2;

/// Names one loaded texture in the store.
///
/// The gem variants double as the kind selector: a gem entity's kind maps
/// straight to the sprite it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Player,
    Robot,
    GemBlue,
    GemRed,
    Princess,
}

/// Error type for sprite loading
#[derive(Debug)]
pub enum AssetError {
    /// Asset file could not be read
    Load(String),
    /// Asset bytes are not a decodable image
    Decode(String),
    /// Scale factor was not positive, or collapsed the image to zero pixels
    InvalidScale(f32),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load(msg) => write!(f, "load error: {}", msg),
            AssetError::Decode(msg) => write!(f, "decode error: {}", msg),
            AssetError::InvalidScale(factor) => write!(f, "invalid scale factor: {}", factor),
        }
    }
}

impl std::error::Error for AssetError {}

/// Scaled pixel sizes of the sprites whose entities move against the
/// screen bounds, captured at load time so bounds math never needs to
/// touch the GPU textures.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub robot: Vec2,
}

/// Owns every texture drawn by the game.
pub struct SpriteStore {
    background: Texture2D,
    player: Texture2D,
    robot: Texture2D,
    gem_blue: Texture2D,
    gem_red: Texture2D,
    princess: Texture2D,
}

impl SpriteStore {
    /// Load, scale, and upload all sprites from the given asset directory.
    ///
    /// The background is stretched to the exact screen size; every other
    /// sprite keeps its aspect ratio under a fixed uniform factor.
    pub async fn load(dir: &str) -> Result<Self, AssetError> {
        let background = load_rgba(&format!("{}/background.png", dir)).await?;
        let background = image::imageops::resize(
            &background,
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
            FilterType::Triangle,
        );

        let store = Self {
            background: to_texture(&background),
            player: load_scaled(dir, "player.png", PLAYER_SCALE).await?,
            robot: load_scaled(dir, "robot.png", ROBOT_SCALE).await?,
            gem_blue: load_scaled(dir, "gem_blue.png", GEM_SCALE).await?,
            gem_red: load_scaled(dir, "gem_red.png", GEM_SCALE).await?,
            princess: load_scaled(dir, "princess.png", PRINCESS_SCALE).await?,
        };
        println!("Loaded 6 sprites from {}/", dir);
        Ok(store)
    }

    /// Resolve a sprite id to its texture.
    pub fn texture(&self, id: SpriteId) -> &Texture2D {
        match id {
            SpriteId::Background => &self.background,
            SpriteId::Player => &self.player,
            SpriteId::Robot => &self.robot,
            SpriteId::GemBlue => &self.gem_blue,
            SpriteId::GemRed => &self.gem_red,
            SpriteId::Princess => &self.princess,
        }
    }

    /// Scaled pixel sizes of the moving entity sprites.
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: vec2(self.player.width(), self.player.height()),
            robot: vec2(self.robot.width(), self.robot.height()),
        }
    }
}

/// Read and decode one PNG into RGBA pixels.
async fn load_rgba(path: &str) -> Result<RgbaImage, AssetError> {
    let bytes = load_file(path)
        .await
        .map_err(|e| AssetError::Load(format!("{}: {}", path, e)))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| AssetError::Decode(format!("{}: {}", path, e)))?;
    Ok(img.to_rgba8())
}

/// Load one sprite and scale it by a uniform factor.
async fn load_scaled(dir: &str, name: &str, factor: f32) -> Result<Texture2D, AssetError> {
    let img = load_rgba(&format!("{}/{}", dir, name)).await?;
    let img = scale_rgba(&img, factor)?;
    Ok(to_texture(&img))
}

/// Resize an image by a uniform factor.
///
/// New dimensions are `floor(width * factor)` x `floor(height * factor)`.
/// The factor must be positive and must not round either dimension down
/// to zero.
fn scale_rgba(img: &RgbaImage, factor: f32) -> Result<RgbaImage, AssetError> {
    if factor <= 0.0 {
        return Err(AssetError::InvalidScale(factor));
    }
    let width = (img.width() as f32 * factor).floor() as u32;
    let height = (img.height() as f32 * factor).floor() as u32;
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidScale(factor));
    }
    Ok(image::imageops::resize(img, width, height, FilterType::Triangle))
}

fn to_texture(img: &RgbaImage) -> Texture2D {
    let texture = Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
    texture.set_filter(FilterMode::Linear);
    texture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_floors_dimensions() {
        let img = RgbaImage::new(10, 7);
        let scaled = scale_rgba(&img, 0.5).unwrap();
        assert_eq!(scaled.width(), 5);
        assert_eq!(scaled.height(), 3); // floor(3.5)
    }

    #[test]
    fn test_scale_identity() {
        let img = RgbaImage::new(64, 48);
        let scaled = scale_rgba(&img, 1.0).unwrap();
        assert_eq!((scaled.width(), scaled.height()), (64, 48));
    }

    #[test]
    fn test_scale_rejects_non_positive_factor() {
        let img = RgbaImage::new(10, 10);
        assert!(matches!(
            scale_rgba(&img, 0.0),
            Err(AssetError::InvalidScale(_))
        ));
        assert!(matches!(
            scale_rgba(&img, -0.2),
            Err(AssetError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_scale_rejects_zero_pixel_result() {
        // 10 * 0.05 = 0.5, floors to zero width
        let img = RgbaImage::new(10, 10);
        assert!(matches!(
            scale_rgba(&img, 0.05),
            Err(AssetError::InvalidScale(_))
        ));
    }
}
