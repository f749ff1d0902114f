//! GEM GARDEN: a top-down sprite garden
//!
//! A keyboard-driven player wanders a fixed 1280x768 garden while patrol
//! robots bounce off the screen edges and gems and a princess sit where
//! the scene put them. One fixed-rate loop: poll quit, update, render,
//! pace to 30 FPS, present.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod game;
mod input;
mod scene;

use macroquad::prelude::*;

use assets::SpriteStore;
use game::{render, FrameLimiter, Phase, World, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use input::MoveIntent;
use scene::Scene;

/// Optional scene file; the built-in layout is used when it is absent
const SCENE_PATH: &str = "assets/scene.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Gem Garden v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Observe window close as a quit request instead of dying mid-frame;
    // the in-flight frame still presents before the loop exits.
    prevent_quit();

    let scene = match load_string(SCENE_PATH).await {
        Ok(text) => match Scene::from_ron(&text) {
            Ok(scene) => {
                println!(
                    "Loaded {} ({} robots, {} gems)",
                    SCENE_PATH,
                    scene.robots.len(),
                    scene.gems.len()
                );
                scene
            }
            Err(e) => {
                eprintln!("Rejected {}: {}", SCENE_PATH, e);
                return;
            }
        },
        Err(_) => {
            println!("No {}, using the built-in layout", SCENE_PATH);
            Scene::default()
        }
    };

    let sprites = match SpriteStore::load("assets").await {
        Ok(sprites) => sprites,
        Err(e) => {
            eprintln!("Failed to load sprites: {}", e);
            return;
        }
    };

    let mut world = World::from_scene(&scene, &sprites.sizes());
    let mut phase = Phase::default();
    let limiter = FrameLimiter::new(TARGET_FPS);

    loop {
        let frame_start = get_time();

        // Quit is checked before update/draw; the current frame still
        // renders once more, then the loop exits after present.
        if is_quit_requested() {
            phase.stop();
        }

        if phase.updates_enabled() {
            world.update(&MoveIntent::sample());
        }

        render(&world, &sprites);

        limiter.pace(frame_start);
        next_frame().await;

        if phase.is_stopped() {
            break;
        }
    }
}
