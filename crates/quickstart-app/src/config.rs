use quickstart_core::coords::{Vec2, Viewport};
use quickstart_core::resource::LocatorConfig;

/// Program configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub viewport: Viewport,

    /// Folder searched for by the resource locator.
    pub resource_folder: String,
    pub locator: LocatorConfig,

    /// Asset paths, relative to the activated resource folder.
    pub texture: String,
    pub music: String,

    pub start_position: Vec2,
    pub start_velocity: Vec2,

    pub target_fps: u32,
    /// Frames to simulate before exiting. `0` runs no frames.
    pub frames: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Hello Raylib".to_string(),
            viewport: Viewport::new(1280.0, 800.0),
            resource_folder: "resources".to_string(),
            locator: LocatorConfig::default(),
            texture: "wabbit_alpha.png".to_string(),
            music: "crystal_cave_track.mp3".to_string(),
            start_position: Vec2::new(400.0, 200.0),
            start_velocity: Vec2::new(200.0, 200.0),
            target_fps: 60,
            frames: 600,
        }
    }
}
