use anyhow::Result;
use quickstart_core::coords::Vec2;
use quickstart_core::motion::Sprite;
use quickstart_core::resource::{OsEnv, ResourceLocator};
use quickstart_core::time::{FrameClock, FramePacer};

use crate::assets;
use crate::config::AppConfig;

/// Loaded quickstart state: the sprite and what it needs from disk.
#[derive(Debug)]
pub struct Quickstart {
    config: AppConfig,
    sprite: Sprite,
    sprite_size: Vec2,
    music: bool,
}

impl Quickstart {
    /// Enters the resource folder and probes the assets.
    ///
    /// A missing resource folder is not fatal here; the texture probe that
    /// follows reports the real problem with the working directory attached.
    pub fn load(config: AppConfig) -> Result<Self> {
        let locator = ResourceLocator::with_env(OsEnv, config.locator);
        if let Err(err) = locator.activate(&config.resource_folder) {
            log::warn!("{err}; loading assets from the current directory");
        }

        let sprite_size = assets::probe_texture(&config.texture)?;

        let music = assets::music_available(&config.music);
        if !music {
            log::warn!("music '{}' not found; continuing without audio", config.music);
        }

        let sprite = Sprite::new(config.start_position, config.start_velocity);

        Ok(Self { config, sprite, sprite_size, music })
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn sprite_size(&self) -> Vec2 {
        self.sprite_size
    }

    pub fn has_music(&self) -> bool {
        self.music
    }

    /// One simulation step.
    pub fn update(&mut self, dt: f32) {
        self.sprite.step(dt, self.config.viewport, self.sprite_size);
    }

    /// Runs the configured number of paced frames. Returns the frame count.
    pub fn run(&mut self) -> Result<u64> {
        let mut clock = FrameClock::new();
        let mut pacer = FramePacer::new(self.config.target_fps);
        let report_every = u64::from(self.config.target_fps.max(1));

        log::info!(
            "{}: {} frames at {} fps, {}x{} viewport",
            self.config.title,
            self.config.frames,
            self.config.target_fps,
            self.config.viewport.width,
            self.config.viewport.height,
        );

        for _ in 0..self.config.frames {
            let ft = clock.tick();
            self.update(ft.dt);

            if ft.frame_index % report_every == 0 {
                let dest = self.sprite.draw_rect(self.sprite_size);
                log::debug!("frame {:>5}  dest {:?}", ft.frame_index, dest);
                log::info!(
                    "frame {:>5}  pos ({:>7.1}, {:>7.1})  vel ({:>6.1}, {:>6.1})  rot {:>5.1}",
                    ft.frame_index,
                    self.sprite.position.x,
                    self.sprite.position.y,
                    self.sprite.velocity.x,
                    self.sprite.velocity.y,
                    self.sprite.rotation,
                );
            }

            pacer.wait();
        }

        Ok(clock.frames())
    }
}
