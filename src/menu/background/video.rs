use super::{is_video_file, BackgroundError, MenuBackground};
use crate::menu::UiContext;
use crate::render::{RectF, Renderer};
use crate::theme::{BackgroundType, ThemeBackground};
use std::path::Path;

/// A decoded video that can draw its current frame
///
/// Decoding lives outside this crate; implementations wrap whatever player
/// the host provides.
pub trait VideoStream {
    fn play(&mut self);
    fn stop(&mut self);
    fn draw(&mut self, renderer: &mut dyn Renderer, rect: RectF, alpha: f32) -> Result<(), String>;
}

/// Opens video files for backgrounds
pub trait VideoOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn VideoStream>, String>;
}

/// Looping video, started when the screen shows and stopped when it hides
pub struct VideoBackground {
    stream: Box<dyn VideoStream>,
    alpha: f32,
    playing: bool,
}

impl VideoBackground {
    pub fn new(theme: &ThemeBackground, ctx: &mut UiContext) -> Result<Self, BackgroundError> {
        let path = ctx
            .skins
            .texture_file_name(&theme.tex)
            .ok_or(BackgroundError::NoTexture)?;
        if !is_video_file(&path) {
            return Err(BackgroundError::Video(format!("{} is not a video", path.display())));
        }
        let opener = ctx.videos.ok_or(BackgroundError::VideoUnavailable)?;
        let stream = opener.open(&path).map_err(BackgroundError::Video)?;
        log::debug!("Opened background video {}", path.display());

        Ok(VideoBackground {
            stream,
            alpha: theme.alpha,
            playing: false,
        })
    }
}

impl MenuBackground for VideoBackground {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Video
    }

    fn on_show(&mut self, _now: u64) {
        if !self.playing {
            self.stream.play();
            self.playing = true;
        }
    }

    fn on_finish(&mut self) {
        if self.playing {
            self.stream.stop();
            self.playing = false;
        }
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, _now: u64) -> Result<(), String> {
        let viewport = renderer.viewport();
        let rect = RectF::new(0.0, 0.0, viewport.render_w, viewport.render_h);
        self.stream.draw(renderer, rect, self.alpha)
    }
}
