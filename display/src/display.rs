use log::error;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{TextureValueError, WindowCanvas};
use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::{Display, FrameBuffer, Pixels};

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl: {0}")]
    Sdl(String),

    #[error("unable to open window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("unable to create canvas: {0}")]
    Canvas(#[from] IntegerOrSdlError),

    #[error("unable to create texture: {0}")]
    Texture(#[from] TextureValueError),
}

/// # SDL display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// Drawing goes to an in-memory `FrameBuffer`; the window is only redrawn on
/// `refresh` and only when the frame changed since the last one shown.
pub struct SdlDisplay {
    canvas: WindowCanvas,
    frame: FrameBuffer,
}

impl SdlDisplay {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Sdl)?;
        let window = video_subsystem
            .window(
                "Emu-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()?;
        let canvas = window.into_canvas().build()?;

        Ok(SdlDisplay {
            canvas,
            frame: FrameBuffer::new(),
        })
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Formats Chip-8 pixels for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
    /// - Triplicating each element of that 1D array to represent the RGB values of each pixel
    /// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
    fn frame_to_sdl_texture(pixels: &Pixels) -> Vec<u8> {
        pixels
            .iter()
            .flatten()
            .flat_map(|&p| std::iter::repeat(p * 255).take(3))
            .collect()
    }

    /// Formats the frame as an SDL2 RGB24 texture and presents it.
    fn render(&mut self) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            DISPLAY_WIDTH as u32,
            DISPLAY_HEIGHT as u32,
        )?;

        let rgb = SdlDisplay::frame_to_sdl_texture(self.frame.pixels());
        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&rgb);
            })
            .map_err(DisplayError::Sdl)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Sdl)?;
        self.canvas.present();
        Ok(())
    }
}

impl Display for SdlDisplay {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_byte(&mut self, x: u8, y: u8, byte: u8) -> bool {
        self.frame.draw_byte(x, y, byte)
    }

    fn refresh(&mut self) {
        if !self.frame.is_dirty() {
            return;
        }
        match self.render() {
            Ok(()) => self.frame.mark_clean(),
            Err(e) => error!("unable to render frame: {}", e),
        }
    }
}
