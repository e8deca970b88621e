use super::Film;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use minifb::{Key, Scale, Window, WindowOptions};

/// Shows `film` in a window until it is closed, Escape is pressed, or `hold` elapses.
pub fn present_film(film: &Film, title: &str, hold: Duration) -> Result<()> {
    let mut window = Window::new(
        title,
        film.width,
        film.height,
        WindowOptions {
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .context("failed to open preview window")?;
    // Limit to max ~60 fps update rate
    window.set_target_fps(60);

    let buffer: Vec<u32> = film.buffer.iter().map(|&c| u32::from(c)).collect();
    let now = Instant::now();
    while window.is_open() && !window.is_key_down(Key::Escape) && now.elapsed() < hold {
        window
            .update_with_buffer(&buffer, film.width, film.height)
            .context("failed to present film")?;
    }
    debug!("closing preview after {:?}", now.elapsed());
    Ok(())
}
