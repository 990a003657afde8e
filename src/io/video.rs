//! Animated GIF export for frame sequences
//!
//! Frames arrive fully rendered; this module only paces and encodes
//! them. If the requested frame rate exceeds what GIF viewers reliably
//! support, frames are skipped to keep the apparent animation speed.

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Encode rendered frames as an animated GIF
///
/// For example, a 40 ms request (25 fps) against a 50 ms viewer floor
/// keeps every 2nd frame at 50 ms, preserving the overall duration.
///
/// # Errors
///
/// Returns an error if:
/// - `frames` is empty
/// - File system operations fail
/// - GIF encoding fails
pub fn export_frames_as_gif(
    frames: Vec<RgbaImage>,
    output_path: &Path,
    frame_delay_ms: u32,
) -> Result<()> {
    if frames.is_empty() {
        return Err(GenerationError::Computation {
            operation: "gif export",
            reason: "no frames rendered".to_string(),
        });
    }

    let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
    } else {
        1
    };

    let last_index = frames.len() - 1;
    let paced: Vec<Frame> = frames
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % skip_factor == 0 || *i == last_index)
        .map(|(_, image)| {
            Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(effective_delay_ms, 1))
        })
        .collect();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(paced)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
