//! PPM snapshots of presented frames
//!
//! A snapshot is the four screens side by side with a band of the status
//! light color underneath, written as a binary (P6) PPM.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use aircube_display::{PixelBuffer, Rgb};
use aircube_protocol::{SCREEN_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::presenter::Frame;

/// Height of the status light band
pub const LIGHT_BAND: usize = 8;

/// Snapshot width in pixels
pub const STRIP_WIDTH: usize = SCREEN_WIDTH * SCREEN_COUNT;

/// Snapshot height in pixels
pub const STRIP_HEIGHT: usize = SCREEN_HEIGHT + LIGHT_BAND;

/// Encode a frame as a P6 PPM
pub fn encode_frame(frame: &Frame) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", STRIP_WIDTH, STRIP_HEIGHT);
    let mut out = Vec::with_capacity(header.len() + STRIP_WIDTH * STRIP_HEIGHT * 3);
    out.extend_from_slice(header.as_bytes());

    for y in 0..SCREEN_HEIGHT {
        for screen in &frame.screens {
            push_row(&mut out, screen, y);
        }
    }
    let Rgb { r, g, b } = frame.light;
    for _ in 0..STRIP_WIDTH * LIGHT_BAND {
        out.extend_from_slice(&[r, g, b]);
    }
    out
}

fn push_row(out: &mut Vec<u8>, buffer: &PixelBuffer, y: usize) {
    let row = &buffer.as_bytes()[y * SCREEN_WIDTH * 4..(y + 1) * SCREEN_WIDTH * 4];
    for px in row.chunks_exact(4) {
        out.extend_from_slice(&px[..3]);
    }
}

/// Write `frame` as `frame-NNNNN.ppm` under `dir`
pub fn write_snapshot(dir: &Path, sequence: u32, frame: &Frame) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("frame-{:05}.ppm", sequence));
    let mut file =
        fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(&encode_frame(frame))?;
    log::debug!("Snapshot {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircube_display::Orientation;

    fn header_len() -> usize {
        format!("P6\n{} {}\n255\n", STRIP_WIDTH, STRIP_HEIGHT).len()
    }

    #[test]
    fn test_strip_layout() {
        let mut frame = Frame {
            light: Rgb::new(1, 2, 3),
            ..Default::default()
        };
        frame.screens[1]
            .canvas(Orientation::Normal)
            .set_pixel(0, 0, Rgb::new(200, 100, 50));

        let ppm = encode_frame(&frame);
        assert!(ppm.starts_with(b"P6\n640 128\n255\n"));
        assert_eq!(ppm.len(), header_len() + STRIP_WIDTH * STRIP_HEIGHT * 3);

        // Screen 1 starts 160 pixels into the first row
        let at = header_len() + SCREEN_WIDTH * 3;
        assert_eq!(&ppm[at..at + 3], &[200, 100, 50]);
        assert_eq!(&ppm[header_len()..header_len() + 3], &[0, 0, 0]);

        // Last pixel is the light band
        assert_eq!(&ppm[ppm.len() - 3..], &[1, 2, 3]);
    }

    #[test]
    fn test_write_snapshot_names_by_sequence() {
        let dir = std::env::temp_dir().join(format!("aircube-snap-{}", std::process::id()));
        let path = write_snapshot(&dir, 7, &Frame::default()).unwrap();
        assert!(path.ends_with("frame-00007.ppm"));
        assert_eq!(
            fs::read(&path).unwrap().len(),
            header_len() + STRIP_WIDTH * STRIP_HEIGHT * 3
        );
        fs::remove_dir_all(&dir).unwrap();
    }
}
