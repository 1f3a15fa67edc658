//! Scripted controller sessions
//!
//! A scenario is a JSON-lines file, one step per line, standing in for the
//! controller and the person in front of the cube. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! {"step": "power", "pin": 1234}
//! {"step": "bind", "sn": 17, "token": "abc"}
//! {"step": "serve_list", "screen": 0, "list": {"navigable": true, "items": [...]}}
//! {"step": "push", "notice": {"screen": 0, "is_text": true}}
//! {"step": "press", "button": "down"}
//! ```

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use aircube_core::PanelButton;
use aircube_protocol::{ListPayload, UpdateInfo, WireImage, SCREEN_COUNT};

/// One scripted action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Press the power button; a random PIN is drawn if none is given
    Power {
        #[serde(default)]
        pin: Option<u16>,
    },
    /// Controller answers the pairing request
    Bind { sn: u32, token: String },
    /// Controller pushes a notice
    Push { notice: UpdateInfo },
    /// Make a list available for the next fetch of `screen`
    ServeList { screen: u8, list: ListPayload },
    /// Make an image available for the next fetch of `screen`
    ///
    /// Either base64 wire bytes in `data` or one RGB565 word in `solid`.
    ServeImage {
        screen: u8,
        #[serde(default)]
        data: Option<String>,
        #[serde(default)]
        solid: Option<u16>,
    },
    /// Press a panel button
    Press { button: PanelButton },
    /// Advance the pairing blink
    Tick {
        #[serde(default = "one")]
        count: u32,
    },
    /// Let the presenter catch up
    Wait { ms: u64 },
}

fn one() -> u32 {
    1
}

/// Parse a JSON-lines scenario
pub fn parse_scenario(text: &str) -> Result<Vec<Step>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("scenario line {}", i + 1))
        })
        .collect()
}

/// Content the scripted controller serves on fetch
#[derive(Debug, Default)]
pub struct ContentStore {
    lists: HashMap<u8, ListPayload>,
    images: HashMap<u8, Vec<u8>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve_list(&mut self, screen: u8, list: ListPayload) -> Result<()> {
        check_screen(screen)?;
        self.lists.insert(screen, list);
        Ok(())
    }

    /// Store an image from base64 text or a solid color
    pub fn serve_image(
        &mut self,
        screen: u8,
        data: Option<&str>,
        solid: Option<u16>,
    ) -> Result<()> {
        check_screen(screen)?;
        let bytes = match (data, solid) {
            (Some(data), _) => STANDARD
                .decode(data.trim())
                .with_context(|| format!("image for screen {}", screen))?,
            (None, Some(word)) => WireImage::solid(word).as_bytes().to_vec(),
            (None, None) => return Err(anyhow!("image for screen {} has no data", screen)),
        };
        self.images.insert(screen, bytes);
        Ok(())
    }

    pub fn list(&self, screen: u8) -> Option<&ListPayload> {
        self.lists.get(&screen)
    }

    pub fn image(&self, screen: u8) -> Option<&[u8]> {
        self.images.get(&screen).map(Vec::as_slice)
    }
}

fn check_screen(screen: u8) -> Result<()> {
    if (screen as usize) < SCREEN_COUNT {
        Ok(())
    } else {
        Err(anyhow!("no such screen: {}", screen))
    }
}
