//! Scenario driver
//!
//! Stands in for the transport around the device:
//! - Feeds scenario steps into the device
//! - Carries out the effects the device returns
//! - Publishes the screens after every step

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;

use aircube_core::config::ServerConfig;
use aircube_core::{Device, Effect, Effects};
use aircube_display::ScreenId;
use aircube_protocol::pairing::MAX_PIN;
use aircube_protocol::{DeviceBound, HelloMessage, PushMessage};

use crate::credentials::store_credentials;
use crate::presenter::FrameHandoff;
use crate::scenario::{ContentStore, Step};

/// Drives one device through a scenario
pub struct Controller {
    device: Device,
    store: ContentStore,
    server: ServerConfig,
    credentials_path: PathBuf,
    handoff: Arc<FrameHandoff>,
    /// Greeting of the open push connection
    connection: Option<HelloMessage>,
    /// Reports sent to the controller, as wire JSON
    outbox: Vec<String>,
}

impl Controller {
    pub fn new(
        device: Device,
        server: ServerConfig,
        credentials_path: PathBuf,
        handoff: Arc<FrameHandoff>,
    ) -> Self {
        Self {
            device,
            store: ContentStore::new(),
            server,
            credentials_path,
            handoff,
            connection: None,
            outbox: Vec::new(),
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn connection(&self) -> Option<&HelloMessage> {
        self.connection.as_ref()
    }

    pub fn outbox(&self) -> &[String] {
        &self.outbox
    }

    /// Run one step and publish the result
    pub fn run_step(&mut self, step: Step) -> Result<()> {
        log::debug!("Step {:?}", step);
        match step {
            Step::Power { pin } => {
                let pin = pin.unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_PIN));
                let effects = self.device.toggle_power(pin);
                self.perform(effects)?;
            }
            Step::Bind { sn, token } => {
                let effects = self.device.bind(DeviceBound { sn, token });
                self.perform(effects)?;
            }
            Step::Push { notice } => match PushMessage::try_from(notice) {
                Ok(message) => {
                    let effects = self.device.handle_push(message);
                    self.perform(effects)?;
                }
                Err(e) => log::warn!("Dropping push notice: {}", e),
            },
            Step::ServeList { screen, list } => self.store.serve_list(screen, list)?,
            Step::ServeImage {
                screen,
                data,
                solid,
            } => self.store.serve_image(screen, data.as_deref(), solid)?,
            Step::Press { button } => {
                let effects = self.device.press(button);
                self.perform(effects)?;
            }
            Step::Tick { count } => {
                for _ in 0..count {
                    self.device.tick_blink();
                }
            }
            Step::Wait { ms } => thread::sleep(Duration::from_millis(ms)),
        }

        self.handoff.publish(&self.device);
        Ok(())
    }

    fn perform(&mut self, effects: Effects) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Send(message) => {
                    let body = message.to_json()?;
                    log::info!("-> {}", body);
                    if self.connection.is_none() {
                        log::warn!("Not connected, report dropped");
                        continue;
                    }
                    self.outbox.push(body);
                }
                Effect::FetchList(screen) => self.fetch_list(screen),
                Effect::FetchImage(screen) => self.fetch_image(screen),
                Effect::Connect(hello) => {
                    log::info!("Connecting to {} with {}", self.server.ws_url, hello.to_json()?);
                    self.connection = Some(hello);
                }
                Effect::Disconnect => {
                    log::info!("Disconnected");
                    self.connection = None;
                }
                Effect::StoreCredentials(credentials) => {
                    store_credentials(&self.credentials_path, &credentials)?;
                }
            }
        }
        Ok(())
    }

    fn fetch_list(&mut self, screen: ScreenId) {
        let index = u8::from(screen);
        log::debug!("GET {}", self.server.list_url(index));
        let Some(list) = self.store.list(index) else {
            log::warn!("No list served for {}", screen);
            return;
        };
        if let Err(e) = self.device.deliver_list(screen, list) {
            log::warn!("List for {} rejected: {}", screen, e);
        }
    }

    fn fetch_image(&mut self, screen: ScreenId) {
        let index = u8::from(screen);
        log::debug!("GET {}", self.server.image_url(index));
        let Some(bytes) = self.store.image(index) else {
            log::warn!("No image served for {}", screen);
            return;
        };
        if let Err(e) = self.device.deliver_image(screen, bytes.to_vec()) {
            log::warn!("Image for {} rejected: {}", screen, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircube_core::State;
    use aircube_display::pairing::BORDER_COLORS;
    use aircube_display::{GlyphFont, FONT_LEN};
    use aircube_protocol::Credentials;

    use crate::credentials::load_credentials;
    use crate::scenario::parse_scenario;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "aircube-controller-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn controller(credentials: Option<Credentials>, path: PathBuf) -> Controller {
        let font = GlyphFont::from_bytes(&[0xFF; FONT_LEN]).ok();
        Controller::new(
            Device::new(font, credentials),
            ServerConfig::default(),
            path,
            Arc::new(FrameHandoff::new()),
        )
    }

    fn run(controller: &mut Controller, script: &str) {
        for step in parse_scenario(script).unwrap() {
            controller.run_step(step).unwrap();
        }
    }

    #[test]
    fn test_pairing_session_end_to_end() {
        let path = scratch("pairing");
        let mut controller = controller(None, path.clone());

        run(&mut controller, r#"{"step": "power", "pin": 2468}"#);
        assert_eq!(controller.device().state(), State::Pairing);
        assert_eq!(controller.connection(), Some(&HelloMessage::pairing(2468)));
        let frame = controller.handoff.sample();
        let border = BORDER_COLORS[0];
        assert_eq!(
            frame.screens[0].pixel(0, 0),
            Some([border.r, border.g, border.b, 255])
        );

        run(
            &mut controller,
            r#"
            {"step": "tick", "count": 3}
            {"step": "bind", "sn": 31, "token": "granted"}
            "#,
        );
        assert_eq!(controller.device().state(), State::Online);
        assert_eq!(
            controller.connection(),
            Some(&HelloMessage::logged_in("granted", 31))
        );
        assert_eq!(
            load_credentials(&path),
            Some(Credentials {
                token: "granted".into(),
                sn: 31
            })
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_list_navigation_end_to_end() {
        let credentials = Credentials {
            token: "t".into(),
            sn: 2,
        };
        let mut controller = controller(Some(credentials), scratch("list"));

        run(
            &mut controller,
            r#"
            {"step": "power"}
            {"step": "serve_list", "screen": 1, "list": {"title": "Menu", "navigable": true, "items": [{"x": 8, "y": 0, "text": "one", "number": 11}, {"x": 8, "y": 16, "text": "two", "number": 12}]}}
            {"step": "push", "notice": {"screen": 1, "is_text": true, "color": ""}}
            {"step": "push", "notice": {"screen": 1, "select": true, "color": ""}}
            {"step": "press", "button": "down"}
            {"step": "push", "notice": {"screen": 1, "position": 1, "select": true, "color": ""}}
            {"step": "press", "button": "tap"}
            {"step": "press", "button": "flip"}
            "#,
        );

        assert_eq!(
            controller.outbox(),
            [
                r#"{"type":2,"cube":1,"screen":1,"state":0}"#,
                r#"{"type":2,"cube":1,"screen":1,"state":1}"#,
                r#"{"type":0,"cube":1,"screen":1,"state":12}"#,
                r#"{"type":1,"cube":1,"screen":null,"state":0}"#,
            ]
        );

        let frame = controller.handoff.sample();
        // Title glyphs are solid with the test font; flipped, they land
        // in the bottom-right corner
        assert_eq!(
            frame.screens[1].pixel(159 - 8, 119 - 8),
            Some([255, 255, 255, 255])
        );
    }

    #[test]
    fn test_image_refresh_end_to_end() {
        let credentials = Credentials {
            token: "t".into(),
            sn: 2,
        };
        let mut controller = controller(Some(credentials), scratch("image"));
        run(
            &mut controller,
            r##"
            {"step": "power"}
            {"step": "serve_image", "screen": 2, "solid": 63488}
            {"step": "push", "notice": {"screen": 2, "is_text": false, "color": ""}}
            {"step": "push", "notice": {"color": "#00ff00"}}
            "##,
        );

        let frame = controller.handoff.sample();
        assert_eq!(frame.screens[2].pixel(80, 60), Some([248, 0, 0, 255]));
        assert_eq!(frame.light, aircube_display::Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_missing_content_is_not_fatal() {
        let credentials = Credentials {
            token: "t".into(),
            sn: 2,
        };
        let mut controller = controller(Some(credentials), scratch("missing"));
        run(
            &mut controller,
            r#"
            {"step": "power"}
            {"step": "push", "notice": {"screen": 0, "is_text": true, "color": ""}}
            {"step": "push", "notice": {"screen": 9, "is_text": true, "color": ""}}
            "#,
        );
        assert_eq!(controller.device().state(), State::Online);
    }
}
