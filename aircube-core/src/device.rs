//! The cube as a whole
//!
//! `Device` ties the screens, the session state and the pairing lifecycle
//! together. Inputs come in as push notices, button presses and fetched
//! payloads; each returns the [`Effects`] the transport has to carry out.

use alloc::vec::Vec;

use aircube_display::{
    parse_hex, DisplayError, DisplaySession, GlyphFont, Rgb, ScreenCompositor, ScreenId,
};
use aircube_protocol::{
    ControllerMessage, Credentials, DeviceBound, HelloMessage, ListPayload, PushMessage,
};

use crate::blink::PairingBlink;
use crate::controls::PanelButton;
use crate::effects::{push, Effect, Effects};
use crate::state::{Event, State};

/// Light color right after power on
pub const POWER_ON_LIGHT: Rgb = Rgb::new(31, 191, 191);

/// One AirCube
#[derive(Debug, Clone)]
pub struct Device {
    compositor: ScreenCompositor,
    session: DisplaySession,
    state: State,
    credentials: Option<Credentials>,
    blink: PairingBlink,
    pin: Option<u16>,
}

impl Device {
    /// Create a powered-off device
    ///
    /// With `credentials` the device logs in on power on, otherwise it
    /// shows a pairing PIN.
    pub fn new(font: Option<GlyphFont>, credentials: Option<Credentials>) -> Self {
        Self {
            compositor: ScreenCompositor::new(font),
            session: DisplaySession::new(),
            state: State::Off,
            credentials,
            blink: PairingBlink::new(),
            pin: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &DisplaySession {
        &self.session
    }

    pub fn compositor(&self) -> &ScreenCompositor {
        &self.compositor
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// PIN shown while pairing
    pub fn pin(&self) -> Option<u16> {
        self.pin
    }

    pub fn light(&self) -> Rgb {
        self.session.light
    }

    /// Press the power button
    ///
    /// `pin` is only used when powering on without credentials.
    pub fn toggle_power(&mut self, pin: u16) -> Effects {
        let mut effects = Effects::new();

        if self.state.is_powered() {
            self.state = self.state.transition(Event::PowerOff);
            self.pin = None;
            self.session.light = Rgb::BLACK;
            self.compositor.set_power(&mut self.session, false);
            push(&mut effects, Effect::Disconnect);
            log::info!("Powered off");
            return effects;
        }

        let paired = self.credentials.is_some();
        self.state = self.state.transition(Event::PowerOn { paired });
        self.session.light = POWER_ON_LIGHT;
        self.compositor.set_power(&mut self.session, true);

        let hello = match &self.credentials {
            Some(credentials) => {
                log::info!("Powered on, logging in as {}", credentials.sn);
                credentials.hello()
            }
            None => {
                let hello = HelloMessage::pairing(pin);
                self.pin = Some(pin % 10_000);
                self.blink = PairingBlink::new();
                self.compositor.show_pairing_pin(&self.session, pin);
                log::info!("Powered on, pairing with PIN {:04}", pin % 10_000);
                hello
            }
        };
        push(&mut effects, Effect::Connect(hello));
        effects
    }

    /// Accept the server's binding reply while pairing
    pub fn bind(&mut self, bound: DeviceBound) -> Effects {
        let mut effects = Effects::new();
        if self.state != State::Pairing {
            log::warn!("Binding reply outside pairing, ignored");
            return effects;
        }

        let credentials = Credentials::from(bound);
        log::info!("Bound as {}", credentials.sn);
        self.state = self.state.transition(Event::Bound);
        self.pin = None;
        self.session.light = POWER_ON_LIGHT;
        self.compositor.reset();
        self.compositor.repaint_all(&self.session);

        push(&mut effects, Effect::StoreCredentials(credentials.clone()));
        push(&mut effects, Effect::Connect(credentials.hello()));
        self.credentials = Some(credentials);
        effects
    }

    /// React to a push notice
    pub fn handle_push(&mut self, message: PushMessage) -> Effects {
        let mut effects = Effects::new();
        if !self.state.is_online() {
            log::debug!("Push notice while {:?}, ignored", self.state);
            return effects;
        }

        match message {
            PushMessage::Select { screen, position } => {
                let Some(id) = screen_id(screen) else {
                    return effects;
                };
                if let Err(e) = self.compositor.select(&mut self.session, id, position) {
                    log::warn!("Selection on {} not shown: {}", id, e);
                }
                let state = self.compositor.screen(id).state();
                if position.is_none() && state.is_list_mode && state.is_navigable {
                    push(
                        &mut effects,
                        Effect::Send(ControllerMessage::Change {
                            screen: id.into(),
                            position: Some(0),
                        }),
                    );
                }
            }
            PushMessage::RefreshList { screen } => {
                if let Some(id) = screen_id(screen) {
                    push(&mut effects, Effect::FetchList(id));
                }
            }
            PushMessage::RefreshImage { screen } => {
                if let Some(id) = screen_id(screen) {
                    push(&mut effects, Effect::FetchImage(id));
                }
            }
            PushMessage::LightColor(color) => {
                self.session.light = parse_hex(&color);
            }
            PushMessage::Ignored => {}
        }
        effects
    }

    /// Install a fetched list
    pub fn deliver_list(
        &mut self,
        screen: ScreenId,
        payload: &ListPayload,
    ) -> Result<(), DisplayError> {
        if !self.state.is_online() {
            log::debug!("List for {} arrived while {:?}, dropped", screen, self.state);
            return Ok(());
        }
        self.compositor
            .set_list_payload(&self.session, screen, payload)
    }

    /// Install a fetched wire image
    pub fn deliver_image(&mut self, screen: ScreenId, bytes: Vec<u8>) -> Result<(), DisplayError> {
        if !self.state.is_online() {
            log::debug!("Image for {} arrived while {:?}, dropped", screen, self.state);
            return Ok(());
        }
        self.compositor.set_image(&self.session, screen, bytes)
    }

    /// Press a panel button
    pub fn press(&mut self, button: PanelButton) -> Effects {
        let mut effects = Effects::new();

        if button == PanelButton::Flip {
            // The report carries the orientation from before the press
            let flipped = self.session.orientation.is_flipped();
            self.compositor.set_orientation(&mut self.session, !flipped);
            push(
                &mut effects,
                Effect::Send(ControllerMessage::Flip { flipped }),
            );
            return effects;
        }

        if !self.state.is_online() {
            log::debug!("{:?} while {:?}, ignored", button, self.state);
            return effects;
        }

        let active = self.session.active;
        let state = self.compositor.screen(active).state();
        let navigable = state.is_list_mode && state.is_navigable;
        let count = state.item_count;
        let selected = state.selected_index;

        let message = match button {
            PanelButton::Up | PanelButton::Down if navigable && count > 0 => {
                let position = if button == PanelButton::Up {
                    if selected == 0 {
                        count - 1
                    } else {
                        (selected - 1).min(count - 1)
                    }
                } else if selected + 1 >= count {
                    0
                } else {
                    selected + 1
                };
                Some(ControllerMessage::Change {
                    screen: active.into(),
                    position: Some(position),
                })
            }
            PanelButton::Up | PanelButton::Down => None,
            PanelButton::Tap if navigable => match self.compositor.activation_id(active) {
                Some(item) => Some(ControllerMessage::Tap {
                    screen: active.into(),
                    item: Some(item),
                }),
                None => {
                    log::warn!("Tap on {} without a valid selection", active);
                    None
                }
            },
            PanelButton::Tap => Some(ControllerMessage::Tap {
                screen: active.into(),
                item: None,
            }),
            PanelButton::Left => Some(ControllerMessage::Change {
                screen: active.prev().into(),
                position: None,
            }),
            PanelButton::Right => Some(ControllerMessage::Change {
                screen: active.next().into(),
                position: None,
            }),
            PanelButton::Flip => None,
        };

        if let Some(message) = message {
            push(&mut effects, Effect::Send(message));
        }
        effects
    }

    /// Advance the pairing light by one blink period
    pub fn tick_blink(&mut self) {
        if self.state == State::Pairing {
            self.session.light = self.blink.step();
        }
    }
}

fn screen_id(screen: u8) -> Option<ScreenId> {
    match ScreenId::try_from(screen) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Push notice dropped: {}", e);
            None
        }
    }
}
