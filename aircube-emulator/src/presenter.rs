//! Frame presentation
//!
//! The driver publishes finished screens into a [`FrameHandoff`]; a sampler
//! thread copies them out at the configured frame rate. Each screen sits
//! behind its own lock, so a sample never sees a half-written frame.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use aircube_core::Device;
use aircube_display::{PixelBuffer, Rgb, ScreenId};
use aircube_protocol::SCREEN_COUNT;

use crate::snapshot::write_snapshot;

/// One presented frame: all four screens and the light
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub screens: [PixelBuffer; SCREEN_COUNT],
    pub light: Rgb,
}

/// Front buffers shared between the driver and the sampler
#[derive(Debug, Default)]
pub struct FrameHandoff {
    screens: [Mutex<PixelBuffer>; SCREEN_COUNT],
    light: Mutex<Rgb>,
    generation: AtomicU64,
}

impl FrameHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the device's current screens to the front buffers
    pub fn publish(&self, device: &Device) {
        for id in ScreenId::ALL {
            let source = device.compositor().buffer(id);
            let mut front = self.screens[id.index()].lock();
            if *front != *source {
                front.clone_from(source);
            }
        }
        *self.light.lock() = device.light();
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// Number of publishes so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Copy out the front buffers
    pub fn sample(&self) -> Frame {
        let mut frame = Frame {
            light: *self.light.lock(),
            ..Default::default()
        };
        for (out, front) in frame.screens.iter_mut().zip(&self.screens) {
            out.clone_from(&front.lock());
        }
        frame
    }
}

/// Background sampler
pub struct Presenter {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<u32>>,
}

impl Presenter {
    /// Start sampling `handoff` every `period`
    ///
    /// Frames that changed since the last sample are written as snapshots
    /// when `snapshot_dir` is set.
    pub fn spawn(
        handoff: Arc<FrameHandoff>,
        period: Duration,
        snapshot_dir: Option<PathBuf>,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        let handle = thread::spawn(move || {
            log::info!("Presenter started, {:?} per frame", period);
            let mut sampler = Sampler {
                handoff,
                snapshot_dir,
                seen: 0,
                presented: 0,
            };
            while !flag.load(Ordering::Acquire) {
                thread::sleep(period);
                sampler.present_if_changed();
            }
            // Pick up whatever was published after the last tick
            sampler.present_if_changed();
            sampler.presented
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the sampler and return how many frames it presented
    pub fn stop(mut self) -> u32 {
        self.stop.store(true, Ordering::Release);
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(presented)) => presented,
            Some(Err(_)) => {
                log::error!("Presenter thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for Presenter {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

struct Sampler {
    handoff: Arc<FrameHandoff>,
    snapshot_dir: Option<PathBuf>,
    seen: u64,
    presented: u32,
}

impl Sampler {
    fn present_if_changed(&mut self) {
        let generation = self.handoff.generation();
        if generation == self.seen {
            return;
        }
        self.seen = generation;

        let frame = self.handoff.sample();
        if let Some(dir) = &self.snapshot_dir {
            if let Err(e) = write_snapshot(dir, self.presented, &frame) {
                log::warn!("Snapshot failed: {:#}", e);
            }
        }
        self.presented += 1;
    }
}
