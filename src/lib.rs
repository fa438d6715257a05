//! Driver for DFPlayer Mini class (MP3-TF-16P) serial audio modules.
//!
//! ```no_run
//! use dfplayer_driver::{serial, DfPlayer};
//!
//! let mut port = serial::open("/dev/ttyUSB0")?;
//! let mut player = DfPlayer::new(&mut port);
//! player.initialize();
//! player.set_volume(25);
//! player.play_from_folder(1, 3);
//! # Ok::<(), dfplayer_driver::DriverError>(())
//! ```

use std::io::Write;

mod debug;
pub mod device_state;
mod error;
pub mod serial;
pub mod timer;

pub use dfplayer_frame::{CommandCode, CommandFrame, FrameError};
pub use device_state::{DeviceState, VolumeChange};
pub use error::DriverError;
pub use timer::{Delay, ThreadDelay};

/// Controller for one module.
///
/// Owns the transport `W` for its lifetime. Pass `&mut port` to keep
/// ownership on the caller's side. Every command blocks for the settling
/// delay after the frame has been written.
///
/// Commands sent before [`DfPlayer::initialize`] are still encoded and
/// written; the module is likely to ignore them.
pub struct DfPlayer<W: Write, D: Delay = ThreadDelay> {
    port: W,
    delay: D,
    state: DeviceState,
}

impl<W: Write> DfPlayer<W, ThreadDelay> {
    pub fn new(port: W) -> Self {
        Self::with_delay(port, ThreadDelay)
    }
}

impl<W: Write, D: Delay> DfPlayer<W, D> {
    pub fn with_delay(port: W, delay: D) -> Self {
        DfPlayer {
            port: port,
            delay: delay,
            state: DeviceState::default(),
        }
    }

    fn send(&mut self, frame: CommandFrame) {
        serial::send_frame(&mut self.port, &mut self.delay, &frame);
    }

    /// Boots the module: waits for power-up, resets it, restores the stored
    /// volume and marks the player online.
    ///
    /// Blocks for roughly 1.5 seconds.
    pub fn initialize(&mut self) {
        self.delay.delay_ms(timer::BOOT_DELAY_MS);

        self.send(CommandFrame::new(CommandCode::Reset, 0, 0));
        tracing::info!("reset module");
        self.delay.delay_ms(timer::RESET_DELAY_MS);

        let volume = self.state.volume();
        let _ = self.set_volume(volume as i32);
        self.state.mark_online();
        tracing::info!(volume, "module online");
    }

    /// `true` once [`DfPlayer::initialize`] has completed. Says nothing about
    /// whether the module is actually present.
    pub fn is_online(&self) -> bool {
        self.state.is_online()
    }

    /// Last volume sent to the module.
    pub fn volume(&self) -> u8 {
        self.state.volume()
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Sets the output volume.
    ///
    /// Values outside `0..=30` are saturated rather than rejected; the
    /// returned [`VolumeChange`] tells whether that happened.
    pub fn set_volume(&mut self, volume: i32) -> VolumeChange {
        let change = self.state.store_volume(volume);
        self.send(CommandFrame::new(CommandCode::SetVolume, 0, change.applied));
        tracing::info!(volume = change.applied, clamped = change.clamped, "volume set");
        change
    }

    /// Raises the volume by one step. Does nothing at the maximum.
    pub fn volume_up(&mut self) {
        if let Some(volume) = self.state.volume_above() {
            let _ = self.set_volume(volume as i32);
        }
    }

    /// Lowers the volume by one step. Does nothing at zero.
    pub fn volume_down(&mut self) {
        if let Some(volume) = self.state.volume_below() {
            let _ = self.set_volume(volume as i32);
        }
    }

    /// Plays `track` by its index in the root of the storage.
    pub fn play_track(&mut self, track: u16) {
        self.send(CommandFrame::with_param(CommandCode::Play, track));
        tracing::info!(track, "playing track");
    }

    /// Plays `track` from `folder`.
    ///
    /// The module expects folders named `01`, `02`, ... holding files named
    /// `001.mp3`, `002.mp3`, ... on its storage.
    pub fn play_from_folder(&mut self, folder: u8, track: u8) {
        self.send(CommandFrame::new(CommandCode::PlayFromFolder, folder, track));
        tracing::info!(folder, track, "playing folder track");
    }

    pub fn pause(&mut self) {
        self.send(CommandFrame::new(CommandCode::Pause, 0, 0));
        tracing::info!("paused");
    }

    /// Resumes playback by sending the pause opcode again.
    ///
    /// The module toggles between playing and paused when it receives
    /// [`CommandCode::Pause`], so this frame is identical to the one sent by
    /// [`DfPlayer::pause`]. It is unclear whether a dedicated play opcode was
    /// intended here. After [`DfPlayer::stop`] this does not restart playback.
    pub fn resume(&mut self) {
        self.send(CommandFrame::new(CommandCode::Pause, 0, 0));
        tracing::info!("resumed");
    }

    pub fn stop(&mut self) {
        self.send(CommandFrame::new(CommandCode::Stop, 0, 0));
        tracing::info!("stopped");
    }

    /// Skips to the next track. The module ignores it at the end of the playlist.
    pub fn next(&mut self) {
        self.send(CommandFrame::new(CommandCode::Next, 0, 0));
        tracing::info!("next track");
    }

    /// Skips to the previous track.
    pub fn prev(&mut self) {
        self.send(CommandFrame::new(CommandCode::Prev, 0, 0));
        tracing::info!("previous track");
    }

    /// Releases the transport.
    pub fn into_inner(self) -> W {
        self.port
    }
}
