pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 30;
pub const DEFAULT_VOLUME: u8 = 20;

/// Local bookkeeping for the module.
///
/// The module never reports back, so these values only reflect what the
/// driver last sent.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DeviceState {
    volume: u8,
    online: bool,
}

/// Outcome of storing a requested volume.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VolumeChange {
    /// Volume actually stored and sent.
    pub applied: u8,
    /// `true` if the request was outside `MIN_VOLUME..=MAX_VOLUME` and got saturated.
    pub clamped: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        DeviceState {
            volume: DEFAULT_VOLUME,
            online: false,
        }
    }
}

impl DeviceState {
    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub(crate) fn mark_online(&mut self) {
        self.online = true;
    }

    pub(crate) fn store_volume(&mut self, requested: i32) -> VolumeChange {
        let applied = requested.clamp(MIN_VOLUME as i32, MAX_VOLUME as i32) as u8;
        self.volume = applied;
        VolumeChange {
            applied,
            clamped: requested != applied as i32,
        }
    }

    /// Volume one step up, or `None` at the ceiling.
    pub(crate) fn volume_above(&self) -> Option<u8> {
        if self.volume < MAX_VOLUME {
            return Some(self.volume + 1);
        }
        None
    }

    /// Volume one step down, or `None` at the floor.
    pub(crate) fn volume_below(&self) -> Option<u8> {
        if self.volume > MIN_VOLUME {
            return Some(self.volume - 1);
        }
        None
    }
}
