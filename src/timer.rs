/// Wait after every frame so the module finishes processing it.
pub const SETTLE_DELAY_MS: u64 = 30;
/// Wait after power-up before the module accepts commands.
pub const BOOT_DELAY_MS: u64 = 500;
/// Wait after a reset frame.
pub const RESET_DELAY_MS: u64 = 1000;

/// Blocks the calling context for a fixed duration.
pub trait Delay {
    fn delay_ms(&mut self, duration: u64);
}

/// [`Delay`] backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, duration: u64) {
        sleep_ms(duration);
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_ms(&mut self, duration: u64) {
        (**self).delay_ms(duration);
    }
}

pub fn sleep_ms(duration: u64) {
    std::thread::sleep(std::time::Duration::from_millis(duration));
}
