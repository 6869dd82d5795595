//! Bottom player-bar state: the progress slider and volume.
//!
//! There is no audio pipeline; elapsed time is derived from the slider position.

use crate::library::Track;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayerBar {
    progress_percent: u8,
    volume_percent: u8,
}

impl Default for PlayerBar {
    fn default() -> Self {
        Self {
            progress_percent: 0,
            volume_percent: 75,
        }
    }
}

impl PlayerBar {
    pub fn new(progress_percent: u8, volume_percent: u8) -> Self {
        Self {
            progress_percent: progress_percent.min(100),
            volume_percent: volume_percent.min(100),
        }
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn volume_percent(&self) -> u8 {
        self.volume_percent
    }

    /// Clamped to 100.
    pub fn seek(&mut self, percent: u8) {
        self.progress_percent = percent.min(100);
    }

    /// Clamped to 100.
    pub fn set_volume(&mut self, percent: u8) {
        self.volume_percent = percent.min(100);
    }

    pub fn restart(&mut self) {
        self.progress_percent = 0;
    }

    /// Seconds into `track` at the current slider position, rounded down.
    pub fn elapsed_secs(&self, track: &Track) -> u32 {
        let elapsed = u64::from(self.progress_percent) * u64::from(track.duration_secs) / 100;
        elapsed as u32
    }
}
