use std::{
    num::NonZeroU32,
    thread::sleep,
    time::{Duration, Instant},
};

use tracing::debug;

/// keeps the game loop at a fixed cadence by sleeping out whatever is left of each frame.
/// frames that run over are not made up for.
pub struct FramePacer {
    frame_delay: Duration,
}

impl FramePacer {
    pub fn new(fps: NonZeroU32) -> Self {
        Self {
            frame_delay: Duration::from_millis(1000 / u64::from(fps.get())),
        }
    }

    pub fn begin_frame(&self) -> FrameTimer {
        FrameTimer {
            start: Instant::now(),
            frame_delay: self.frame_delay,
        }
    }
}

pub struct FrameTimer {
    start: Instant,
    frame_delay: Duration,
}

impl FrameTimer {
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_delay.saturating_sub(elapsed)
    }

    pub fn finish(self) {
        let elapsed = self.start.elapsed();
        let remaining = self.remaining(elapsed);
        if remaining.is_zero() {
            debug!(?elapsed, budget = ?self.frame_delay, "frame overran");
        } else {
            sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroU32, time::Duration};

    use cpong_shared::game_state::{FRAME_DELAY, TARGET_FPS};

    use crate::frame_pacer::FramePacer;

    fn pacer(fps: u32) -> FramePacer {
        FramePacer::new(NonZeroU32::new(fps).unwrap())
    }

    #[test]
    fn frame_delay_is_whole_milliseconds() {
        assert_eq!(
            pacer(TARGET_FPS).frame_delay,
            Duration::from_millis(FRAME_DELAY)
        );
        assert_eq!(pacer(60).frame_delay, Duration::from_millis(16));
        assert_eq!(pacer(1).frame_delay, Duration::from_secs(1));
        assert_eq!(pacer(2000).frame_delay, Duration::ZERO);
    }

    #[test]
    fn remaining() {
        let timer = pacer(60).begin_frame();
        assert_eq!(
            timer.remaining(Duration::from_millis(10)),
            Duration::from_millis(6)
        );
        assert_eq!(timer.remaining(Duration::from_millis(16)), Duration::ZERO);
        assert_eq!(timer.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn finish_waits_out_the_frame() {
        let timer = pacer(100).begin_frame();
        let start = timer.start;
        timer.finish();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
