//! Frame clock: monotonic elapsed time driving the animation.
//!
//! The winit redraw loop is cooperative (exactly one redraw pending, each
//! callback runs to completion), so the clock is a plain struct ticked at
//! the top of every frame. `tick_at` is the explicit step function: tests
//! drive it with a simulated schedule instead of a real display.

use std::time::{Duration, Instant};

/// One frame's timing snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    /// Seconds since the clock started; strictly increasing across ticks
    pub elapsed_s: f32,

    /// Seconds since the previous tick (0 on the first tick)
    pub dt_s: f32,

    /// Frame counter, starting at 0
    pub frame: u64,
}

/// Free-running clock with strictly increasing elapsed values.
pub struct FrameClock {
    started: Instant,
    last_elapsed: Option<f32>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            last_elapsed: None,
            frame: 0,
        }
    }

    /// Tick against the real clock.
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(self.started.elapsed())
    }

    /// Advance the clock to `since_start`.
    ///
    /// Elapsed values are strictly increasing even if the source clock
    /// stalls: a repeated reading is nudged to the next representable f32.
    pub fn tick_at(&mut self, since_start: Duration) -> FrameTick {
        let mut elapsed = since_start.as_secs_f32();

        let dt = match self.last_elapsed {
            Some(last) => {
                if elapsed <= last {
                    elapsed = last.next_up();
                }
                elapsed - last
            }
            None => 0.0,
        };

        let tick = FrameTick {
            elapsed_s: elapsed,
            dt_s: dt,
            frame: self.frame,
        };

        self.last_elapsed = Some(elapsed);
        self.frame += 1;
        tick
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_has_zero_dt() {
        let mut clock = FrameClock::new();
        let tick = clock.tick_at(Duration::from_millis(5));
        assert_eq!(tick.frame, 0);
        assert_eq!(tick.dt_s, 0.0);
    }

    #[test]
    fn test_elapsed_strictly_increases_over_1000_frames() {
        let mut clock = FrameClock::new();
        let mut last = f32::NEG_INFINITY;

        // Simulated 60 fps schedule
        for frame in 0..1000u64 {
            let now = Duration::from_nanos(frame * 16_666_667);
            let tick = clock.tick_at(now);
            assert!(
                tick.elapsed_s > last,
                "elapsed regressed at frame {frame}: {} <= {last}",
                tick.elapsed_s
            );
            assert_eq!(tick.frame, frame);
            last = tick.elapsed_s;
        }
    }

    #[test]
    fn test_stalled_clock_still_strictly_increases() {
        let mut clock = FrameClock::new();
        let now = Duration::from_secs(3);

        let first = clock.tick_at(now);
        let second = clock.tick_at(now);
        let third = clock.tick_at(now);

        assert!(second.elapsed_s > first.elapsed_s);
        assert!(third.elapsed_s > second.elapsed_s);
        assert!(second.dt_s > 0.0);
    }

    #[test]
    fn test_sub_f32_precision_steps_do_not_repeat() {
        // At large elapsed values a 60 fps step can fall below f32
        // resolution; the nudge must keep the sequence strictly increasing.
        let mut clock = FrameClock::new();
        let base = Duration::from_secs(100_000);

        let mut last = clock.tick_at(base).elapsed_s;
        for frame in 1..100u64 {
            let tick = clock.tick_at(base + Duration::from_nanos(frame * 16_666_667));
            assert!(tick.elapsed_s > last, "regression at frame {frame}");
            last = tick.elapsed_s;
        }
    }

    #[test]
    fn test_real_clock_ticks_are_ordered() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed_s > a.elapsed_s);
        assert_eq!(b.frame, 1);
    }
}
