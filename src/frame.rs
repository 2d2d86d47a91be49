use std::time::Instant;

/// Payload of a frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

enum FrameClock {
    Wall { start: Instant, last: Instant },
    Fixed { step: f32 },
}

/// Infinite iterator of frame ticks.
/// Use `take(n)` to drive a bounded run.
pub struct FrameIterator {
    frame_number: u64,
    time: f32,
    clock: FrameClock,
}

impl FrameIterator {
    /// Timing from the wall clock
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            time: 0.0,
            clock: FrameClock::Wall { start: now, last: now },
        }
    }

    /// Deterministic timing, every frame advances by `step` seconds
    pub fn fixed_step(step: f32) -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            clock: FrameClock::Fixed { step },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = match &mut self.clock {
            FrameClock::Wall { start, last } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                self.time = now.duration_since(*start).as_secs_f32();
                *last = now;
                delta
            }
            FrameClock::Fixed { step } => {
                // First frame has no elapsed time
                let delta = if self.frame_number == 0 { 0.0 } else { *step };
                self.time += delta;
                delta
            }
        };

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_frames() {
        let frames: Vec<_> = FrameIterator::fixed_step(0.5).take(3).collect();
        assert_eq!(frames[0], FrameInfo::new(0, 0.0, 0.0));
        assert_eq!(frames[1], FrameInfo::new(1, 0.5, 0.5));
        assert_eq!(frames[2], FrameInfo::new(2, 1.0, 0.5));
    }

    #[test]
    fn test_wall_clock_numbers_increase() {
        let mut frames = FrameIterator::new();
        assert_eq!(frames.next().map(|f| f.number), Some(0));
        assert_eq!(frames.next().map(|f| f.number), Some(1));
        assert_eq!(frames.frame_number(), 2);
    }
}
