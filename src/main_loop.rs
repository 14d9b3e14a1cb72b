use std::time::{Duration, Instant};

pub struct MainLoop {
    desired_fps: f32,
    frame_limit: Option<usize>,
}

impl MainLoop {
    pub fn new(desired_fps: f32) -> Self {
        Self {
            desired_fps,
            frame_limit: None,
        }
    }

    pub fn with_frame_limit(mut self, frame_limit: Option<usize>) -> Self {
        self.frame_limit = frame_limit;

        self
    }

    pub fn iter(&self) -> MainLoopIterator {
        MainLoopIterator {
            desired_delta_time_in_secs: 1.0 / self.desired_fps,
            last_next_time: Instant::now(),
            remaining_frames: self.frame_limit,
        }
    }
}

pub struct MainLoopIterator {
    desired_delta_time_in_secs: f32,
    last_next_time: Instant,
    remaining_frames: Option<usize>,
}

impl Iterator for MainLoopIterator {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining_frames) = self.remaining_frames.as_mut() {
            if *remaining_frames == 0 {
                return None;
            }
            *remaining_frames -= 1;
        }

        let now = Instant::now();
        let last_loop_duration = now - self.last_next_time;
        self.last_next_time = now;

        let last_loop_duration_in_secs = last_loop_duration.as_secs_f32();
        let mut reduced_last_loop_duration_in_secs = last_loop_duration_in_secs;

        let count =
            f32::floor(reduced_last_loop_duration_in_secs / self.desired_delta_time_in_secs);
        reduced_last_loop_duration_in_secs -= count * self.desired_delta_time_in_secs;

        if reduced_last_loop_duration_in_secs < self.desired_delta_time_in_secs {
            let remaining_time_in_secs =
                self.desired_delta_time_in_secs - reduced_last_loop_duration_in_secs;
            match Duration::try_from_secs_f32(remaining_time_in_secs) {
                Ok(remaining_time) => std::thread::sleep(remaining_time),
                Err(e) => log::warn!(
                    "Cannot wait for the next frame, remaining time = {}, error = {}",
                    remaining_time_in_secs,
                    e
                ),
            }
        }

        Some(self.desired_delta_time_in_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_limit_stops_the_loop() {
        let main_loop = MainLoop::new(1000.0).with_frame_limit(Some(3));

        let delta_times = main_loop.iter().collect::<Vec<f32>>();

        assert_eq!(delta_times, vec![0.001, 0.001, 0.001]);
    }

    #[test]
    fn zero_frame_limit_yields_nothing() {
        let main_loop = MainLoop::new(1000.0).with_frame_limit(Some(0));

        assert!(main_loop.iter().next().is_none());
    }

    #[test]
    fn unrepresentable_frame_time_does_not_sleep() {
        let main_loop = MainLoop::new(f32::MIN_POSITIVE).with_frame_limit(Some(1));

        let delta_times = main_loop.iter().collect::<Vec<f32>>();

        assert_eq!(delta_times, vec![1.0 / f32::MIN_POSITIVE]);
    }
}
