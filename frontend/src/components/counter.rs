use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Finished,
}

/// Counts from zero up to `target`, one increment per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = (duration_ms as f64 / config::COUNTER_FRAME_MS as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    /// Digits of a stat label such as `"1,200+"`. Labels without a
    /// positive number are not animated.
    pub fn parse_target(label: &str) -> Option<u64> {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok().filter(|target| *target > 0)
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            CounterFrame::Finished
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
    pub active: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let animation = use_mut_ref(|| {
        CounterAnimation::parse_target(&props.value)
            .map(|target| CounterAnimation::new(target, config::COUNTER_DURATION_MS))
    });
    // Frame number and the value to show; None shows the label as written
    let progress = use_state(|| (0u32, None::<u64>));

    {
        let animation = animation.clone();
        let deps = (props.active, progress.0);
        let progress = progress.clone();
        use_effect_with_deps(
            move |(active, frame)| {
                let mut timeout = None;
                if *active && animation.borrow().is_some() {
                    let frame = *frame;
                    let delay = if frame == 0 { 0 } else { config::COUNTER_FRAME_MS };
                    timeout = Some(Timeout::new(delay, move || {
                        let tick = animation.borrow_mut().as_mut().map(CounterAnimation::tick);
                        match tick {
                            Some(CounterFrame::Running(value)) => progress.set((frame + 1, Some(value))),
                            Some(CounterFrame::Finished) => {
                                *animation.borrow_mut() = None;
                                progress.set((frame + 1, None));
                            }
                            None => {}
                        }
                    }));
                }
                move || drop(timeout)
            },
            deps,
        );
    }

    let text = match progress.1 {
        Some(value) => value.to_string(),
        None => props.value.to_string(),
    };

    html! {
        <div class="stat">
            <span class="stat-number">{text}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_digits_out_of_labels() {
        assert_eq!(CounterAnimation::parse_target("500"), Some(500));
        assert_eq!(CounterAnimation::parse_target("1,200+"), Some(1200));
        assert_eq!(CounterAnimation::parse_target("--"), None);
        assert_eq!(CounterAnimation::parse_target("0"), None);
        assert_eq!(CounterAnimation::parse_target(""), None);
    }

    #[test]
    fn counts_up_and_finishes() {
        let mut counter = CounterAnimation::new(100, 160);
        let mut seen = Vec::new();
        loop {
            match counter.tick() {
                CounterFrame::Running(value) => seen.push(value),
                CounterFrame::Finished => break,
            }
        }
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let mut counter = CounterAnimation::new(37, config::COUNTER_DURATION_MS);
        let mut last = 0;
        let mut frames = 0;
        while let CounterFrame::Running(value) = counter.tick() {
            assert!(value >= last && value < 37);
            last = value;
            frames += 1;
        }
        assert!(frames <= 125);
    }

    #[test]
    fn zero_duration_finishes_at_once() {
        let mut counter = CounterAnimation::new(5, 0);
        assert_eq!(counter.tick(), CounterFrame::Finished);
    }
}
