use std::rc::Rc;

use yew::prelude::*;

use crate::config::{COUNT_UP_DURATION_MS, COUNT_UP_TICK_MS};

/// Counts a stat from zero up to the number it was rendered with.
///
/// Every frame keeps the stat's suffix: `%` when the rendered text had one,
/// `+` otherwise. The last frame is always the exact target.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    suffix: &'static str,
    done: bool,
}

impl CountUp {
    /// Returns `None` when `text` carries no digits.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with_timing(text, COUNT_UP_DURATION_MS, COUNT_UP_TICK_MS)
    }

    pub fn parse_with_timing(text: &str, duration_ms: u32, tick_ms: u32) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let steps = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Some(Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            suffix: if text.contains('%') { "%" } else { "+" },
            done: false,
        })
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one tick and returns the text to display.
    pub fn tick(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(format!("{}{}", self.target, self.suffix))
        } else {
            Some(format!("{}{}", self.current.floor() as u64, self.suffix))
        }
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick()
    }
}

/// Text shown for one stat, plus the counter driving it while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatDisplay {
    text: String,
    counter: Option<CountUp>,
    started: bool,
}

pub enum StatAction {
    Start,
    Tick,
}

impl StatDisplay {
    pub fn new(value: &str) -> Self {
        Self {
            text: value.to_owned(),
            counter: None,
            started: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_counting(&self) -> bool {
        self.counter.is_some()
    }
}

impl Reducible for StatDisplay {
    type Action = StatAction;

    fn reduce(self: Rc<Self>, action: StatAction) -> Rc<Self> {
        match action {
            StatAction::Start if !self.started => {
                let mut next = (*self).clone();
                next.started = true;
                next.counter = CountUp::parse(&self.text);
                next.into()
            }
            StatAction::Tick if self.is_counting() => {
                let mut next = (*self).clone();
                if let Some(counter) = next.counter.as_mut() {
                    if let Some(text) = counter.tick() {
                        next.text = text;
                    }
                    if counter.is_done() {
                        next.counter = None;
                    }
                }
                next.into()
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(frame: &str) -> u64 {
        frame.trim_end_matches(['+', '%']).parse().unwrap()
    }

    #[test]
    fn counts_monotonically_to_exact_target() {
        let frames: Vec<String> = CountUp::parse("150+").unwrap().collect();

        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        assert!(frames.len() <= 127, "took {} ticks", frames.len());

        let values: Vec<u64> = frames.iter().map(|f| value(f)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 150));
    }

    #[test]
    fn keeps_percent_suffix() {
        let mut count = CountUp::parse("98%").unwrap();
        assert!(count.tick().unwrap().ends_with('%'));
        assert_eq!(count.last().as_deref(), Some("98%"));
    }

    #[test]
    fn strips_non_digits_before_parsing() {
        let count = CountUp::parse("5,000+ graduates").unwrap();
        assert_eq!(count.target, 5000);
    }

    #[test]
    fn text_without_digits_is_skipped() {
        assert!(CountUp::parse("N/A").is_none());
        assert!(CountUp::parse("").is_none());
    }

    #[test]
    fn zero_finishes_on_first_tick() {
        let mut count = CountUp::parse("0").unwrap();
        assert_eq!(count.tick().as_deref(), Some("0+"));
        assert!(count.is_done());
        assert_eq!(count.tick(), None);
    }

    #[test]
    fn stat_display_counts_once_started() {
        let mut stat = Rc::new(StatDisplay::new("150+"));
        assert_eq!(stat.text(), "150+");

        stat = stat.reduce(StatAction::Tick);
        assert_eq!(stat.text(), "150+", "ticks before start are ignored");

        stat = stat.reduce(StatAction::Start);
        assert!(stat.is_counting());

        let mut shown = Vec::new();
        while stat.is_counting() {
            stat = stat.reduce(StatAction::Tick);
            shown.push(value(stat.text()));
        }
        assert_eq!(stat.text(), "150+");
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));

        stat = stat.reduce(StatAction::Start);
        assert!(!stat.is_counting(), "a finished stat does not restart");
        assert_eq!(stat.text(), "150+");
    }

    #[test]
    fn stat_without_number_never_counts() {
        let stat = Rc::new(StatDisplay::new("N/A")).reduce(StatAction::Start);
        assert!(!stat.is_counting());
        assert_eq!(stat.reduce(StatAction::Tick).text(), "N/A");
    }
}
