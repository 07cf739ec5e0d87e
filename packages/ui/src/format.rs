//! Formatting and rate-limiting helpers.
//!
//! Prices and dates render in the platform's `fr-FR` house style; these
//! are the only two locale-specific behaviors in the app. [`debounce`]
//! and [`throttle`] wrap high-frequency handlers (search input, scroll).

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::Datelike;
use dioxus::prelude::*;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format an amount as euros, French style: narrow no-break-space
/// grouping, comma decimals, trailing `€`.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}\u{a0}€")
}

/// Format an ISO-8601 date (or full timestamp) as a French long date,
/// e.g. `15 mai 2024`. Unparseable input yields `None`.
pub fn format_date(input: &str) -> Option<String> {
    let date = chrono::DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .or_else(|_| chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()?;
    let month = MONTHS_FR.get(date.month0() as usize)?;
    Some(format!("{} {} {}", date.day(), month, date.year()))
}

/// Generation counter behind [`debounce`]: a pending call only fires if
/// no newer call has superseded it.
#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending call, superseding any earlier one.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Whether the pending call holding this ticket is still the latest.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

/// Wrap `f` so a burst of calls collapses into one invocation `wait`
/// after the last call (trailing edge). For search inputs and the like.
pub fn debounce<F>(wait: Duration, f: F) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let state = Debouncer::new();
    let f = Rc::new(RefCell::new(f));
    move || {
        let ticket = state.arm();
        let state = state.clone();
        let f = f.clone();
        spawn(async move {
            sleep(wait).await;
            if state.is_current(ticket) {
                (f.borrow_mut())();
            }
        });
    }
}

/// Leading-edge rate limiter for high-frequency events (scroll, resize).
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fired: None,
        }
    }

    /// Whether a call arriving at `now_ms` may fire.
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Wall-clock milliseconds, for throttling.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_and_uses_comma() {
        assert_eq!(format_price(1234.56), "1\u{202f}234,56\u{a0}€");
        assert_eq!(format_price(8.5), "8,50\u{a0}€");
        assert_eq!(format_price(0.0), "0,00\u{a0}€");
        assert_eq!(format_price(1_000_000.0), "1\u{202f}000\u{202f}000,00\u{a0}€");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-42.1), "-42,10\u{a0}€");
    }

    #[test]
    fn test_format_date_long_french() {
        assert_eq!(format_date("2024-05-15").as_deref(), Some("15 mai 2024"));
        assert_eq!(
            format_date("2026-08-01T09:30:00+02:00").as_deref(),
            Some("1 août 2026")
        );
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn test_debouncer_only_latest_ticket_fires() {
        let state = Debouncer::new();
        let first = state.arm();
        let second = state.arm();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_throttle_gates_calls_within_interval() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.should_fire(0.0));
        assert!(!throttle.should_fire(50.0));
        assert!(!throttle.should_fire(99.0));
        assert!(throttle.should_fire(150.0));
        assert!(!throttle.should_fire(200.0));
    }
}
