//! Time source, sleeps and request timeouts.
//!
//! Controllers never touch `setTimeout` or `Date` directly; they go through
//! a [`Clock`] so tests can drive time by hand.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, LocalBoxFuture, select};

const MS_PER_DAY: i64 = 86_400_000;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Resolve after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;

    /// Run `task` once, `ms` milliseconds from now, without blocking the caller.
    fn schedule(&self, ms: u32, task: Box<dyn FnOnce()>);

    /// Wall-clock label for a timestamp, e.g. `"02:05 pm"`. Defaults to UTC.
    fn time_label(&self, timestamp_ms: f64) -> String {
        let (hours, minutes) = utc_hours_minutes(timestamp_ms);
        format_time_label(hours, minutes)
    }
}

/// Clock backed by `Date.now()` and `setTimeout` in the browser.
///
/// Outside the browser there is no event-loop timer, so sleeps complete
/// immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "hydrate")]
        {
            use futures::FutureExt;
            gloo_timers::future::TimeoutFuture::new(ms).boxed_local()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Box::pin(std::future::ready(()))
        }
    }

    /// Outside the browser the task runs immediately.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn schedule(&self, ms: u32, task: Box<dyn FnOnce()>) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(ms, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            task();
        }
    }

    /// Uses the browser's local time zone.
    #[cfg(feature = "hydrate")]
    fn time_label(&self, timestamp_ms: f64) -> String {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_time_label(date.get_hours(), date.get_minutes())
    }
}

/// Race `fut` against a `ms` sleep on `clock`. `None` means the sleep won.
pub async fn with_timeout<C, F>(clock: &C, ms: u32, fut: F) -> Option<F::Output>
where
    C: Clock + ?Sized,
    F: Future,
{
    let fut = pin!(fut);
    match select(fut, clock.sleep(ms)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Lowercase 12-hour label with two-digit hour and minute.
pub fn format_time_label(hours: u32, minutes: u32) -> String {
    let suffix = if hours % 24 < 12 { "am" } else { "pm" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{:02} {suffix}", minutes % 60)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(timestamp_ms: f64) -> (u32, u32) {
    let ms_of_day = (timestamp_ms as i64).rem_euclid(MS_PER_DAY);
    let minutes_of_day = (ms_of_day / 60_000) as u32;
    (minutes_of_day / 60, minutes_of_day % 60)
}
