//! Wall clock, delays, and repeating tickers.
//!
//! In the browser these run on `js_sys::Date` and `gloo-timers`; native
//! builds read the system clock and resolve delays immediately.

use time::OffsetDateTime;

/// Current UTC time.
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "csr")]
    {
        // Date::now() is milliseconds since the epoch as f64.
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Wait for `ms` milliseconds.
#[cfg_attr(not(feature = "csr"), allow(unused_variables, clippy::unused_async))]
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Call `tick` every `period_ms` until it returns `false` or the owning
/// reactive scope is cleaned up.
///
/// Must be called while a component is rendering so the cleanup hook lands
/// on that component.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn spawn_ticker<F>(period_ms: u32, tick: F)
where
    F: FnMut() -> bool + 'static,
{
    #[cfg(feature = "csr")]
    {
        use futures::StreamExt;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let mut tick = tick;
        leptos::task::spawn_local(async move {
            let mut ticks = gloo_timers::future::IntervalStream::new(period_ms);
            while ticks.next().await.is_some() {
                if !alive_task.load(Ordering::Relaxed) || !tick() {
                    break;
                }
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
}
