//! Platform glue for async work shared by wasm and native builds.

use std::future::Future;

/// Spawn a future on the Dioxus runtime. Must be called from component or
/// event-handler scope.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(fut);
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
