//! Transient status banner.
//!
//! Notices auto-dismiss after a few seconds and never block interaction;
//! a newer notice simply replaces an older one.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::platform;

const DISMISS_AFTER_MS: u64 = 6_000;

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn class_name(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    seq: u64,
}

/// Show a notice and schedule its dismissal. The sequence check keeps an old
/// timer from clearing a notice that replaced it. Must run in component or
/// handler scope.
pub fn announce(mut slot: Signal<Option<Notice>>, kind: NoticeKind, message: impl Into<String>) {
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    slot.set(Some(Notice {
        kind,
        message: message.into(),
        seq,
    }));

    platform::spawn_future(async move {
        platform::sleep_ms(DISMISS_AFTER_MS).await;
        let current = slot.peek().as_ref().map(|notice| notice.seq);
        if current == Some(seq) {
            slot.set(None);
        }
    });
}

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let Some(current) = notice() else {
        return rsx! {};
    };

    let class = format!("notice notice--{}", current.kind.class_name());
    rsx! {
        p { class: "{class}", role: "status", "{current.message}" }
    }
}
