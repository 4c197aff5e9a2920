//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;
use gloo_timers::callback::Timeout;

const BANNER_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerMessage {
    pub kind: BannerKind,
    pub text: String,
    /// Distinguishes repeats of the same text
    pub seq: u32,
}

impl BannerMessage {
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Info => "banner banner-info",
            BannerKind::Error => "banner banner-error",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the project list - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Current banner, if any
    pub banner: RwSignal<Option<BannerMessage>>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            banner: RwSignal::new(None),
        }
    }

    /// Trigger a reload of the project list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(BannerKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        web_sys::console::log_1(&format!("[APP] error: {}", text).into());
        self.show(BannerKind::Error, text);
    }

    fn show(&self, kind: BannerKind, text: String) {
        let seq = self
            .banner
            .get_untracked()
            .map(|b| b.seq.wrapping_add(1))
            .unwrap_or(0);
        self.banner.set(Some(BannerMessage { kind, text, seq }));

        // Only clear the message this timeout was started for
        let banner = self.banner;
        Timeout::new(BANNER_MS, move || {
            if banner.try_get_untracked().flatten().is_some_and(|b| b.seq == seq) {
                banner.set(None);
            }
        })
        .forget();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
