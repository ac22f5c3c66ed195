//! Output handles the connection flow writes to.
//!
//! The DOM implementations live next to the trait definitions; tests supply
//! in-memory recorders instead.

use crate::utils::constants::HIDDEN_CLASS;
use web_sys::{HtmlElement, Window};

/// Element whose text can be replaced.
pub trait TextSink {
    fn set_text(&self, text: &str);
}

/// Container that starts hidden and can be revealed.
pub trait PanelSink {
    /// Revealing an already visible panel does nothing.
    fn reveal(&self);
}

/// Blocking user notification.
pub trait AlertSink {
    fn alert(&self, message: &str);
}

/// Everything `connect_wallet` may touch.
#[derive(Clone, Copy)]
pub struct Sinks<'a> {
    pub address: &'a dyn TextSink,
    pub network: &'a dyn TextSink,
    pub info_panel: &'a dyn PanelSink,
    pub alerts: &'a dyn AlertSink,
}

impl TextSink for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }
}

impl PanelSink for HtmlElement {
    fn reveal(&self) {
        if let Err(e) = self.class_list().remove_1(HIDDEN_CLASS) {
            log::warn!("Failed to remove '{}' class: {:?}", HIDDEN_CLASS, e);
        }
    }
}

impl AlertSink for Window {
    fn alert(&self, message: &str) {
        if let Err(e) = self.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
