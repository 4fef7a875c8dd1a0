//! # Notifications Widget
//!
//! Toast notification system using egui-notify for swap outcomes and node
//! status changes.

use crate::app::Notification;
use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Turn queued state notifications into toasts
    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            match notification {
                Notification::Success(message) => self.success(message),
                Notification::Info(message) => self.info(message),
                Notification::Warning(message) => self.warning(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
