//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame UI: screen tabs, the active screen, the status
//! bar, the confirmation modal and queued toasts.

pub mod chart;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppLike, RpcStatus, Screen};
use crate::guard::HOLD_TICK_INTERVAL;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::widgets::{safety_guard_modal, status_bar};
use std::time::Duration;

/// Repaint cadence when nothing is animating; picks up task results
const IDLE_REPAINT: Duration = Duration::from_millis(250);

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Read state for rendering
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => {
            // Lock is held by another task, skip this frame
            ctx.request_repaint();
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    let theme = Theme::default();

    // Ctrl+Tab cycles screens, but not while the modal is open
    if state.modal.is_none() && ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Tab)) {
        app.next_screen();
    }

    egui::TopBottomPanel::top("screen_tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for &screen in Screen::all() {
                let selected = screen == state.current_screen;
                if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                    app.handle_screen_change(screen);
                }
            }
        });
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        status_bar::render_status_bar(ui, &state, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::SwapTerminal => screens::swap_terminal::render(ui, &state, app),
        Screen::MarketView => screens::market_view::render(ui, &state, app),
    });

    if let Some(modal) = &state.modal {
        safety_guard_modal::render(ctx, modal, app, &theme);
    }

    let pending = std::mem::take(&mut app.state.write().pending_notifications);
    notifications.push_all(pending);
    notifications.show(ctx);

    let syncing = state.terminal.rpc == RpcStatus::Syncing || state.market.form.rpc == RpcStatus::Syncing;
    if app.is_holding() {
        ctx.request_repaint_after(HOLD_TICK_INTERVAL);
    } else if syncing {
        ctx.request_repaint_after(Duration::from_millis(50));
    } else {
        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
