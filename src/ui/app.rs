// Main UI App

use crate::config::{CanvasStyle, SketchConfig};
use crate::messaging::{ChangeConsumer, ChangeNotification, create_change_channel};
use crate::sketch::{ChordModifiers, EditShortcut, SketchPhase, SketchSession, shortcut_for};
use crate::ui::canvas;
use eframe::egui;
use std::time::Duration;

/// How long the last change stays in the status bar
const STATUS_VISIBLE_MS: u64 = 4000;

pub struct SketchApp {
    session: SketchSession,
    style: CanvasStyle,
    // Notification system
    change_rx: ChangeConsumer,
    last_change: Option<ChangeNotification>,
}

impl SketchApp {
    pub fn new(config: &SketchConfig) -> Self {
        let (change_tx, change_rx) = create_change_channel(config.notification_capacity);

        Self {
            session: SketchSession::with_config(config).with_change_channel(change_tx),
            style: config.canvas.clone(),
            change_rx,
            last_change: None,
        }
    }

    /// Drain change notifications; only the latest one is displayed
    fn update_notifications(&mut self) {
        while let Some(notification) = ringbuf::traits::Consumer::try_pop(&mut self.change_rx) {
            self.last_change = Some(notification);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let shortcuts: Vec<EditShortcut> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => key_char(*key).and_then(|c| {
                        shortcut_for(
                            c,
                            ChordModifiers {
                                command: modifiers.command,
                                shift: modifiers.shift,
                            },
                        )
                    }),
                    _ => None,
                })
                .collect()
        });

        for shortcut in shortcuts {
            self.session.dispatch(shortcut.into());
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let undo = ui.add_enabled(self.session.can_undo(), egui::Button::new("Undo"));
            let undo = match self.session.undo_description() {
                Some(description) => undo.on_hover_text(format!("Undo: {description} (Ctrl+Z)")),
                None => undo,
            };
            if undo.clicked() {
                self.session.undo_requested();
            }

            let redo = ui.add_enabled(self.session.can_redo(), egui::Button::new("Redo"));
            let redo = match self.session.redo_description() {
                Some(description) => redo.on_hover_text(format!("Redo: {description} (Ctrl+Y)")),
                None => redo,
            };
            if redo.clicked() {
                self.session.redo_requested();
            }

            ui.separator();
            ui.label(phase_hint(self.session.phase()));
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let snapshot = self.session.snapshot();
            ui.label(format!(
                "Polygons: {}  Vertices: {}",
                snapshot.polygons.len(),
                snapshot.current_points.len()
            ));

            if let Some(change) = self.last_change.as_ref().filter(|c| c.is_recent(STATUS_VISIBLE_MS)) {
                ui.separator();
                ui.label(change.status_text());
                ui.ctx().request_repaint_after(Duration::from_millis(500));
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let point = canvas::to_canvas(rect, pos);
                let timestamp_ms = ui.input(|i| (i.time * 1000.0) as i64);
                self.session.pointer_click(point.x, point.y, timestamp_ms);
            }
        }

        let cursor = response.hover_pos().map(|pos| canvas::to_canvas(rect, pos));
        canvas::paint_sketch(&painter, rect, &self.session.snapshot(), &self.style, cursor);
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_notifications();

        let revision = self.session.revision();
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| self.canvas(ui));

        // Notifications for this frame's edits are picked up on the next one
        if self.session.revision() != revision {
            ctx.request_repaint();
        }
    }
}

fn key_char(key: egui::Key) -> Option<char> {
    match key {
        egui::Key::Z => Some('z'),
        egui::Key::Y => Some('y'),
        _ => None,
    }
}

fn phase_hint(phase: SketchPhase) -> &'static str {
    match phase {
        SketchPhase::Empty => "Click to start a polygon",
        SketchPhase::Drawing => "Click to add vertices",
        SketchPhase::Closeable => "Double-click to close the polygon",
    }
}
