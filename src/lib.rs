use std::time::{SystemTime, UNIX_EPOCH};

use eframe::egui;
use egui::{Color32, Event, PointerButton, Rect, Stroke};

mod colors;
mod replay;
mod store;

pub use store::{Sample, StrokeStore};

/// Fixed width for every painted stroke.
const STROKE_WIDTH: f32 = 16.0;

/// The drawing surface: a full-window canvas that records pointer input into
/// the [`StrokeStore`] and replays the whole history every frame.
#[derive(Default)]
pub struct ScribbleApp {
    store: StrokeStore,
}

impl ScribbleApp {
    /// Maps the frame's pointer events onto store appends. The store gate
    /// decides what sticks: starts always land, points and stops only while
    /// a stroke is open.
    fn record_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|input| input.events.clone());
        for event in events {
            match event {
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    self.store.append(Sample::StrokeStart);
                }
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                }
                | Event::PointerGone => {
                    self.store.append(Sample::StrokeStop);
                }
                Event::PointerMoved(pos) => {
                    if !self.store.append(Sample::Point(pos)) {
                        log::trace!("dropped move sample at {pos:?}: no open stroke");
                    }
                }
                _ => {}
            }
        }
    }

    /// Repaints the background and replays every recorded stroke.
    fn paint(&self, painter: &egui::Painter, canvas: Rect) {
        painter.rect_filled(canvas, 0.0, Color32::BLACK);

        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0);

        for path in replay::stroke_paths(self.store.samples()) {
            if path.points.len() >= 2 {
                painter.add(egui::Shape::line(
                    path.points,
                    Stroke::new(STROKE_WIDTH, colors::sweep_color(now_ms, path.counter)),
                ));
            }
        }
    }
}

impl eframe::App for ScribbleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.record_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.paint(&painter, response.rect);
            });

        // Keep frames coming so the hue sweep animates for the whole
        // session, like a self-rescheduling refresh callback.
        ctx.request_repaint();
    }
}
