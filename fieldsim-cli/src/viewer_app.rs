//! Interactive scenario viewer.
//!
//! Implements the core's canvas contract over an egui painter: markers are
//! drawn as shapes, trails as polylines, and field-grid vectors as thin
//! segments, with play/pause/step controls on top.

use eframe::egui;
use fieldsim_core::{
    build, draw_field_grid, step_simulation, Canvas, MarkerId, Scenario, ScenarioKind, Shape,
    SimState,
};
use glam::Vec2;

/// Trail points kept per marker before the oldest are dropped.
const MAX_TRAIL_POINTS: usize = 20_000;

struct SceneMarker {
    pos: Vec2,
    color: Option<String>,
    shape: Shape,
    trail_on: bool,
    trail: Vec<Vec2>,
}

/// Retained drawing state fed by the simulation through the canvas trait
struct SceneCanvas {
    extent: (f32, f32),
    markers: Vec<SceneMarker>,
    segments: Vec<(Vec2, Vec2)>,
    ticks_per_frame: u32,
}

impl SceneCanvas {
    fn new(extent: (f32, f32)) -> Self {
        Self {
            extent,
            markers: Vec::new(),
            segments: Vec::new(),
            ticks_per_frame: 1,
        }
    }
}

impl Canvas for SceneCanvas {
    fn create_marker(
        &mut self,
        pos: Vec2,
        color: Option<&str>,
        shape: Shape,
        trail: bool,
    ) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(SceneMarker {
            pos,
            color: color.map(str::to_string),
            shape,
            trail_on: trail,
            trail: vec![pos],
        });
        id
    }

    fn move_marker(&mut self, id: MarkerId, pos: Vec2) {
        let marker = &mut self.markers[id.0];
        marker.pos = pos;
        if marker.trail_on {
            if marker.trail.len() >= MAX_TRAIL_POINTS {
                marker.trail.remove(0);
            }
            marker.trail.push(pos);
        }
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2) {
        self.segments.push((from, to));
    }

    fn batch_frames(&mut self, ticks_per_frame: u32) {
        self.ticks_per_frame = ticks_per_frame.max(1);
    }

    fn screen_extent(&self) -> (f32, f32) {
        self.extent
    }
}

fn color_from_tag(tag: Option<&str>) -> egui::Color32 {
    match tag {
        Some("red") => egui::Color32::from_rgb(220, 60, 60),
        Some("green") => egui::Color32::from_rgb(60, 180, 90),
        Some("blue") => egui::Color32::from_rgb(80, 120, 230),
        Some("gray") => egui::Color32::GRAY,
        Some("black") => egui::Color32::from_gray(30),
        _ => egui::Color32::LIGHT_BLUE,
    }
}

/// Scenario viewer application
pub struct ViewerApp {
    kind: ScenarioKind,
    scenario: Option<Scenario>,
    scene: SceneCanvas,
    last_error: Option<String>,
    playing: bool,
    speed_multiplier: f32,
}

impl ViewerApp {
    pub fn new(kind: ScenarioKind, _cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            kind,
            scenario: None,
            scene: SceneCanvas::new((400.0, 400.0)),
            last_error: None,
            playing: false,
            speed_multiplier: 1.0,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        self.scene = SceneCanvas::new(self.scene.extent);
        self.last_error = None;
        self.playing = false;

        match build(self.kind) {
            Ok(mut scenario) => {
                self.scene.batch_frames(scenario.ticks_per_frame);
                scenario.sim.attach_markers(&mut self.scene);
                if let Some(grid) = scenario.grid {
                    if let Err(e) =
                        draw_field_grid(&scenario.sim.world, grid.field, grid.spacing, &mut self.scene)
                    {
                        self.last_error = Some(format!("{}", e));
                    }
                }
                self.scenario = Some(scenario);
            }
            Err(e) => {
                self.last_error = Some(format!("{}", e));
                self.scenario = None;
            }
        }
    }

    fn advance(&mut self, ticks: u32) {
        if let Some(ref mut scenario) = self.scenario {
            for _ in 0..ticks {
                match step_simulation(&mut scenario.sim, &mut self.scene) {
                    Ok(true) => {
                        self.playing = false;
                        break;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        self.last_error = Some(format!("{}", e));
                        self.playing = false;
                        break;
                    }
                }
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let finished = self
                    .scenario
                    .as_ref()
                    .map(|s| s.sim.state() == SimState::Finished)
                    .unwrap_or(true);

                if ui
                    .add_enabled(
                        !finished,
                        egui::Button::new(if self.playing { "⏸ Pause" } else { "▶ Play" }),
                    )
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reload();
                }

                if ui.add_enabled(!finished, egui::Button::new("⏭ Step")).clicked() {
                    self.advance(1);
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

                ui.separator();

                if let Some(ref scenario) = self.scenario {
                    ui.label(format!(
                        "{}: tick {} / {} ({:.2}s)",
                        scenario.label,
                        scenario.sim.current_step,
                        scenario.sim.max_steps,
                        scenario.sim.elapsed_time()
                    ));
                    if finished {
                        ui.label(egui::RichText::new("finished").italics());
                    }
                }
            });
        });

        // Main canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            // Map world coordinates (extent centered on the origin, y up)
            // onto the panel.
            let (world_w, world_h) = self.scene.extent;
            let center = rect.center();
            let scale =
                (rect.width() / world_w).min(rect.height() / world_h) * 0.9;
            let to_screen =
                |p: Vec2| center + egui::vec2(p.x * scale, -p.y * scale);

            // Field-grid vectors
            for (from, to) in &self.scene.segments {
                painter.line_segment(
                    [to_screen(*from), to_screen(*to)],
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                );
            }

            // Trails
            for marker in &self.scene.markers {
                if marker.trail.len() < 2 {
                    continue;
                }
                let color = color_from_tag(marker.color.as_deref());
                for pair in marker.trail.windows(2) {
                    painter.line_segment(
                        [to_screen(pair[0]), to_screen(pair[1])],
                        egui::Stroke::new(1.0, color.gamma_multiply(0.5)),
                    );
                }
            }

            // Markers
            for marker in &self.scene.markers {
                let color = color_from_tag(marker.color.as_deref());
                let pos = to_screen(marker.pos);
                match marker.shape {
                    Shape::Circle => painter.circle_filled(pos, 6.0, color),
                    Shape::Arrow => painter.circle_filled(pos, 4.0, color),
                    Shape::Square => painter.rect_filled(
                        egui::Rect::from_center_size(pos, egui::vec2(10.0, 10.0)),
                        0.0,
                        color,
                    ),
                };
            }

            // Body names, in marker order
            if let Some(ref scenario) = self.scenario {
                for (body, marker) in scenario.sim.world.bodies.iter().zip(&self.scene.markers) {
                    painter.text(
                        to_screen(marker.pos) + egui::vec2(0.0, 12.0),
                        egui::Align2::CENTER_TOP,
                        &body.name,
                        egui::FontId::default(),
                        egui::Color32::WHITE,
                    );
                }
            }

            if let Some(ref error) = self.last_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        // Simulation stepping
        if self.playing {
            let ticks_per_frame = self.scene.ticks_per_frame;
            let ticks = (ticks_per_frame as f32 * self.speed_multiplier)
                .round()
                .max(1.0) as u32;
            self.advance(ticks);
        }

        if self.playing {
            ctx.request_repaint();
        }
    }
}
