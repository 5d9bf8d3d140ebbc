use std::path::Path;

use eframe::egui;
use egui_plot::{Line, Plot, Points, Polygon};
use nalgebra::Vector3;
use tracing::warn;

use orbit_sim::physics::gravity::EARTH_RADIUS;
use orbit_sim::sim::FrameClock;
use orbit_sim::{Config, OrbitalElements, Propagator};

const ORBIT_SAMPLES: usize = 256;

fn main() -> eframe::Result {
    let config = Config::load_or_default(Path::new("orbit.ron")).unwrap_or_else(|err| {
        orbit_sim::logging::init_logging("info");
        warn!(%err, "falling back to default configuration");
        Config::default()
    });
    orbit_sim::logging::init_logging(&config.log_level);

    let app = OrbitViz {
        prop: config.orbit.build(),
        clock: FrameClock::new(config.sim.time_multiplier, config.sim.max_frame_dt),
        show_help: false,
        show_about: false,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native("Satellite Orbit Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    prop: Propagator,
    clock: FrameClock,
    show_help: bool,
    show_about: bool,
}

impl OrbitViz {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Time Controls");
        let mut multiplier = self.clock.multiplier();
        let slider = egui::Slider::new(&mut multiplier, 0.1..=100.0)
            .logarithmic(true)
            .suffix("x")
            .text("Time Multiplier");
        if ui.add(slider).changed() {
            self.clock.set_multiplier(multiplier);
        }
        if ui.button("Reset Time").clicked() {
            self.clock.reset_multiplier();
        }

        ui.separator();
        ui.heading("Orbital Elements");

        // Slider edits go through the validating setters; rejected values are
        // simply dropped, the next frame shows the stored value again.
        let el = self.prop.elements();
        let (mut a, mut e, mut i, mut w, mut o) = (el.sma, el.ecc, el.inc, el.argp, el.raan);
        if ui.add(egui::Slider::new(&mut a, 8.0..=20.0).text("Semi-major Axis")).changed() {
            let _ = self.prop.set_semimajor_axis(a);
        }
        if ui.add(egui::Slider::new(&mut e, 0.0..=0.9).text("Eccentricity")).changed() {
            let _ = self.prop.set_eccentricity(e);
        }
        if ui.add(degree_slider(&mut i, 90.0, "Inclination")).changed() {
            let _ = self.prop.set_inclination(i);
        }
        if ui.add(degree_slider(&mut w, 360.0, "Arg. of Periapsis")).changed() {
            let _ = self.prop.set_argument_of_periapsis(w);
        }
        if ui.add(degree_slider(&mut o, 360.0, "Long. of Asc. Node")).changed() {
            let _ = self.prop.set_longitude_of_ascending_node(o);
        }

        ui.separator();
        ui.heading("Orbital Information");
        let pos = self.prop.satellite_position();
        ui.label(format!("Period: {:.2} time units", self.prop.period()));
        ui.label(format!("Current Position: ({:.2}, {:.2}, {:.2})", pos.x, pos.y, pos.z))
            .on_hover_text("Satellite position in the reference frame");
        ui.label(format!("Radius: {:.2}   Altitude: {:.2}", pos.norm(), pos.norm() - EARTH_RADIUS));
        ui.label(format!("Mean anomaly: {:.1} deg", self.prop.mean_anomaly().to_degrees()));
        ui.label(format!("True anomaly: {:.1} deg", self.prop.true_anomaly().to_degrees()));
        ui.label(format!("Sim time: {:.2}", self.clock.elapsed()));

        if ui.button("Reset Orbit").clicked() {
            let d = OrbitalElements::default();
            let _ = self.prop.set_semimajor_axis(d.sma);
            let _ = self.prop.set_eccentricity(d.ecc);
            let _ = self.prop.set_inclination(d.inc);
            let _ = self.prop.set_argument_of_periapsis(d.argp);
            let _ = self.prop.set_longitude_of_ascending_node(d.raan);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("About").clicked() {
                self.show_about = !self.show_about;
            }
            if ui.button("Controls Help").clicked() {
                self.show_help = !self.show_help;
            }
        });
        if self.show_help {
            ui.label("Drag a plot to pan, scroll to zoom, double-click to reset the view.");
        }
        if self.show_about {
            ui.label("Satellite Orbit Simulator");
            ui.label(
                "Two-body Keplerian propagation: Newton-Raphson on Kepler's equation, \
                 then a perifocal to reference rotation.",
            );
        }
    }
}

fn degree_slider<'a>(value: &'a mut f64, max: f64, text: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, 0.0..=max).suffix(" deg").text(text)
}

/// Project reference-frame points onto a plane given two axis indices.
fn project(points: &[Vector3<f64>], u: usize, v: usize) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p[u], p[v]]).collect()
}

fn earth_disc() -> Vec<[f64; 2]> {
    (0..64)
        .map(|k| {
            let t = std::f64::consts::TAU * k as f64 / 64.0;
            [EARTH_RADIUS * t.cos(), EARTH_RADIUS * t.sin()]
        })
        .collect()
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let raw_dt = ctx.input(|i| i.stable_dt) as f64;
        let dt = self.clock.step(raw_dt);
        self.prop.update(dt);

        egui::SidePanel::left("controls").min_width(300.0).show(ctx, |ui| {
            self.controls(ui);
        });

        let path = self.prop.orbit_path(ORBIT_SAMPLES);
        let sat = [self.prop.satellite_position()];

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                let views = [("top", "Top view (X-Y)", 1), ("side", "Side view (X-Z)", 2)];
                for (id, label, v_axis) in views {
                    ui.vertical(|ui| {
                        ui.label(label);
                        Plot::new(id)
                            .width(half_w)
                            .height(available.y - 24.0)
                            .data_aspect(1.0)
                            .x_axis_label("X")
                            .show(ui, |plot_ui| {
                                plot_ui.polygon(Polygon::new("Earth", earth_disc()));
                                plot_ui.line(Line::new("Orbit", project(&path, 0, v_axis)));
                                let marker = Points::new("Satellite", project(&sat, 0, v_axis));
                                plot_ui.points(marker.radius(5.0));
                            });
                    });
                }
            });
        });

        ctx.request_repaint();
    }
}
