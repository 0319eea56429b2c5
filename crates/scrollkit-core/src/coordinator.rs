//! Coordinator: data ownership and public API for all per-frame paths.
//!
//! Entry points:
//! - new, register_target, register_section, create_gate / bind_wave_gate
//! - on_scroll_event / on_resize_event (throttled: side-nav + header)
//! - on_scroll_frame / on_pointer_frame (frame-gated: parallax, badge, drift)
//! - update (continuous tick: marquee tracks + wave characters)
//!
//! All state that survives a frame lives here: throttle deadlines, gate
//! flags, the wave time accumulator, the frame-skip counter, and the last
//! emitted side-nav focus. Everything else is recomputed from the sample.

use crate::config::Config;
use crate::emitters::{badge, header, marquee, parallax, pointer, sidenav, wave};
use crate::error::ConfigError;
use crate::gate::VisibilityGate;
use crate::ids::{GateId, IdAllocator, TargetId};
use crate::outputs::{Change, Event, Outputs, Visual};
use crate::registry::{Registry, Role};
use crate::sample::{FrameSample, PointerSample, ViewportSample};
use crate::throttle::Throttle;

#[derive(Debug)]
pub struct Coordinator {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    registry: Registry,

    // Gating state
    nav_throttle: Throttle,
    header_scroll: Throttle,
    header_resize: Throttle,
    gates: Vec<(GateId, VisibilityGate)>,
    wave_gate: Option<GateId>,

    // Accumulators
    wave_time: f32,
    elapsed_s: f32,
    active_frames: u64,
    last_focus: Option<usize>,

    // Per-tick outputs
    pending_events: Vec<Event>,
    outputs: Outputs,
}

impl Coordinator {
    /// Create a coordinator from a validated config.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            nav_throttle: Throttle::new(cfg.throttle.nav_ms),
            header_scroll: Throttle::new(cfg.throttle.header_scroll_ms),
            header_resize: Throttle::new(cfg.throttle.header_resize_ms),
            cfg,
            ids: IdAllocator::new(),
            registry: Registry::new(),
            gates: Vec::new(),
            wave_gate: None,
            wave_time: 0.0,
            elapsed_s: 0.0,
            active_frames: 0,
            last_focus: None,
            pending_events: Vec::new(),
            outputs: Outputs::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Register one animated element; membership is fixed after mount.
    pub fn register_target(&mut self, role: Role) -> TargetId {
        let id = self.ids.alloc_target();
        self.registry.insert(id, role);
        id
    }

    /// Register one scroll section in document order; returns its index.
    pub fn register_section(&mut self, name: &str, label: usize) -> usize {
        self.registry.push_section(name, label)
    }

    /// Allocate a visibility gate (initially not visible).
    pub fn create_gate(&mut self) -> GateId {
        let id = self.ids.alloc_gate();
        self.gates.push((id, VisibilityGate::new()));
        id
    }

    /// Nominate the gate that pauses/resumes the wave accumulator.
    pub fn bind_wave_gate(&mut self, gate: GateId) {
        self.wave_gate = Some(gate);
    }

    /// Intersection callback entry: flips a gate and records wave
    /// pause/resume transitions for the next tick's outputs.
    pub fn set_visible(&mut self, gate: GateId, visible: bool) {
        let changed = self
            .gates
            .iter_mut()
            .find(|(g, _)| *g == gate)
            .and_then(|(_, v)| v.set(visible));
        if let Some(now_visible) = changed {
            if self.wave_gate == Some(gate) {
                self.pending_events.push(if now_visible {
                    Event::WaveResumed
                } else {
                    Event::WavePaused
                });
            }
        }
    }

    pub fn gate_visible(&self, gate: GateId) -> bool {
        self.gates
            .iter()
            .find(|(g, _)| *g == gate)
            .is_some_and(|(_, v)| v.is_visible())
    }

    /// Current wave phase accumulator (frozen while the gate is closed).
    pub fn wave_time(&self) -> f32 {
        self.wave_time
    }

    fn begin(&mut self) {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending_events);
    }

    fn wave_visible(&self) -> bool {
        self.wave_gate.map_or(false, |g| self.gate_visible(g))
    }

    /// Throttled scroll path: side-nav labels and header chrome.
    pub fn on_scroll_event(&mut self, now_ms: f64, sample: &FrameSample) -> &Outputs {
        self.begin();

        if self.nav_throttle.allow(now_ms) {
            self.emit_sidenav(sample);
        }
        if self.header_scroll.allow(now_ms) {
            self.emit_header(&sample.viewport);
        }
        &self.outputs
    }

    /// Throttled resize path: header chrome only.
    pub fn on_resize_event(&mut self, now_ms: f64, viewport: &ViewportSample) -> &Outputs {
        self.begin();
        if self.header_resize.allow(now_ms) {
            self.emit_header(viewport);
        }
        &self.outputs
    }

    /// Frame-gated scroll path: hero parallax, blob float, badge rotation.
    pub fn on_scroll_frame(&mut self, sample: &FrameSample) -> &Outputs {
        self.begin();
        let vp = &sample.viewport;

        if let Some(hero_id) = self.registry.find(&Role::Hero) {
            if let Some(visual) = parallax::hero(vp, &self.cfg.parallax) {
                self.outputs.push_change(Change {
                    target: hero_id,
                    visual,
                });
            }
        }

        let blob_changes: Vec<Change> = self
            .registry
            .blobs()
            .map(|(target, index)| Change {
                target,
                visual: Visual::translate_y(parallax::blob_y(
                    vp.scroll_y,
                    index,
                    &self.cfg.parallax,
                )),
            })
            .collect();
        for change in blob_changes {
            self.outputs.push_change(change);
        }

        if let Some(badge_id) = self.registry.find(&Role::Badge) {
            if let Some(deg) = badge::rotation(vp, &self.cfg.badge) {
                self.outputs.push_change(Change {
                    target: badge_id,
                    visual: Visual::rotate(deg),
                });
            }
        }
        &self.outputs
    }

    /// Frame-gated pointer path: blob drift toward the pointer.
    pub fn on_pointer_frame(&mut self, pointer: &PointerSample) -> &Outputs {
        self.begin();
        let changes: Vec<Change> = self
            .registry
            .blobs()
            .map(|(target, index)| {
                let (x, y) = pointer::blob_drift(pointer, index, &self.cfg.pointer);
                Change {
                    target,
                    visual: Visual::translate(x, y),
                }
            })
            .collect();
        for change in changes {
            self.outputs.push_change(change);
        }
        &self.outputs
    }

    /// Continuous tick: marquee track translation plus the gated wave.
    ///
    /// `dt` only drives the horizontal marquee clock; the wave phase advances
    /// by a fixed step per active frame, so a dropped frame slows the wave
    /// rather than making it jump.
    pub fn update(&mut self, dt: f32, sample: &FrameSample) -> &Outputs {
        self.begin();
        self.elapsed_s += dt;

        if let Some(total_width) = sample.marquee_width {
            let elapsed = self.elapsed_s;
            let track_changes: Vec<Change> = self
                .registry
                .marquee_tracks()
                .map(|(target, index)| Change {
                    target,
                    visual: Visual::translate(
                        marquee::track_x(elapsed, index, total_width, &self.cfg.marquee),
                        0.0,
                    ),
                })
                .collect();
            for change in track_changes {
                self.outputs.push_change(change);
            }
        }

        if self.wave_visible() && !sample.chars.is_empty() {
            self.active_frames += 1;
            if self.active_frames % u64::from(self.cfg.wave.frame_skip) == 0 {
                self.wave_time += self.cfg.wave.speed;
                for ch in &sample.chars {
                    let (y, rotation) = wave::char_offset(ch.center_x, self.wave_time, &self.cfg.wave);
                    self.outputs.push_change(Change {
                        target: ch.target,
                        visual: Visual::Transform {
                            translate_x: 0.0,
                            translate_y: y,
                            rotate_deg: rotation,
                            scale: 1.0,
                        },
                    });
                }
            }
        }
        &self.outputs
    }

    fn emit_sidenav(&mut self, sample: &FrameSample) {
        let sections = self.registry.sections();
        if sections.is_empty() {
            return;
        }
        let focus = sample.viewport.focus_point();
        let Some(idx) = sidenav::select(sections, &sample.section_tops, focus) else {
            // Above every section: labels stay stale on purpose.
            return;
        };
        if self.last_focus == Some(idx) {
            return;
        }
        let section_name = sections[idx].name.clone();
        let (left, right) = sidenav::pair(&self.cfg.sidenav.cycle, sections[idx].label);
        self.last_focus = Some(idx);
        log::debug!("side-nav focus moved to '{section_name}' ({left}/{right})");

        if let Some(target) = self.registry.find(&Role::NavLeft) {
            self.outputs.push_change(Change {
                target,
                visual: Visual::Label { text: left },
            });
        }
        if let Some(target) = self.registry.find(&Role::NavRight) {
            self.outputs.push_change(Change {
                target,
                visual: Visual::Label { text: right },
            });
        }
        self.outputs.push_event(Event::FocusChanged {
            section: section_name,
        });
    }

    fn emit_header(&mut self, viewport: &ViewportSample) {
        if let Some(target) = self.registry.find(&Role::Header) {
            self.outputs.push_change(Change {
                target,
                visual: Visual::HeaderChrome {
                    transparent: header::transparent(viewport.width, &self.cfg.header),
                },
            });
        }
    }
}
