use scrollkit_core::{
    config::Config,
    coordinator::Coordinator,
    outputs::{Event, Visual},
    registry::Role,
    sample::{CharSample, FrameSample, ViewportSample},
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

struct Fixture {
    coord: Coordinator,
    gate: scrollkit_core::GateId,
    chars: Vec<scrollkit_core::TargetId>,
}

fn fixture() -> Fixture {
    let mut coord = Coordinator::new(Config::default()).expect("config");
    let chars: Vec<_> = (0..4)
        .map(|_| coord.register_target(Role::WaveChar { row: 0 }))
        .collect();
    let gate = coord.create_gate();
    coord.bind_wave_gate(gate);
    Fixture { coord, gate, chars }
}

fn tick_sample(chars: &[scrollkit_core::TargetId]) -> FrameSample {
    FrameSample {
        viewport: ViewportSample {
            scroll_y: 1700.0,
            width: 1280.0,
            height: 1000.0,
            document_height: 5000.0,
        },
        chars: chars
            .iter()
            .enumerate()
            .map(|(i, t)| CharSample {
                target: *t,
                center_x: i as f32 * 60.0,
            })
            .collect(),
        marquee_width: None,
        ..Default::default()
    }
}

#[test]
fn wave_frozen_while_gate_closed() {
    let mut fx = fixture();
    let sample = tick_sample(&fx.chars);

    // Gate starts closed: ticking produces no char changes and no phase.
    for _ in 0..10 {
        let out = fx.coord.update(1.0 / 60.0, &sample);
        assert!(out.changes.is_empty());
    }
    assert_eq!(fx.coord.wave_time(), 0.0);
}

#[test]
fn frame_skip_updates_every_other_active_frame() {
    let mut fx = fixture();
    let sample = tick_sample(&fx.chars);
    fx.coord.set_visible(fx.gate, true);

    let mut applied = 0;
    for _ in 0..8 {
        let out = fx.coord.update(1.0 / 60.0, &sample);
        if !out.changes.is_empty() {
            applied += 1;
            assert_eq!(out.changes.len(), fx.chars.len());
        }
    }
    assert_eq!(applied, 4);
    // 4 applied frames at the default 0.02 step.
    approx(fx.coord.wave_time(), 0.08, 1e-6);
}

#[test]
fn phase_resumes_where_it_paused() {
    let mut fx = fixture();
    let sample = tick_sample(&fx.chars);
    fx.coord.set_visible(fx.gate, true);
    for _ in 0..6 {
        fx.coord.update(1.0 / 60.0, &sample);
    }
    let paused_at = fx.coord.wave_time();
    assert!(paused_at > 0.0);

    fx.coord.set_visible(fx.gate, false);
    for _ in 0..20 {
        fx.coord.update(1.0 / 60.0, &sample);
    }
    assert_eq!(fx.coord.wave_time(), paused_at);

    fx.coord.set_visible(fx.gate, true);
    // Next applied frame continues from the frozen phase.
    let mut next_time = None;
    for _ in 0..2 {
        let out = fx.coord.update(1.0 / 60.0, &sample);
        if !out.changes.is_empty() {
            next_time = Some(fx.coord.wave_time());
        }
    }
    approx(next_time.expect("an applied frame"), paused_at + 0.02, 1e-6);
}

#[test]
fn gate_transitions_surface_as_events() {
    let mut fx = fixture();
    let sample = tick_sample(&fx.chars);

    fx.coord.set_visible(fx.gate, true);
    let out = fx.coord.update(1.0 / 60.0, &sample);
    assert!(out.events.contains(&Event::WaveResumed));

    fx.coord.set_visible(fx.gate, true); // no transition
    fx.coord.set_visible(fx.gate, false);
    let out = fx.coord.update(1.0 / 60.0, &sample);
    assert_eq!(out.events, vec![Event::WavePaused]);
}

#[test]
fn char_transform_follows_the_sinusoid() {
    let mut fx = fixture();
    let sample = tick_sample(&fx.chars);
    fx.coord.set_visible(fx.gate, true);

    // Second frame is the first applied one with the default skip of 2.
    let wave = fx.coord.config().wave;
    fx.coord.update(1.0 / 60.0, &sample);
    let out = fx.coord.update(1.0 / 60.0, &sample);
    let time = 0.02;
    for (i, change) in out.changes.iter().enumerate() {
        let phase = (i as f32 * 60.0) / wave.wavelength + time;
        match change.visual {
            Visual::Transform {
                translate_y,
                rotate_deg,
                ..
            } => {
                approx(translate_y, wave.amplitude * phase.sin(), 1e-4);
                approx(rotate_deg, wave.tilt_deg * phase.cos(), 1e-4);
            }
            ref other => panic!("unexpected visual {other:?}"),
        }
    }
}

#[test]
fn marquee_tracks_translate_and_wrap() {
    let mut coord = Coordinator::new(Config::default()).expect("config");
    let t0 = coord.register_target(Role::MarqueeTrack { index: 0 });
    let _t1 = coord.register_target(Role::MarqueeTrack { index: 1 });

    let sample = FrameSample {
        marquee_width: Some(600.0),
        ..Default::default()
    };
    // Half of row 0's duration: half the loop travelled.
    let out = coord.update(12.5, &sample);
    assert_eq!(out.changes.len(), 2);
    let x0 = out
        .changes
        .iter()
        .find(|c| c.target == t0)
        .map(|c| match c.visual {
            Visual::Transform { translate_x, .. } => translate_x,
            _ => panic!("expected transform"),
        })
        .expect("track 0");
    approx(x0, -300.0, 1e-3);

    // Without measured markup the marquee no-ops.
    let out = coord.update(1.0, &FrameSample::default());
    assert!(out.changes.is_empty());
}
