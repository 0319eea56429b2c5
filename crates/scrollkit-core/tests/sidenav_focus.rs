use scrollkit_core::{
    config::Config,
    coordinator::Coordinator,
    outputs::{Event, Visual},
    registry::Role,
    sample::{FrameSample, ViewportSample},
};

// Section layout from the original page: tops in document order, labels
// drawn from the EAT/DRINK/PLAY cycle.
const SECTIONS: [(&str, usize, f32); 6] = [
    ("hero", 0, 0.0),
    ("tagline", 0, 800.0),
    ("about", 0, 1600.0),
    ("split", 1, 2400.0),
    ("ambiance", 1, 3200.0),
    ("reserve", 2, 4000.0),
];

struct Fixture {
    coord: Coordinator,
    left: scrollkit_core::TargetId,
    right: scrollkit_core::TargetId,
}

fn fixture() -> Fixture {
    let mut coord = Coordinator::new(Config::default()).expect("config");
    let left = coord.register_target(Role::NavLeft);
    let right = coord.register_target(Role::NavRight);
    for (name, label, _) in SECTIONS {
        coord.register_section(name, label);
    }
    Fixture { coord, left, right }
}

fn scroll_sample(scroll_y: f32) -> FrameSample {
    FrameSample {
        viewport: ViewportSample {
            scroll_y,
            width: 1280.0,
            height: 1000.0,
            document_height: 5000.0,
        },
        section_tops: SECTIONS.iter().map(|(_, _, top)| Some(*top)).collect(),
        ..Default::default()
    }
}

fn labels_at(fx: &mut Fixture, now_ms: f64, scroll_y: f32) -> Option<(String, String)> {
    let out = fx.coord.on_scroll_event(now_ms, &scroll_sample(scroll_y));
    let text = |target| {
        out.changes.iter().find_map(|c| {
            if c.target != target {
                return None;
            }
            match &c.visual {
                Visual::Label { text } => Some(text.clone()),
                _ => None,
            }
        })
    };
    match (text(fx.left), text(fx.right)) {
        (Some(l), Some(r)) => Some((l, r)),
        _ => None,
    }
}

#[test]
fn pair_is_always_cycle_consistent() {
    let mut fx = fixture();
    let mut now = 0.0;
    for step in 0..60 {
        now += 200.0;
        let scroll_y = step as f32 * 90.0;
        if let Some((l, r)) = labels_at(&mut fx, now, scroll_y) {
            assert_ne!(l, r, "degenerate pair at scroll {scroll_y}");
            let valid = [
                ("EAT", "PLAY"),
                ("DRINK", "EAT"),
                ("PLAY", "DRINK"),
            ];
            assert!(
                valid.contains(&(l.as_str(), r.as_str())),
                "invalid pair {l}/{r} at scroll {scroll_y}"
            );
        }
    }
}

#[test]
fn lowest_qualifying_section_wins_inclusive_boundary() {
    let mut fx = fixture();
    // scroll 1900, viewport 1000 -> focus point 2400; split's top is exactly
    // 2400 and offset_top <= focus is inclusive, so split (DRINK) wins.
    let (l, r) = labels_at(&mut fx, 0.0, 1900.0).expect("labels");
    assert_eq!(l, "DRINK");
    assert_eq!(r, "EAT");

    let out = fx.coord.on_scroll_event(500.0, &scroll_sample(1900.0));
    // Same focus again: suppressed, no re-emission.
    assert!(out.changes.is_empty());
}

#[test]
fn focus_change_emits_event_once() {
    let mut fx = fixture();
    let out = fx.coord.on_scroll_event(0.0, &scroll_sample(100.0));
    assert!(out
        .events
        .contains(&Event::FocusChanged { section: "hero".into() }));

    let out = fx.coord.on_scroll_event(500.0, &scroll_sample(120.0));
    assert!(out.events.is_empty());
}

#[test]
fn stale_labels_above_all_sections() {
    let mut coord = Coordinator::new(Config::default()).expect("config");
    coord.register_target(Role::NavLeft);
    coord.register_target(Role::NavRight);
    // Sections starting below the first focus point.
    coord.register_section("about", 0);
    coord.register_section("split", 1);

    let sample = FrameSample {
        viewport: ViewportSample {
            scroll_y: 0.0,
            width: 1280.0,
            height: 1000.0,
            document_height: 5000.0,
        },
        section_tops: vec![Some(3000.0), Some(4000.0)],
        ..Default::default()
    };
    // No section qualifies: nothing emitted, previous labels stay as-is.
    let out = coord.on_scroll_event(0.0, &sample);
    assert!(out.is_empty());
}

#[test]
fn unmeasured_sections_are_skipped() {
    let mut fx = fixture();
    let mut sample = scroll_sample(4500.0);
    // reserve's element vanished; ambiance should win instead.
    sample.section_tops[5] = None;
    let out = fx.coord.on_scroll_event(0.0, &sample);
    assert!(out
        .events
        .contains(&Event::FocusChanged { section: "ambiance".into() }));
}
