use criterion::{criterion_group, criterion_main, Criterion};

use scrollkit_core::{
    config::Config,
    coordinator::Coordinator,
    registry::Role,
    sample::{CharSample, FrameSample, ViewportSample},
};

fn bench_update(c: &mut Criterion) {
    let mut coord = Coordinator::new(Config::default()).expect("config");
    coord.register_target(Role::Hero);
    for i in 0..4 {
        coord.register_target(Role::Blob { index: i });
    }
    for i in 0..3 {
        coord.register_target(Role::MarqueeTrack { index: i });
    }
    let chars: Vec<CharSample> = (0..120)
        .map(|i| CharSample {
            target: coord.register_target(Role::WaveChar { row: i / 40 }),
            center_x: (i % 40) as f32 * 32.0,
        })
        .collect();
    let gate = coord.create_gate();
    coord.bind_wave_gate(gate);
    coord.set_visible(gate, true);

    let sample = FrameSample {
        viewport: ViewportSample {
            scroll_y: 1200.0,
            width: 1440.0,
            height: 900.0,
            document_height: 5200.0,
        },
        section_tops: Vec::new(),
        chars,
        marquee_width: Some(1800.0),
    };

    c.bench_function("frame_step_120_chars", |b| {
        b.iter(|| {
            let out = coord.update(1.0 / 60.0, &sample);
            criterion::black_box(out.changes.len());
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
