use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trackpaint_coasters::{lay_down, preview::Previewer};
use trackpaint_core::{
    coordinates::Direction,
    recording::RecordingSession,
    settings::PaintSettings,
    track::{Ride, TrackElemType, TrackElement},
};

fn paint_benchmarks(c: &mut Criterion) {
    let ride = Ride::default();
    let flat = lay_down::get_track_paint_function(TrackElemType::Flat).unwrap();
    let element = TrackElement::new(TrackElemType::Flat);
    let mut session = RecordingSession::new();

    c.bench_function("paint_flat", |b| {
        b.iter(|| {
            flat(
                &mut session,
                &ride,
                0,
                black_box(Direction::new(1)),
                black_box(64),
                &element,
            );
            session.take_commands()
        })
    });

    c.bench_function("dispatch_all", |b| {
        b.iter(|| {
            TrackElemType::ALL
                .iter()
                .filter(|x| lay_down::get_track_paint_function(black_box(**x)).is_some())
                .count()
        })
    });

    let mut previewer = Previewer::new(PaintSettings::default(), Ride::default()).unwrap();
    let pieces: Vec<TrackElement> = TrackElemType::ALL
        .iter()
        .filter(|x| lay_down::own_track_paint_function(**x).is_some())
        .map(|x| TrackElement::new(*x))
        .collect();
    c.bench_function("paint_all_lay_down_pieces", |b| {
        b.iter(|| {
            for piece in &pieces {
                black_box(previewer.paint_all(piece).unwrap());
            }
        })
    });
}

criterion_group!(benches, paint_benchmarks);
criterion_main!(benches);
