use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dragrefresh_foundation::{damped_ratio, DragDirection, PointerEvent, RubberBand};
use dragrefresh_ui::{DragHost, DragRefreshConfig, HorizontalDragRefresh};

const FRAME_NANOS: u64 = 16_666_667;
const MOVE_SAMPLES: &[usize] = &[16, 256];

#[derive(Default)]
struct NullHost {
    last_offset: i32,
}

impl DragHost for NullHost {
    fn can_scroll_further(&self, _direction: DragDirection) -> bool {
        false
    }

    fn apply_horizontal_offset(&mut self, offset: i32) {
        self.last_offset = offset;
    }
}

fn bench_rubber_band(c: &mut Criterion) {
    let band = RubberBand::new(32.0).expect("valid band");
    c.bench_function("rubber_band/damped_offset_sweep", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for step in -512..512 {
                total += band.offset_px(black_box(step as f32 * 0.5)) as i64;
            }
            total
        })
    });
    c.bench_function("rubber_band/damped_ratio", |b| {
        b.iter(|| damped_ratio(black_box(2.25)))
    });
}

fn bench_full_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/full_cycle");
    for &moves in MOVE_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter(|| {
                let mut controller = HorizontalDragRefresh::new(DragRefreshConfig::default())
                    .expect("valid config");
                let mut host = NullHost::default();
                controller.on_pointer_event(&mut host, &PointerEvent::down(0.0, 0.0));
                for step in 0..moves {
                    let x = 10.0 + step as f32 * 2.0;
                    controller.on_pointer_event(&mut host, &PointerEvent::moved(x, 0.0));
                }
                controller.on_pointer_event(&mut host, &PointerEvent::up(0.0, 0.0));
                let mut frame_time = 0;
                while controller.needs_frame() {
                    controller.on_frame(&mut host, frame_time);
                    frame_time += FRAME_NANOS;
                }
                black_box(host.last_offset)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rubber_band, bench_full_gesture);
criterion_main!(benches);
