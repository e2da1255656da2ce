//! Headless replay of scripted edge pulls.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --package drag-replay
//! ```
//!
//! Each script is queued into a pointer dispatcher, delivered one event per
//! frame, and the settle animation is driven in real time.

use dragrefresh_foundation::{DragDirection, PointerDispatcher, PointerEvent};
use dragrefresh_ui::{
    DragCallbacks, DragHost, DragRefreshConfig, FrameClock, HorizontalDragRefresh, FRAME_INTERVAL,
};
use std::error::Error;
use web_time::Instant;

/// Child with no horizontal scroll range, printing where it is placed.
#[derive(Default)]
struct ConsoleHost {
    offset: i32,
}

impl DragHost for ConsoleHost {
    fn can_scroll_further(&self, _direction: DragDirection) -> bool {
        false
    }

    fn apply_horizontal_offset(&mut self, offset: i32) {
        self.offset = offset;
        log::trace!("child offset {offset}");
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        log::debug!("disallow intercept: {disallow}");
    }
}

struct Script {
    name: &'static str,
    events: Vec<PointerEvent>,
}

fn pull(name: &'static str, start_x: f32, dx: f32, steps: usize, cancel: bool) -> Script {
    let mut events = vec![PointerEvent::down(start_x, 300.0)];
    for step in 1..=steps {
        let x = start_x + dx * step as f32 / steps as f32;
        events.push(PointerEvent::moved(x, 300.0));
    }
    let end_x = start_x + dx;
    events.push(if cancel {
        PointerEvent::cancel(end_x, 300.0)
    } else {
        PointerEvent::up(end_x, 300.0)
    });
    Script { name, events }
}

fn scripts() -> Vec<Script> {
    vec![
        pull("left pull past trigger", 40.0, 220.0, 12, false),
        pull("right pull past trigger", 600.0, -220.0, 12, false),
        pull("short left pull", 40.0, 50.0, 6, false),
        pull("cancelled right pull", 600.0, -200.0, 10, true),
    ]
}

fn run_script(
    controller: &mut HorizontalDragRefresh,
    host: &mut ConsoleHost,
    clock: &FrameClock,
    script: Script,
) {
    println!("--- {} ---", script.name);
    let mut dispatcher = PointerDispatcher::new();
    for event in script.events {
        dispatcher.push(event);
    }
    log::debug!("{} events queued", dispatcher.len());

    let mut peak = 0i32;
    dispatcher.drain(|event| {
        controller.on_pointer_event(&mut *host, &event);
        peak = if host.offset.abs() > peak.abs() {
            host.offset
        } else {
            peak
        };
        std::thread::sleep(FRAME_INTERVAL);
    });
    println!("  peak offset {peak}px");

    let started = Instant::now();
    let mut frames = 0;
    while controller.needs_frame() {
        controller.on_frame(&mut *host, clock.now_nanos());
        frames += 1;
        std::thread::sleep(FRAME_INTERVAL);
    }
    println!(
        "  settled to {}px in {frames} frames ({} ms)",
        host.offset,
        started.elapsed().as_millis()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Horizontal Drag Refresh Replay ===");

    let config = DragRefreshConfig::default().with_density(2.0);
    let mut controller = HorizontalDragRefresh::new(config)?;
    controller.set_on_drag_listener(
        DragCallbacks::new()
            .with_left_drag_triggered(|| println!("  onLeft: refresh requested"))
            .with_left_drag_animation_finished(|| println!("  left refresh animation finished"))
            .with_right_drag_triggered(|| println!("  onRight: refresh requested"))
            .with_right_drag_animation_finished(|| println!("  right refresh animation finished")),
    );
    let band = controller.rubber_band();
    log::info!(
        "max drag distance {}px, offset capped at {}px, trigger at {}px",
        config.max_drag_distance_px(),
        band.max_visual_offset(),
        band.trigger_distance()
    );

    let mut host = ConsoleHost::default();
    let clock = FrameClock::new();
    for script in scripts() {
        run_script(&mut controller, &mut host, &clock, script);
    }
    Ok(())
}
