//! Drive a combo box without a renderer: simulate header/row taps and frame
//! ticks, printing what a host would draw.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p tapdown --example headless
//! ```

use tapdown::{Color, ComboBox, SchedulerHandle};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scheduler = SchedulerHandle::new();
    let mut combo = ComboBox::builder(["Espresso", "Filter", "Cold Brew", "Flat White"])
        .default_value("Espresso")
        .text_color(Color::BLACK)
        .font_size(16.0)
        .on_value_select(|index| println!(">> host notified: option {index}"))
        .build(scheduler.clone());

    combo.store().on_change(|_| {
        // A real host would schedule a re-render here
    });

    println!("tap header");
    combo.toggle();
    run_frames(&scheduler, &combo);

    println!("tap row 2");
    combo.select_option(2);
    run_frames(&scheduler, &combo);

    let frame = combo.frame();
    println!(
        "final: label={:?} rotation={:.1}deg list_scale={:.3}",
        frame.header.label().map(|l| l.text.clone()).unwrap_or_default(),
        frame.header.icon().map(|i| i.rotation_deg).unwrap_or(0.0),
        frame.list.placement.scale_y,
    );
}

/// Tick at 60fps until the spring settles, sampling a few frames
fn run_frames(scheduler: &SchedulerHandle, combo: &ComboBox) {
    let mut n = 0;
    while scheduler.tick(1.0 / 60.0) {
        n += 1;
        if n % 10 == 0 {
            let frame = combo.frame();
            println!(
                "  frame {n:3}: scale={:.3} rotation={:6.1}deg top_edge={:.1}",
                frame.list.placement.scale_y,
                frame.header.icon().map(|i| i.rotation_deg).unwrap_or(0.0),
                frame.list.placement.top_edge_offset(),
            );
        }
    }
    println!("  settled after {n} frames");
}
