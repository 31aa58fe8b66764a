//! Traffic Light
//!
//! A cyclic automaton that only moves along registered edges.
//!
//! Key concepts:
//! - `RequireRegistered` policy: only Red -> Green -> Amber -> Red is legal
//! - A guard that holds the light on green until a pedestrian presses the button
//! - Entry and exit hooks as observers
//! - Auditing every request through a `Recorder`
//!
//! Run with: RUST_LOG=statehook=debug cargo run --example traffic_light

use statehook::automaton::{TransitionPolicy, Verdict};
use statehook::builder::AutomatonBuilder;
use statehook::core::State;
use statehook::state_enum;
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Amber,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light ===\n");

    let button = Rc::new(Cell::new(false));
    let pressed = Rc::clone(&button);

    let mut light = AutomatonBuilder::new()
        .initial(TrafficLight::Red)
        .policy(TransitionPolicy::RequireRegistered)
        .on_transition(TrafficLight::Red, TrafficLight::Green, |_, _| Verdict::Proceed)
        .on_transition(TrafficLight::Green, TrafficLight::Amber, move |_, _| {
            Verdict::proceed_if(pressed.replace(false))
        })
        .on_transition(TrafficLight::Amber, TrafficLight::Red, |_, _| Verdict::Proceed)
        .on_entry(TrafficLight::Red, |_| {
            println!("  (entering Red, cars stop)");
            Verdict::Proceed
        })
        .on_exit(TrafficLight::Red, |_| println!("  (left Red)"))
        .build_recorded()?;

    let requests = [
        TrafficLight::Green,
        TrafficLight::Amber,
        TrafficLight::Red,
        TrafficLight::Amber,
        TrafficLight::Red,
    ];

    for (step, target) in requests.into_iter().enumerate() {
        if step == 3 {
            println!("Pedestrian presses the button");
            button.set(true);
        }
        let from = *light.current_state();
        let committed = light.request_transition(target);
        println!(
            "{:>5} -> {:<5} {}",
            from.name(),
            target.name(),
            if committed { "ok" } else { "refused" }
        );
    }

    println!("\nPath taken:");
    let path: Vec<&str> = light.history().get_path().iter().map(|s| s.name()).collect();
    println!("  {}", path.join(" -> "));

    println!("\nAudit trail (JSON lines):");
    print!("{}", light.export_json_lines()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
