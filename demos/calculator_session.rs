//! Calculator Session
//!
//! This example drives the engine the way a keypad widget would and prints
//! what the display shows after every button press.
//!
//! Key concepts:
//! - One `Input` per button, dispatched through `handle`
//! - A recording surface standing in for the DOM
//! - Division by zero and the timed return to "0"
//! - Logging with `RUST_LOG=abacus=debug`
//!
//! Run with: cargo run --example calculator_session

use abacus::builder::EngineBuilder;
use abacus::core::{Digit, MemoryCommand, Operation};
use abacus::effects::{Input, ManualClock, RecordingSurface};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("abacus=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn digit(n: u8) -> Input {
    Input::Digit(Digit::try_from(n).expect("keypad digit"))
}

fn label(input: &Input) -> String {
    match input {
        Input::Digit(d) => d.to_string(),
        Input::Operator(op) => op.to_string(),
        Input::Memory(MemoryCommand::Add) => "M+".to_string(),
        Input::Memory(MemoryCommand::Subtract) => "M-".to_string(),
        Input::Memory(MemoryCommand::Recall) => "MR".to_string(),
        Input::Memory(MemoryCommand::Clear) => "MC".to_string(),
        Input::SelectHistory(i) => format!("H{i}"),
        other => other.name().to_string(),
    }
}

fn main() {
    init_logger();
    println!("=== Calculator Session ===\n");

    let clock = ManualClock::starting_now();
    let mut engine = EngineBuilder::new()
        .surface(RecordingSurface::new())
        .clock(clock.clone())
        .build()
        .expect("default configuration is valid");

    let session = [
        digit(3),
        Input::Operator(Operation::Add),
        digit(4),
        Input::Operator(Operation::Multiply),
        digit(2),
        Input::Equals,
        Input::Memory(MemoryCommand::Add),
        digit(0),
        Input::Decimal,
        digit(1),
        Input::Operator(Operation::Add),
        digit(0),
        Input::Decimal,
        digit(2),
        Input::Equals,
        Input::Memory(MemoryCommand::Recall),
        Input::ToggleHistoryPanel,
        Input::SelectHistory(1),
    ];

    for input in session {
        let result = engine.handle(input);
        println!(
            "  [{:>6}] display: {:<12} mode: {:<16} {:?}",
            label(&input),
            engine.surface().text(),
            engine.mode().name(),
            result
        );
    }

    println!("\nHistory:");
    for item in engine.surface().history() {
        println!("  {}", item.display_text);
    }
    println!("Memory indicator lit: {}", engine.surface().memory_active());

    println!("\n=== Division by zero ===\n");
    for input in [digit(5), Input::Operator(Operation::Divide), digit(0), Input::Equals] {
        let result = engine.handle(input);
        println!("  [{:>6}] display: {:<22} {:?}", label(&input), engine.surface().text(), result);
    }

    clock.advance(Duration::from_millis(3000));
    engine.poll();
    println!("  after 3s   display: {}", engine.surface().text());

    println!("\n=== Example Complete ===");
}
