//! Actor States
//!
//! This demo drives an actor's Idle/Walk/Stunned behavior through
//! `StateMachine` from an explicit tick loop.
//!
//! Key concepts:
//! - Enter/Update/Exit phases dispatched to a single callback per state
//! - Exit veto: the Stunned state traps the actor until it recovers
//! - Silent no-ops for self-transitions and unknown identifiers
//!
//! Run with: cargo run --example actor_states

use respawn::machine::StateMachineBuilder;
use respawn::{Flow, Phase};
use std::cell::Cell;
use std::rc::Rc;

fn main() {
    println!("=== Actor States ===\n");

    let stun_ticks = Rc::new(Cell::new(0u32));
    let stun_timer = Rc::clone(&stun_ticks);

    let mut machine = StateMachineBuilder::new()
        .state("Idle", |phase| {
            match phase {
                Phase::Enter => println!("    [Idle] playing idle animation"),
                Phase::Update => println!("    [Idle] standing around"),
                Phase::Exit => println!("    [Idle] leaving idle"),
            }
            Flow::Continue
        })
        .state("Walk", |phase| {
            match phase {
                Phase::Enter => println!("    [Walk] starting to walk"),
                Phase::Update => println!("    [Walk] moving forward"),
                Phase::Exit => println!("    [Walk] stopping"),
            }
            Flow::Continue
        })
        .state("Stunned", move |phase| {
            match phase {
                Phase::Enter => {
                    stun_timer.set(3);
                    println!("    [Stunned] seeing stars");
                    Flow::Continue
                }
                Phase::Update => {
                    stun_timer.set(stun_timer.get().saturating_sub(1));
                    println!("    [Stunned] recovering ({} ticks left)", stun_timer.get());
                    Flow::Continue
                }
                // refuse to leave until the timer runs out
                Phase::Exit => {
                    if stun_timer.get() == 0 {
                        println!("    [Stunned] recovered");
                        Flow::Continue
                    } else {
                        println!("    [Stunned] still dazed, staying put");
                        Flow::Abort
                    }
                }
            }
        })
        .initial("Idle")
        .build()
        .expect("machine builds");

    // scripted inputs per tick; None means no input
    let inputs: [Option<&str>; 7] = [
        None,
        Some("Walk"),
        Some("Stunned"),
        Some("Walk"), // vetoed: still dazed
        Some("Walk"), // vetoed: still dazed
        Some("Walk"), // recovered, commits
        Some("Teleport"), // unknown identifier, silently ignored
    ];

    for (tick, input) in inputs.iter().enumerate() {
        println!("tick {tick} (state: {:?}):", machine.current_id());
        if let Some(next) = input {
            machine.transition(next);
        }
        machine.update();
    }

    println!("\nfinal state: {:?}", machine.current_id());
    println!("\n=== Demo Complete ===");
}
