//! Projectile Pool
//!
//! This demo rebuilds the classic "gun firing pooled bullets" scenario on
//! `ResourcePool`, driven by an explicit tick loop instead of an engine's
//! component lifecycle.
//!
//! Key concepts:
//! - Lazy creation: projectiles are only built when nothing is reusable
//! - Availability predicate: a projectile is reusable while inactive
//! - Capacity bound: firing while exhausted yields "try again later"
//! - Deterministic teardown via dispose
//!
//! Run with: cargo run --example projectile_pool

use respawn::ResourcePool;
use std::cell::Cell;
use std::rc::Rc;

struct Projectile {
    id: u32,
    live: Cell<bool>,
    ticks_left: Cell<u32>,
}

impl Projectile {
    /// Advance one tick; a projectile deactivates once its time runs out.
    fn tick(&self) {
        if !self.live.get() {
            return;
        }
        let remaining = self.ticks_left.get().saturating_sub(1);
        self.ticks_left.set(remaining);
        if remaining == 0 {
            self.live.set(false);
            println!("    projectile #{} expired and returned to the pool", self.id);
        }
    }
}

fn main() {
    println!("=== Projectile Pool ===\n");

    let next_id = Cell::new(0u32);
    let mut pool = ResourcePool::with_capacity(
        move || {
            next_id.set(next_id.get() + 1);
            println!("    creating projectile #{}", next_id.get());
            Rc::new(Projectile {
                id: next_id.get(),
                live: Cell::new(false),
                ticks_left: Cell::new(0),
            })
        },
        |shot: &Rc<Projectile>| !shot.live.get(),
        |shot| println!("    destroying projectile #{}", shot.id),
        3,
    );

    let mut in_flight: Vec<Rc<Projectile>> = Vec::new();

    // fire on ticks 0-3, then let everything expire
    for tick in 0..8 {
        println!("tick {tick}:");

        if tick < 4 {
            match pool.acquire().expect("pool is live") {
                Some(shot) => {
                    shot.live.set(true);
                    shot.ticks_left.set(3);
                    println!("    fired projectile #{}", shot.id);
                    if !in_flight.iter().any(|held| Rc::ptr_eq(held, &shot)) {
                        in_flight.push(shot);
                    }
                }
                None => println!("    pool exhausted, holding fire this tick"),
            }
        }

        for shot in &in_flight {
            shot.tick();
        }
    }

    println!("\npooled instances at shutdown: {}", pool.len());
    in_flight.clear();
    pool.dispose().expect("first dispose");

    println!("\n=== Demo Complete ===");
}
