//! Shared Context
//!
//! This demo replaces the global-singleton pattern with an explicit
//! `Registry` the application constructs and hands to its collaborators.
//!
//! Key concepts:
//! - Lazily-created shared instances, at most one per type
//! - No ambient global: tests and subsystems can each own a registry
//! - The creation lock covers only check-then-create
//!
//! Run with: cargo run --example shared_context

use respawn::Registry;
use std::sync::Arc;

/// A fake API service, the usual poster child for a singleton.
struct ApiService {
    base_url: String,
}

impl ApiService {
    fn get_resource(&self, route: &str) -> String {
        format!("{{ \"route\": \"{}/{}\", \"result\": \"some JSON data\" }}", self.base_url, route)
    }
}

fn fetch_profile(registry: &Registry) -> String {
    let api = registry.get_or_init(|| ApiService {
        base_url: "https://api.example.com".to_owned(),
    });
    api.get_resource("profile")
}

fn fetch_scores(registry: &Registry) -> String {
    let api = registry.get_or_init(|| ApiService {
        base_url: "https://should-never-be-used.example.com".to_owned(),
    });
    api.get_resource("scores")
}

fn main() {
    println!("=== Shared Context ===\n");

    let registry = Registry::new();
    println!("instances before first use: {}", registry.len());

    println!("profile: {}", fetch_profile(&registry));
    println!("scores:  {}", fetch_scores(&registry));
    println!("instances after both calls: {}", registry.len());

    // both collaborators saw the same instance
    let first = registry.get_or_init(|| unreachable!("already created"));
    let second: Arc<ApiService> = registry.get_or_init(|| unreachable!("already created"));
    println!("same instance: {}", Arc::ptr_eq(&first, &second));

    println!("\n=== Demo Complete ===");
}
