//! campus-walk — runnable walkthrough of the campus-nav stack.
//!
//! Builds a six-node synthetic campus, resolves a scanned QR anchor, plans
//! both the shortest and the wheelchair-accessible route to the Science
//! Block, then replays a simulated GPS walk along the accessible route
//! through the navigation engine, printing every guidance announcement.
//! Finishes with a short AR-assist preview fed by synthetic sensor streams.
//!
//! Run with `RUST_LOG=debug` to also see map-validation and engine
//! diagnostics.

mod campus;

use anyhow::{Context, Result};

use nav_ar::{HeadingSmoother, StepDetector};
use nav_core::{Direction, GeoPoint};
use nav_engine::{GuidanceSink, NavigationEngine, UserLocation, VoiceSettings};
use nav_map::{CampusMap, resolve_qr};
use nav_route::{NavigationStep, Route, available_destinations, find_route};

const STRIDE_M: f64 = 5.0;
const SAMPLE_INTERVAL_MS: u64 = 2_000;

// ── Console guidance sink ─────────────────────────────────────────────────────

/// Prints announcements the way a voice sink would speak them.
struct ConsoleGuidance {
    voice: VoiceSettings,
}

impl ConsoleGuidance {
    fn say(&self, text: &str) {
        if self.voice.enabled {
            println!("  [voice {}] {text}", self.voice.language);
        }
    }
}

impl GuidanceSink for ConsoleGuidance {
    fn on_step_instruction(&mut self, instruction: &str, step_number: u32, total_steps: usize) {
        self.say(&format!("Step {step_number} of {total_steps}: {instruction}"));
    }

    fn on_arrival(&mut self, destination_name: &str) {
        self.say(&format!("You have arrived at {destination_name}"));
    }

    fn on_nearby_event(&mut self, node_name: &str, event_info: &str) {
        self.say(&format!("Happening at {node_name}: {event_info}"));
    }

    fn on_wrong_direction(&mut self, expected: Direction) {
        self.say(&format!("Wrong way — head {expected}"));
    }

    fn on_direction_corrected(&mut self) {
        self.say("Back on track");
    }
}

// ── Simulated GPS walk ────────────────────────────────────────────────────────

/// Replay a walk along `steps`, one fix every [`SAMPLE_INTERVAL_MS`], holding
/// each step's expected heading.  Positions interpolate between the step's
/// endpoint nodes, so accrued haversine distance matches the authored edge.
fn simulate_walk(
    engine: &mut NavigationEngine<ConsoleGuidance>,
    map: &CampusMap,
    steps: &[NavigationStep],
) -> Result<()> {
    let mut t_ms = 0u64;
    for (idx, step) in steps.iter().enumerate() {
        let from = map
            .node(&step.from_node)
            .with_context(|| format!("step references unknown node {}", step.from_node))?
            .position;
        let to = map
            .node(&step.to_node)
            .with_context(|| format!("step references unknown node {}", step.to_node))?
            .position;

        let strides = (step.distance_m / STRIDE_M).ceil() as u32;
        for k in 0..=strides {
            let f = f64::from(k) / f64::from(strides);
            let fix = UserLocation {
                position: GeoPoint::new(
                    from.lat + (to.lat - from.lat) * f,
                    from.lon + (to.lon - from.lon) * f,
                ),
                heading_deg: Some(step.direction.degrees()),
                accuracy_m: Some(4.0),
                timestamp_ms: t_ms,
            };
            engine.update_location(&fix, map);
            t_ms += SAMPLE_INTERVAL_MS;

            if !engine.is_navigating() || engine.progress().step_index != idx {
                break; // the engine advanced; resume from the next step's start
            }
        }
        if !engine.is_navigating() {
            break;
        }
    }
    Ok(())
}

// ── Route printing ────────────────────────────────────────────────────────────

fn print_route(label: &str, route: &Route) {
    println!(
        "{label}: {} m, ~{} min, {} steps{}",
        route.distance_m,
        route.estimated_time_min,
        route.steps.len(),
        if route.accessible { " (accessible)" } else { "" },
    );
    for step in &route.steps {
        println!(
            "  {}. [{:>9}] {:>5.1} m  {}",
            step.step_number,
            step.direction.label(),
            step.distance_m,
            step.instruction
        );
    }
}

// ── AR-assist preview ─────────────────────────────────────────────────────────

/// Feed canned sensor streams through the AR helpers to show what the
/// overlay would render.
fn ar_preview() {
    // A jittery compass settling, then a turn through north.
    let mut smoother = HeadingSmoother::new();
    let readings = [350.0, 350.8, 349.5, 351.0, 10.0, 20.0, 28.0, 30.0, 30.5];
    let displayed = readings.iter().fold(0.0, |_, &raw| smoother.update(raw));
    println!(
        "  compass: raw ended at 30.5°, arrow shows {displayed:.1}° ({:+.1}° from anchor)",
        smoother.relative_deg().unwrap_or(0.0)
    );

    // Sustained motion raises a single confirm prompt.
    let mut detector = StepDetector::new();
    let mut prompted_at = None;
    for t in (0..=8_000u64).step_by(500) {
        if detector.update(0.22, t) {
            prompted_at = Some(t);
        }
    }
    match prompted_at {
        Some(t) => println!("  motion: confirm-step prompt after {} s of walking", t / 1_000),
        None => println!("  motion: no prompt raised"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== campus-walk — QR waypoint navigation demo ===");
    println!();

    // 1. Build and validate the campus map.
    let map = campus::build_campus().context("campus map failed validation")?;
    println!("Campus: {} nodes, {} edges", map.node_count(), map.edge_count());

    // 2. Resolve the scanned QR anchor.
    let start = resolve_qr(&map, "CAMPUS_MAIN_GATE")
        .context("QR anchor did not resolve to a waypoint")?;
    println!("Scanned QR resolves to: {} ({})", start.name, start.id);
    assert!(resolve_qr(&map, "not-a-campus-code").is_none());
    println!();

    // 3. What can be reached from here?
    println!("Reachable from {}:", start.name);
    for dest in available_destinations(&map, &start.id, false)? {
        println!("  {:>6.1} m  {}", dest.distance_m, dest.node.name);
    }
    println!();

    // 4. Plan both variants to the Science Block.
    let shortest = find_route(&map, &start.id, "science_block", false)?;
    print_route("Shortest", &shortest);
    let accessible = find_route(&map, &start.id, "science_block", true)?;
    print_route("Step-free", &accessible);
    println!();

    // 5. Walk the accessible route through the engine.
    println!("Walking the step-free route:");
    let steps = accessible.steps.clone();
    let destination = map
        .node(&accessible.end)
        .context("route end missing from map")?
        .clone();
    let mut engine = NavigationEngine::new(ConsoleGuidance {
        voice: VoiceSettings::default(),
    });
    engine.start_navigation(accessible, start.clone(), destination)?;
    simulate_walk(&mut engine, &map, &steps)?;

    let snapshot = engine.snapshot();
    println!();
    println!("Final engine state: {}", serde_json::to_string_pretty(&snapshot)?);
    println!();

    // 6. AR-assist preview.
    println!("AR assist preview:");
    ar_preview();

    Ok(())
}
