//! Redoubt Headless Validation Harness
//!
//! Validates structure geometry and layer classification without a game
//! host. Runs entirely in-process — no networking, no rendering.
//!
//! Usage:
//!   cargo run -p redoubt-simtest
//!   cargo run -p redoubt-simtest -- --verbose

use redoubt_core::components::{LayerState, Velocity};
use redoubt_core::GameWorld;
use redoubt_logic::catalog::{StructureCatalog, StructureDef};
use redoubt_logic::layers::{check_stair, Layer, LayerOccupant};
use redoubt_logic::structure::Structure;
use redoubt_logic::vec2::Vec2;
use std::collections::HashMap;

// ── Structure catalog (same JSON the server loads) ──────────────────────
const CATALOG_JSON: &str = include_str!("../../../data/structures.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(results: &mut Vec<TestResult>, name: &str, passed: bool, detail: String) {
    results.push(TestResult {
        name: name.to_string(),
        passed,
        detail,
    });
}

struct Probe {
    layer: Layer,
}

impl LayerOccupant for Probe {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Redoubt Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog parse + content sanity
    let catalog = match load_catalog(&mut results) {
        Some(c) => c,
        None => {
            report(&results, verbose);
            std::process::exit(1);
        }
    };

    // 2. Stairway invariants across every template and orientation
    results.extend(validate_stair_invariants(&catalog, verbose));

    // 3. Reference placement scenario
    results.extend(validate_placement_scenario(verbose));

    // 4. End-to-end walk through the engine
    results.extend(validate_engine_walk(&catalog, verbose));

    report(&results, verbose);
    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
}

fn report(results: &[TestResult], verbose: bool) {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn load_catalog(results: &mut Vec<TestResult>) -> Option<StructureCatalog> {
    println!("--- Structure Catalog ---");

    let defs: HashMap<String, StructureDef> = match serde_json::from_str(CATALOG_JSON) {
        Ok(d) => d,
        Err(e) => {
            check(results, "catalog_parse", false, format!("JSON parse error: {}", e));
            return None;
        }
    };
    check(
        results,
        "catalog_parse",
        !defs.is_empty(),
        format!("{} templates", defs.len()),
    );

    let with_stairs = defs.values().filter(|d| !d.stairs.is_empty()).count();
    check(
        results,
        "catalog_has_stairways",
        with_stairs > 0,
        format!("{} templates define stairways", with_stairs),
    );

    let catalog: StructureCatalog = defs.into_iter().collect();
    check(
        results,
        "catalog_rejects_unknown",
        catalog.resolve("no_such_building").is_err(),
        "unknown type is a hard error".to_string(),
    );
    Some(catalog)
}

// ── 2. Stairway invariants ──────────────────────────────────────────────

fn validate_stair_invariants(catalog: &StructureCatalog, _verbose: bool) -> Vec<TestResult> {
    println!("--- Stairway Invariants ---");
    let mut results = Vec::new();

    let pos = Vec2::new(250.0, -75.0);
    let mut checked = 0usize;
    let mut ok = true;
    let mut detail = String::new();

    for (kind, def) in catalog.iter() {
        for ori in 0..4u8 {
            let s = match Structure::build(catalog, kind, pos, ori, Layer::Ground) {
                Ok(s) => s,
                Err(e) => {
                    ok = false;
                    detail = format!("{} ori {}: build failed: {}", kind, ori, e);
                    continue;
                }
            };
            if s.stairs.len() != def.stairs.len() {
                ok = false;
                detail = format!(
                    "{} ori {}: {} stairways from {} definitions",
                    kind,
                    ori,
                    s.stairs.len(),
                    def.stairs.len()
                );
            }
            for stair in &s.stairs {
                checked += 1;
                if stair.up_ori != (stair.down_ori + 2) % 4 {
                    ok = false;
                    detail = format!("{} ori {}: ascent not opposite descent", kind, ori);
                }
                if stair.center != stair.collision.center() {
                    ok = false;
                    detail = format!("{} ori {}: center drift", kind, ori);
                }
                let area_gap =
                    (stair.lower_half.area() + stair.upper_half.area() - stair.collision.area()).abs();
                if area_gap > 1e-3 {
                    ok = false;
                    detail = format!("{} ori {}: half areas off by {}", kind, ori, area_gap);
                }
                if stair.lower_half.width() < 0.0
                    || stair.lower_half.height() < 0.0
                    || stair.upper_half.width() < 0.0
                    || stair.upper_half.height() < 0.0
                {
                    ok = false;
                    detail = format!("{} ori {}: negative half extent", kind, ori);
                }
            }
        }
    }

    if ok {
        detail = format!("{} stairway placements verified", checked);
    }
    check(&mut results, "stair_invariants", ok, detail);
    results
}

// ── 3. Reference scenario ───────────────────────────────────────────────

fn validate_placement_scenario(_verbose: bool) -> Vec<TestResult> {
    println!("--- Placement Scenario ---");
    let mut results = Vec::new();

    let mut catalog = StructureCatalog::new();
    let def: StructureDef = serde_json::from_str(
        r#"{
            "bounds": { "min": { "x": -14.0, "y": -14.0 }, "max": { "x": 14.0, "y": 14.0 } },
            "stairs": [{
                "collision": { "min": { "x": 0.0, "y": 0.0 }, "max": { "x": 10.0, "y": 5.0 } },
                "down_dir": { "x": 1.0, "y": 0.0 }
            }]
        }"#,
    )
    .expect("scenario template is valid JSON");
    catalog.insert("scenario", def);

    let s = Structure::build(&catalog, "scenario", Vec2::new(100.0, 100.0), 0, Layer::Ground)
        .expect("scenario build succeeds");
    let stair = &s.stairs[0];

    check(
        &mut results,
        "scenario_collision_region",
        stair.collision.min == Vec2::new(100.0, 100.0)
            && stair.collision.max == Vec2::new(110.0, 105.0),
        format!(
            "({}, {})-({}, {})",
            stair.collision.min.x, stair.collision.min.y, stair.collision.max.x, stair.collision.max.y
        ),
    );
    check(
        &mut results,
        "scenario_orientations",
        stair.down_ori == 0 && stair.up_ori == 2,
        format!("down {} up {}", stair.down_ori, stair.up_ori),
    );
    check(
        &mut results,
        "scenario_split_at_105",
        stair.lower_half.max.x == 105.0 && stair.upper_half.min.x == 105.0,
        format!("lower ends {} upper starts {}", stair.lower_half.max.x, stair.upper_half.min.x),
    );

    let mut probe = Probe { layer: Layer::Ground };
    let lower_hit = check_stair(Vec2::new(102.0, 102.0), stair, &mut probe);
    check(
        &mut results,
        "scenario_lower_point",
        lower_hit && probe.layer == Layer::StairLower,
        format!("matched {} layer {:?}", lower_hit, probe.layer),
    );

    let upper_hit = check_stair(Vec2::new(108.0, 102.0), stair, &mut probe);
    check(
        &mut results,
        "scenario_upper_point",
        upper_hit && probe.layer == Layer::StairUpper,
        format!("matched {} layer {:?}", upper_hit, probe.layer),
    );

    let before = probe.layer;
    let miss = check_stair(Vec2::new(50.0, 50.0), stair, &mut probe);
    check(
        &mut results,
        "scenario_miss_point",
        !miss && probe.layer == before,
        format!("matched {} layer {:?}", miss, probe.layer),
    );

    results
}

// ── 4. Engine walk ──────────────────────────────────────────────────────

fn validate_engine_walk(catalog: &StructureCatalog, _verbose: bool) -> Vec<TestResult> {
    println!("--- Engine Walk ---");
    let mut results = Vec::new();

    let mut game = GameWorld::new(catalog.clone());
    if game
        .place_structure("bunker_small", Vec2::new(100.0, 100.0), 0, Layer::Ground)
        .is_err()
    {
        check(&mut results, "engine_place", false, "placement failed".to_string());
        return results;
    }
    check(&mut results, "engine_place", true, "bunker_small placed".to_string());

    let e = game.spawn_mobile(Vec2::new(98.0, 102.0), Layer::Ground);
    if let Ok(mut vel) = game.world.get::<&mut Velocity>(e) {
        vel.vel = Vec2::new(4.0, 0.0);
    }

    let mut trail = Vec::new();
    for _ in 0..4 {
        game.tick(1.0);
        if let Ok(state) = game.world.get::<&LayerState>(e) {
            trail.push(state.layer);
        }
    }

    let expected = vec![
        Layer::StairLower,
        Layer::StairUpper,
        Layer::StairUpper,
        Layer::StairUpper,
    ];
    check(
        &mut results,
        "engine_walk_layers",
        trail == expected,
        format!("{:?}", trail),
    );

    results
}
