//! Planograph walkthrough: builds a small store plan and prints what the
//! editor core derives from it.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=planograph=debug cargo run --example walkthrough   # show ignored actions
//! ```

use planograph::catalog::{FixtureCategory, FixtureTemplate, TemplateLibrary};
use planograph::editor::ToolType;
use planograph::model::{ProductId, SlotPatch, TemplateId};
use planograph::{EditorStore, Result};

fn catalog() -> TemplateLibrary {
    [
        FixtureTemplate::new(
            "gondola-120",
            "Gondola 120",
            FixtureCategory::Shelves,
            120.0,
            40.0,
        )
        .with_shelves(5)
        .with_total_height(180.0),
        FixtureTemplate::new("cooler-90", "Cooler 90", FixtureCategory::Fridges, 90.0, 70.0),
        FixtureTemplate::new("till", "Checkout", FixtureCategory::Checkout, 150.0, 80.0),
    ]
    .into_iter()
    .collect()
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planograph.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planograph=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planograph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = EditorStore::new(catalog());
    store.create_new_layout("Corner shop", 1200.0, 800.0);

    // Outline, clockwise from the back-left corner. The front wall is split
    // around the entrance door; the last click snaps back onto the first node.
    let outline = [
        ((1000.0, 0.0), ToolType::DrawWall),
        ((1000.0, 600.0), ToolType::DrawWall),
        ((550.0, 600.0), ToolType::DrawWall),
        ((450.0, 600.0), ToolType::DrawDoor),
        ((0.0, 600.0), ToolType::DrawWall),
        ((8.0, -6.0), ToolType::DrawWall),
    ];
    let Some(mut previous) = store.add_node(0.0, 0.0) else {
        return Ok(());
    };
    for ((x, y), tool) in outline {
        let snapped = store.find_nearby_node(x, y).map(|node| node.id.clone());
        let Some(node) = snapped.or_else(|| store.add_node(x, y)) else {
            continue;
        };
        store.set_active_tool(tool);
        store.start_drawing_wall(previous);
        store.finish_drawing_wall(node.clone());
        previous = node;
    }
    store.set_active_tool(ToolType::Select);

    let gondola = TemplateId::from("gondola-120");
    if let Some(first) = store.add_fixture(&gondola, 200.0, 200.0) {
        store.update_shelf_slot(
            &first,
            0,
            0,
            SlotPatch {
                product_id: Some(Some(ProductId::from("pasta-500"))),
                facings: Some(3),
                price_label: Some(true),
            },
        );
        store.duplicate_fixture(&first);
        store.rotate_fixture(&first);
    }
    store.add_fixture(&TemplateId::from("cooler-90"), 900.0, 100.0);
    if let Some(till) = store.add_fixture(&TemplateId::from("till"), 800.0, 450.0) {
        store.move_fixture_to_back(&till);
    }
    store.save_current_layout();

    if let Some(layout) = store.current_layout() {
        println!(
            "{}: {} nodes, {} walls, {} fixtures",
            layout.name,
            layout.nodes.len(),
            layout.walls.len(),
            layout.fixtures.len()
        );
        for fixture in &layout.fixtures {
            println!(
                "  {:<12} at ({:>6.1}, {:>6.1}) rot {:>3} size {}x{}",
                fixture.template_id,
                fixture.x,
                fixture.y,
                fixture.rotation.degrees(),
                fixture.width,
                fixture.height
            );
        }
    }
    println!("floor closed: {}", store.is_floor_closed());
    if let Some(polygon) = store.floor_polygon() {
        let points: Vec<String> = polygon
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        println!("floor outline: {}", points.join(" -> "));
    }
    if let Some(area) = store.floor_area() {
        println!("floor area: {:.1} m²", area / 10_000.0);
    }

    let snapshot = store.export_saved_layouts()?;
    println!("snapshot: {} bytes", snapshot.len());
    Ok(())
}
