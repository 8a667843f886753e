use sitemap_core::{
    Canvas, CanvasConfig, CounterIds, EdgeChange, EdgeLine, FixedPlacement, NodeChange, NodeKind,
    PageNode, Position, RandomPlacement, Section, TextUpdaterField, UpdateChannel,
};

fn setup() -> Canvas {
    Canvas::with_generators(
        CanvasConfig::default(),
        Box::new(CounterIds::new("node")),
        Box::new(FixedPlacement(Position::new(5.0, 5.0))),
    )
}

#[test]
fn two_new_pages_are_distinct_and_empty() {
    let mut canvas = setup();
    let first = canvas.add_node().unwrap();
    let second = canvas.add_node().unwrap();

    assert_ne!(first, second);
    for id in [&first, &second] {
        let node = canvas.node(id).unwrap();
        assert!(node.sections.is_empty());
        assert_eq!(node.kind, NodeKind::CustomNode);
    }

    let edge_id = canvas.connect(&first, &second).unwrap();
    assert_eq!(canvas.edges().len(), 1);
    let edge = canvas.edge(&edge_id).unwrap();
    assert_eq!(edge.source, first);
    assert_eq!(edge.target, second);
    assert_eq!(edge.line, EdgeLine::SmoothStep);
}

#[test]
fn random_placement_lands_inside_half_viewport() {
    let config = CanvasConfig::default().with_viewport(400.0, 200.0);
    let mut canvas = Canvas::with_generators(
        config,
        Box::new(CounterIds::new("node")),
        Box::new(RandomPlacement::seeded(3)),
    );
    for _ in 0..10 {
        let id = canvas.add_node().unwrap();
        let position = canvas.node(&id).unwrap().position;
        assert!(position.x >= 0.0 && position.x < 200.0);
        assert!(position.y >= 0.0 && position.y < 100.0);
    }
}

#[test]
fn removing_page_drops_its_edges_but_keeps_others() {
    let mut canvas = setup();
    let home = canvas.add_node().unwrap();
    let about = canvas.add_node().unwrap();
    let blog = canvas.add_node().unwrap();
    canvas.connect(&home, &about).unwrap();
    canvas.connect(&home, &blog).unwrap();
    let survivor = canvas.connect(&about, &blog).unwrap();

    assert!(canvas.remove_node(&home));
    assert!(!canvas.remove_node(&home));

    let remaining: Vec<&str> = canvas.edges().iter().map(|edge| edge.id.as_str()).collect();
    assert_eq!(remaining, [survivor.as_str()]);
    assert!(canvas
        .edges()
        .iter()
        .all(|edge| canvas.contains_node(&edge.source) && canvas.contains_node(&edge.target)));
}

#[test]
fn change_batches_apply_in_order() {
    let mut canvas = setup();
    let id = canvas.add_node().unwrap();
    let imported = PageNode::new("imported", "Imported", Position::new(1.0, 2.0))
        .with_sections(vec![Section::new("s", "Hero")]);

    canvas.apply_node_changes(&[
        NodeChange::Add {
            node: imported.clone(),
        },
        NodeChange::Add { node: imported },
        NodeChange::Position {
            id: id.clone(),
            position: Some(Position::new(50.0, 60.0)),
            dragging: true,
        },
        NodeChange::Position {
            id: id.clone(),
            position: None,
            dragging: false,
        },
    ]);

    assert_eq!(canvas.nodes().len(), 2);
    let node = canvas.node(&id).unwrap();
    assert_eq!(node.position, Position::new(50.0, 60.0));
    assert!(!node.dragging);

    let edge_id = canvas.connect(&id, "imported").unwrap();
    let edge = canvas.edge(&edge_id).unwrap().clone();
    canvas.apply_edge_changes(&[
        EdgeChange::Remove {
            id: edge_id.clone(),
        },
        EdgeChange::Add { edge: edge.clone() },
        EdgeChange::Add { edge },
    ]);
    assert_eq!(canvas.edges().len(), 1);
}

#[test]
fn text_updater_page_commits_every_keystroke() {
    let mut canvas = setup();
    let id = canvas.add_node_of_kind(NodeKind::TextUpdater).unwrap();
    let node = canvas.node(&id).unwrap().clone();

    let mut field = TextUpdaterField::new(&mut canvas, &node);
    field.input("C");
    assert!(field.input("Contact"));
    drop(field);

    assert_eq!(canvas.node(&id).unwrap().label, "Contact");
}

#[test]
fn render_tags_serialize_as_surface_names() {
    let mut canvas = setup();
    let a = canvas.add_node().unwrap();
    let b = canvas.add_node_of_kind(NodeKind::TextUpdater).unwrap();
    canvas.connect(&a, &b).unwrap();
    canvas.update_children(&a, vec![Section::new("s-1", "Navbar")]);

    let json = serde_json::to_value(canvas.snapshot()).unwrap();
    assert_eq!(json["nodes"][0]["type"], "customNode");
    assert_eq!(json["nodes"][1]["type"], "textUpdater");
    assert_eq!(json["nodes"][0]["sections"][0]["highlighted"], false);
    assert_eq!(json["edges"][0]["type"], "smoothstep");
    assert_eq!(json["edges"][0]["style"]["strokeWidth"], 4);
}

#[test]
fn seeded_sitemap_continues_numbering() {
    let mut canvas = Canvas::seeded(CanvasConfig::default()).unwrap();
    let home = canvas.nodes()[0].id.clone();
    let next = canvas.add_node().unwrap();

    assert_eq!(canvas.node(&next).unwrap().label, "Page 1");
    let section_ids = canvas.node(&home).unwrap().section_ids();
    assert!(!section_ids.contains(&next));
    assert_ne!(home, next);
}
