use super::*;
use std::collections::BTreeSet;

use Symbol::{A, C, L, M, Y};

fn base() -> MediationDag {
    MediationDag::new("Y", "A", ["M1", "M2"])
}

fn edge_set(spec: &DagSpec) -> BTreeSet<(Symbol, Symbol)> {
    spec.edges.iter().map(|e| (e.from, e.to)).collect()
}

fn set(pairs: &[(Symbol, Symbol)]) -> BTreeSet<(Symbol, Symbol)> {
    pairs.iter().copied().collect()
}

// ── Template selection ──────────────────────────────────────────────────────

#[test]
fn test_select_table() {
    assert_eq!(Template::select(false, false), Template::Neither);
    assert_eq!(Template::select(true, false), Template::BasecOnly);
    assert_eq!(Template::select(false, true), Template::PostcOnly);
    assert_eq!(Template::select(true, true), Template::Both);
}

#[test]
fn test_template_names() {
    assert_eq!(Template::Neither.name(), "neither");
    assert_eq!(Template::BasecOnly.name(), "basec-only");
    assert_eq!(Template::PostcOnly.name(), "postc-only");
    assert_eq!(Template::Both.name(), "both");
}

#[test]
fn test_neither_template() {
    let spec = base().spec().unwrap();
    assert_eq!(spec.template, Template::Neither);
    assert_eq!(spec.nodes(), vec![A, M, Y]);
    assert_eq!(edge_set(&spec), set(&[(A, Y), (M, Y), (A, M)]));
}

#[test]
fn test_basec_only_template() {
    let spec = base().basec(["C1", "C2", "C3"]).spec().unwrap();
    assert_eq!(spec.template, Template::BasecOnly);
    assert_eq!(spec.nodes(), vec![A, M, Y, C]);
    assert_eq!(
        edge_set(&spec),
        set(&[(A, Y), (M, Y), (C, Y), (A, M), (C, M), (C, A)])
    );
}

#[test]
fn test_postc_only_template() {
    let spec = base().postc(["L1", "L2"]).spec().unwrap();
    assert_eq!(spec.template, Template::PostcOnly);
    assert_eq!(spec.nodes(), vec![A, M, Y, L]);
    assert_eq!(
        edge_set(&spec),
        set(&[(A, Y), (M, Y), (L, Y), (A, M), (L, M), (A, L)])
    );
}

#[test]
fn test_both_template() {
    let spec = base().basec(["C1"]).postc(["L1"]).spec().unwrap();
    assert_eq!(spec.template, Template::Both);
    assert_eq!(spec.nodes(), vec![A, M, Y, C, L]);
    assert_eq!(spec.edges.len(), 9);
    assert_eq!(
        edge_set(&spec),
        set(&[
            (A, Y),
            (M, Y),
            (C, Y),
            (L, Y),
            (A, M),
            (C, M),
            (L, M),
            (C, A),
            (A, L)
        ])
    );
}

#[test]
fn test_edges_keep_fixed_order() {
    let spec = base().basec(["C1"]).postc(["L1"]).spec().unwrap();
    assert_eq!(spec.edges, CAUSAL_EDGES.to_vec());
}

#[test]
fn test_every_template_edge_touches_present_nodes() {
    for t in [
        Template::Neither,
        Template::BasecOnly,
        Template::PostcOnly,
        Template::Both,
    ] {
        let nodes = t.symbols();
        for e in t.edges() {
            assert!(nodes.contains(&e.from) && nodes.contains(&e.to));
        }
    }
}

#[test]
fn test_empty_confounder_list_is_absent() {
    let dag = base().basec(Vec::<String>::new()).postc(Vec::<String>::new());
    assert_eq!(dag.template(), Template::Neither);
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn test_missing_outcome() {
    let mut dag = base();
    dag.outcome = None;
    let err = dag.spec().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredRole(Role::Outcome)));
}

#[test]
fn test_empty_exposure() {
    let dag = MediationDag::new("Y", "", ["M"]);
    let err = dag.spec().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredRole(Role::Exposure)));
}

#[test]
fn test_missing_mediator() {
    let dag = MediationDag::new("Y", "A", Vec::<String>::new());
    let err = dag.spec().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredRole(Role::Mediator)));
}

#[test]
fn test_validation_runs_before_caption() {
    // A zero caption width would fail wrapping; the role error comes first.
    let dag = MediationDag::default().caption_width(0);
    let err = dag.spec_with_caption().unwrap_err();
    assert!(matches!(err, Error::MissingRequiredRole(Role::Outcome)));
}

#[test]
fn test_other_names_not_validated() {
    let dag = MediationDag::new("Y", "A", [""]).basec(["", "x"]);
    assert!(dag.spec().is_ok());
}

// ── Coordinates ─────────────────────────────────────────────────────────────

#[test]
fn test_default_coordinate_map() {
    let spec = base().basec(["C1"]).postc(["L1"]).spec().unwrap();
    let map = spec.coordinate_map();
    assert_eq!(map[&Y], Point::new(4.0, 0.0));
    assert_eq!(map[&A], Point::new(0.0, 0.0));
    assert_eq!(map[&M], Point::new(2.0, 1.0));
    assert_eq!(map[&C], Point::new(2.0, 2.0));
    assert_eq!(map[&L], Point::new(2.0, -0.5));
}

#[test]
fn test_absent_symbol_coordinates_omitted() {
    let spec = base()
        .coordinate(C, Point::new(9.0, 9.0))
        .coordinate(L, Point::new(-9.0, -9.0))
        .spec()
        .unwrap();
    let map = spec.coordinate_map();
    assert_eq!(map.len(), 3);
    assert!(!map.contains_key(&C));
    assert!(!map.contains_key(&L));
}

#[test]
fn test_custom_coordinate_used() {
    let spec = base().coordinate(M, Point::new(1.5, 3.0)).spec().unwrap();
    assert_eq!(spec.coordinate_map()[&M], Point::new(1.5, 3.0));
}

#[test]
fn test_mediators_share_one_point() {
    let spec = base().spec().unwrap();
    let m = spec.binding(M).unwrap();
    assert_eq!(m.names, vec!["M1", "M2"]);
    assert_eq!(m.point, Point::new(2.0, 1.0));
}

// ── Graph and idempotence ───────────────────────────────────────────────────

#[test]
fn test_to_graph_matches_spec() {
    let spec = base().postc(["L1"]).spec().unwrap();
    let g = spec.to_graph();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 6);
    assert_eq!(g.parents(M), vec![A, L]);
    assert_eq!(g.children(A), vec![M, Y, L]);
}

#[test]
fn test_build_is_idempotent() {
    let dag = base().basec(["C1", "C2"]).postc(["L1"]);
    let first = dag.spec_with_caption().unwrap();
    let second = dag.spec_with_caption().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_from_config() {
    let cfg = DagConfig::from_toml_str(
        r#"
        [roles]
        outcome = "bmi"
        exposure = "smoking"
        mediator = ["diet"]
        postc = ["stress"]
        "#,
    )
    .unwrap();
    let dag = MediationDag::from_config(&cfg);
    assert_eq!(dag.template(), Template::PostcOnly);
    let spec = dag.spec().unwrap();
    assert_eq!(spec.binding(Y).unwrap().names, vec!["bmi"]);
}
