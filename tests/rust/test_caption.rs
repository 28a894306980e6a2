use super::*;
use crate::MediationDag;
use proptest::prelude::*;

fn caption_for(dag: &MediationDag) -> Caption {
    dag.spec_with_caption().unwrap().1
}

#[test]
fn test_neither_has_three_lines() {
    let cap = caption_for(&MediationDag::new("Y", "A", ["M1", "M2"]));
    assert_eq!(cap.symbols(), vec![Symbol::A, Symbol::M, Symbol::Y]);
    assert_eq!(cap.line(Symbol::M).unwrap().wrapped, vec!["M1, M2"]);
    assert_eq!(
        cap.text(),
        "A (Exposure): A\nM (Mediator): M1, M2\nY (Outcome): Y"
    );
}

#[test]
fn test_basec_line_added() {
    let cap = caption_for(&MediationDag::new("Y", "A", ["M1", "M2"]).basec(["C1", "C2", "C3"]));
    assert_eq!(cap.lines.len(), 4);
    assert_eq!(
        cap.line(Symbol::C).unwrap().text(),
        "C (Baseline Confounder): C1, C2, C3"
    );
    assert!(cap.line(Symbol::L).is_none());
}

#[test]
fn test_postc_line_without_basec() {
    let cap = caption_for(&MediationDag::new("Y", "A", ["M"]).postc(["L1", "L2"]));
    assert_eq!(
        cap.symbols(),
        vec![Symbol::A, Symbol::M, Symbol::Y, Symbol::L]
    );
    assert_eq!(
        cap.line(Symbol::L).unwrap().text(),
        "L (Post-exposure Confounder): L1, L2"
    );
}

#[test]
fn test_order_fixed_regardless_of_call_order() {
    let dag = MediationDag::default()
        .postc(["L1"])
        .basec(["C1"]);
    let dag = MediationDag {
        outcome: Some("out".into()),
        exposure: Some("exp".into()),
        mediators: vec!["med".into()],
        ..dag
    };
    let cap = caption_for(&dag);
    assert_eq!(cap.symbols(), Symbol::CAPTION_ORDER.to_vec());
}

#[test]
fn test_wrapping_keeps_names_in_order() {
    let names = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let dag = MediationDag::new("Y", "A", names).caption_width(14);
    let cap = caption_for(&dag);
    let m = cap.line(Symbol::M).unwrap();
    assert!(m.wrapped.len() > 1);
    assert_eq!(m.wrapped.join(" "), "alpha, beta, gamma, delta, epsilon");
    assert!(m.wrapped.iter().all(|l| l.chars().count() <= 14));
}

#[test]
fn test_rows_split_wrapped_lines() {
    let dag = MediationDag::new("Y", "A", ["alpha", "beta", "gamma"]).caption_width(12);
    let rows = caption_for(&dag).rows();
    assert_eq!(
        rows,
        vec![
            "A (Exposure): A",
            "M (Mediator): alpha, beta,",
            "gamma",
            "Y (Outcome): Y",
        ]
    );
}

#[test]
fn test_zero_width_propagates_wrap_error() {
    let dag = MediationDag::new("Y", "A", ["M"]).caption_width(0);
    let err = dag.spec_with_caption().unwrap_err();
    assert!(matches!(err, crate::Error::Wrap(WrapError::ZeroWidth)));
}

proptest! {
    #[test]
    fn prop_caption_order_and_presence(has_c in any::<bool>(), has_l in any::<bool>(), width in 1usize..80) {
        let mut dag = MediationDag::new("Y", "A", ["M1", "M2"]).caption_width(width);
        if has_c {
            dag = dag.basec(["C1", "C2"]);
        }
        if has_l {
            dag = dag.postc(["L1"]);
        }
        let cap = caption_for(&dag);
        let expected: Vec<Symbol> = Symbol::CAPTION_ORDER
            .into_iter()
            .filter(|s| s.is_required() || (*s == Symbol::C && has_c) || (*s == Symbol::L && has_l))
            .collect();
        prop_assert_eq!(cap.symbols(), expected);
    }
}
