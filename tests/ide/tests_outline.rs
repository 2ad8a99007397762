//! Flat outline traversal, visibility filtering and sorting.

use rstest::rstest;
use volund::ide::{OutlineConfig, OutlineNode, children, has_children};
use volund::syntax::{DesignUnit, SequentialProcess};

use crate::helpers::ast_fixtures::*;

fn flat() -> OutlineConfig {
    OutlineConfig::default()
}

fn names(nodes: &[OutlineNode<'_>]) -> Vec<String> {
    nodes.iter().map(|n| n.display_name().to_string()).collect()
}

// =============================================================================
// REFERENCE SCENARIO
// =============================================================================

#[test]
fn test_architecture_flat_shows_structural_nesting() {
    let arch = nested_architecture();
    let node = OutlineNode::Architecture(&arch);

    let kids = children(&node, flat()).expect("architecture has a child concept");
    assert_eq!(names(&kids), vec!["sig_a", "sig_b", "p1", "gen_loop"]);

    // The generate statement is shown as its own row; descendants appear
    // only when the user expands it, one level at a time.
    let gen_row = &kids[3];
    let inside_gen = children(gen_row, flat()).unwrap();
    assert_eq!(names(&inside_gen), vec!["blk"]);

    let inside_blk = children(&inside_gen[0], flat()).unwrap();
    assert_eq!(names(&inside_blk), vec!["u1"]);
}

#[test]
fn test_architecture_flat_sorted() {
    let arch = nested_architecture();
    let node = OutlineNode::Architecture(&arch);

    let kids = children(
        &node,
        OutlineConfig {
            hierarchical: false,
            sorted: true,
        },
    )
    .unwrap();
    assert_eq!(names(&kids), vec!["gen_loop", "p1", "sig_a", "sig_b"]);
}

// =============================================================================
// VISIBILITY
// =============================================================================

#[test]
fn test_anonymous_statements_never_appear_flat() {
    let mut arch = nested_architecture();
    arch.statements.push(assignment(None, "q", 10));
    arch.statements.push(process(None, 11));
    arch.statements.push(process(Some(""), 12));

    let node = OutlineNode::Architecture(&arch);
    for config in [
        flat(),
        OutlineConfig {
            hierarchical: false,
            sorted: true,
        },
    ] {
        let kids = children(&node, config).unwrap();
        assert!(
            !kids.iter().any(|n| n.display_name().is_empty()),
            "anonymous statements leaked into {:?}: {:?}",
            config,
            names(&kids)
        );
        assert_eq!(kids.len(), 4, "expected only the labeled rows");
    }
}

#[test]
fn test_anonymous_statements_never_appear_hierarchical() {
    let mut arch = nested_architecture();
    arch.statements.push(process(None, 10));

    let node = OutlineNode::Architecture(&arch);
    let folders = children(
        &node,
        OutlineConfig {
            hierarchical: true,
            sorted: false,
        },
    )
    .unwrap();

    for folder in &folders {
        let members = children(folder, flat()).unwrap();
        assert!(
            !members.iter().any(|n| n.display_name().is_empty()),
            "anonymous statement leaked into folder {}",
            folder.display_name()
        );
    }
}

#[test]
fn test_generate_range_is_filtered() {
    // generate fixtures always carry a range; it must never become a row
    let g = generate(Some("g"), vec![instance(Some("u"), "cell", 1)], 0);
    let arch = {
        let mut a = nested_architecture();
        a.statements = vec![g];
        a
    };
    let kids = children(&OutlineNode::Architecture(&arch), flat()).unwrap();
    let gen_row = kids.last().unwrap();
    assert_eq!(names(&children(gen_row, flat()).unwrap()), vec!["u"]);
}

// =============================================================================
// ENTITY
// =============================================================================

#[test]
fn test_entity_flat_children_are_interface_declarations() {
    let entity = sample_entity();
    let kids = children(&OutlineNode::Entity(&entity), flat()).unwrap();
    assert_eq!(names(&kids), vec!["WIDTH", "clk", "Reset"]);
}

#[test]
fn test_entity_flat_sorted_is_case_insensitive() {
    let entity = sample_entity();
    let kids = children(
        &OutlineNode::Entity(&entity),
        OutlineConfig {
            hierarchical: false,
            sorted: true,
        },
    )
    .unwrap();
    assert_eq!(names(&kids), vec!["clk", "Reset", "WIDTH"]);
}

// =============================================================================
// PACKAGE
// =============================================================================

#[test]
fn test_package_flat_keeps_declared_order() {
    let pkg = sample_package();
    let kids = children(&OutlineNode::Package(&pkg), flat()).unwrap();
    assert_eq!(names(&kids), vec!["zero_word", "t_word", "clear"]);
}

#[test]
fn test_package_sorted() {
    let pkg = sample_package();
    let kids = children(
        &OutlineNode::Package(&pkg),
        OutlineConfig {
            hierarchical: false,
            sorted: true,
        },
    )
    .unwrap();
    assert_eq!(names(&kids), vec!["clear", "t_word", "zero_word"]);
}

// =============================================================================
// DECLARATION-ORDER CONTAINERS
// =============================================================================

#[rstest]
#[case(false, false)]
#[case(false, true)]
#[case(true, false)]
#[case(true, true)]
fn test_package_body_ignores_mode_flags(#[case] hierarchical: bool, #[case] sorted: bool) {
    let body = sample_package_body();
    let kids = children(
        &OutlineNode::PackageBody(&body),
        OutlineConfig { hierarchical, sorted },
    )
    .unwrap();
    assert_eq!(names(&kids), vec!["wide", "aux", "clear"]);
}

#[rstest]
#[case(false, true)]
#[case(true, true)]
fn test_process_and_subprogram_ignore_mode_flags(#[case] hierarchical: bool, #[case] sorted: bool) {
    let mut arch = nested_architecture();
    if let volund::syntax::ConcurrentStatement::Process(p) = &mut arch.statements[0] {
        p.declarations.push(object(
            "v_tmp",
            volund::syntax::DeclKind::Variable,
            20,
        ));
        p.declarations.push(object(
            "a_first",
            volund::syntax::DeclKind::Variable,
            21,
        ));
    }

    let kids = children(&OutlineNode::Architecture(&arch), flat()).unwrap();
    let proc_row = &kids[2];
    let config = OutlineConfig { hierarchical, sorted };
    assert_eq!(names(&children(proc_row, config).unwrap()), vec!["v_tmp", "a_first"]);

    let pkg = sample_package();
    let pkg_kids = children(&OutlineNode::Package(&pkg), flat()).unwrap();
    let sub_row = pkg_kids.last().unwrap();
    assert!(children(sub_row, config).unwrap().is_empty());
}

// =============================================================================
// NO LOSS / NO DUPLICATION
// =============================================================================

/// Collect every non-structural leaf reachable in flat mode by expanding
/// each block/generate row on the way down.
fn collect_flat_leaves(node: &OutlineNode<'_>, out: &mut Vec<String>) {
    let Some(kids) = children(node, OutlineConfig::default()) else {
        return;
    };
    for kid in kids {
        match kid {
            OutlineNode::Block(_) | OutlineNode::Generate(_) => collect_flat_leaves(&kid, out),
            other => out.push(other.display_name().to_string()),
        }
    }
}

#[test]
fn test_flat_and_hierarchical_reach_the_same_leaves() {
    let arch = deep_architecture();
    let node = OutlineNode::Architecture(&arch);

    let mut flat_leaves = Vec::new();
    collect_flat_leaves(&node, &mut flat_leaves);

    let folders = children(
        &node,
        OutlineConfig {
            hierarchical: true,
            sorted: false,
        },
    )
    .unwrap();
    let mut grouped_leaves = Vec::new();
    for folder in &folders {
        for member in children(folder, OutlineConfig::default()).unwrap() {
            grouped_leaves.push(member.display_name().to_string());
        }
    }

    flat_leaves.sort();
    grouped_leaves.sort();
    assert_eq!(
        flat_leaves, grouped_leaves,
        "every visible leaf must appear exactly once in both modes"
    );
    assert_eq!(
        flat_leaves,
        vec!["p_deep", "p_top", "s0", "u_deep", "u_mid"]
    );
}

// =============================================================================
// HAS CHILDREN
// =============================================================================

#[test]
fn test_has_children_structural_kinds() {
    let entity = sample_entity();
    let pkg = sample_package();
    let body = sample_package_body();
    let arch = nested_architecture();

    assert!(has_children(&OutlineNode::Entity(&entity)));
    assert!(has_children(&OutlineNode::Package(&pkg)));
    assert!(has_children(&OutlineNode::PackageBody(&body)));
    assert!(has_children(&OutlineNode::Architecture(&arch)));
}

#[test]
fn test_has_children_process_depends_on_declarations() {
    let bare = SequentialProcess::new(Some("p".into()), span_at(0));
    assert!(!has_children(&OutlineNode::Process(&bare)));

    let mut with_decl = bare.clone();
    with_decl
        .declarations
        .push(signal("v", 1));
    assert!(has_children(&OutlineNode::Process(&with_decl)));
}

#[test]
fn test_has_children_generate_with_only_noise_is_empty() {
    // Statements present, none visible
    let g = generate(Some("g"), vec![assignment(None, "q", 1)], 0);
    let mut arch = nested_architecture();
    arch.statements = vec![g];
    let kids = children(&OutlineNode::Architecture(&arch), flat()).unwrap();
    let gen_row = kids.last().unwrap();
    assert!(!has_children(gen_row));
}

// =============================================================================
// ROOT WRAPPING
// =============================================================================

#[test]
fn test_unit_node_covers_all_design_units() {
    let entity = sample_entity();
    let arch = nested_architecture();
    let pkg = sample_package();
    let body = sample_package_body();

    let units = [
        DesignUnit::Entity(entity),
        DesignUnit::Architecture(arch),
        DesignUnit::Package(pkg),
        DesignUnit::PackageBody(body),
    ];
    let wrapped: Vec<_> = units.iter().map(volund::ide::unit_node).collect();
    assert_eq!(
        names(&wrapped),
        vec!["counter", "rtl", "util_pkg", "util_pkg"]
    );
}
