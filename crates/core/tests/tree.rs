mod common;

use common::{IndexBuilder, ROOT, sample};
use rtscope_api::{NodeKind, Query};
use rtscope_core::query::TreeWalker;
use rtscope_core::{IndexView, QueryEngine};
use std::collections::{HashMap, HashSet};

fn walk(view: IndexView<'_>, max_depth: Option<usize>) -> Vec<(usize, usize)> {
    TreeWalker::new(view, view.header().root_offset())
        .with_max_depth(max_depth)
        .map(|step| {
            let (node, depth) = step.unwrap();
            (node.offset, depth)
        })
        .collect()
}

#[test]
fn test_walk_visits_every_node_once() {
    let sample = sample();
    let view = IndexView::new(&sample.index.bytes).unwrap();

    let visited = walk(view, None);
    assert_eq!(visited.len(), sample.index.offsets.len());

    let unique: HashSet<usize> = visited.iter().map(|(offset, _)| *offset).collect();
    let expected: HashSet<usize> = sample.index.offsets.iter().copied().collect();
    assert_eq!(unique, expected);
}

#[test]
fn test_walk_depth_follows_parent_edges() {
    let sample = sample();
    let view = IndexView::new(&sample.index.bytes).unwrap();

    let depths: HashMap<usize, usize> = walk(view, None).into_iter().collect();
    for (&offset, &depth) in &depths {
        let node = view.node(offset).unwrap();
        match node.parent {
            Some(parent) => assert_eq!(depth, depths[&parent] + 1),
            None => assert_eq!(depth, 0),
        }
        if let Some(sibling) = node.next_sibling {
            assert_eq!(depths[&sibling], depth);
        }
    }
}

#[test]
fn test_walk_is_preorder() {
    let mut b = IndexBuilder::new();
    let a = b.node(ROOT, NodeKind::Class, "A", Some("t.c:1:1"));
    let a1 = b.node(a, NodeKind::Field, "a1", Some("t.c:2:1"));
    let a1x = b.node(a1, NodeKind::Reference, "a1x", Some("t.c:3:1"));
    let a2 = b.node(a, NodeKind::Field, "a2", Some("t.c:4:1"));
    let c = b.node(ROOT, NodeKind::Class, "C", Some("t.c:5:1"));
    let built = b.build();
    let view = IndexView::new(&built.bytes).unwrap();

    let expected: Vec<(usize, usize)> = [(ROOT, 0), (a, 1), (a1, 2), (a1x, 3), (a2, 2), (c, 1)]
        .into_iter()
        .map(|(id, depth)| (built.offset(id), depth))
        .collect();
    assert_eq!(walk(view, None), expected);
}

#[test]
fn test_walk_from_zero_is_empty() {
    let sample = sample();
    let view = IndexView::new(&sample.index.bytes).unwrap();
    assert_eq!(TreeWalker::new(view, 0).count(), 0);
}

#[test]
fn test_walk_from_inner_node_includes_its_siblings() {
    let sample = sample();
    let view = IndexView::new(&sample.index.bytes).unwrap();

    let names: Vec<&str> = TreeWalker::new(view, sample.index.offset(sample.field))
        .map(|step| step.unwrap().0.symbol_name)
        .collect();
    assert_eq!(names, vec!["x", "run", "Color", "Red", "Runner", "Runner"]);
}

#[test]
fn test_max_depth_prunes_children() {
    let sample = sample();
    let view = IndexView::new(&sample.index.bytes).unwrap();

    let shallow = walk(view, Some(1));
    assert!(shallow.iter().all(|(_, depth)| *depth <= 1));
    // Root plus the namespace.
    assert_eq!(shallow.len(), 2);

    let two = walk(view, Some(2));
    assert_eq!(two.len(), 4);
}

#[test]
fn test_show_tree_lines() {
    let mut b = IndexBuilder::new();
    let class = b.node(ROOT, NodeKind::Class, "Runner", Some("a.c:2:1"));
    b.node(class, NodeKind::MethodDeclaration, "run", Some("a.c:3:5"));
    b.node(class, NodeKind::Typedef, "size_type", None);
    let built = b.build();
    let view = IndexView::new(&built.bytes).unwrap();

    let lines: Vec<String> = QueryEngine::new(view)
        .collect(&Query::ShowTree { max_depth: None })
        .unwrap()
        .iter()
        .map(|item| item.to_string())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Root  ",
            "  Class Runner a.c:2:1",
            "    MethodDeclaration run a.c:3:5",
            "    Typedef size_type ",
        ]
    );
}
