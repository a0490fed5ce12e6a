//! Property tests for tree building, flattening and rendering.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use proptest::prelude::*;
use tempfile::TempDir;

use jobprune::{
    render_children, render_tree, GraphBuilder, JobFolder, JobName, LocalFs, TreeGlyphs,
};

const NAMES: &[&str] = &["J0", "J1", "J2", "J3", "J4", "J5", "M0", "M1"];

/// Job name -> references; `M*` names never get a file
fn job_graph() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    let refs = proptest::collection::vec(proptest::sample::select(NAMES), 0..5);
    proptest::collection::vec(refs, 6).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, refs)| {
                (
                    format!("J{}", i),
                    refs.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    })
}

fn write_folder(graph: &BTreeMap<String, Vec<String>>) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (job, refs) in graph {
        let body: String = refs.iter().map(|r| format!("CALL JOB:{}\n", r)).collect();
        std::fs::write(dir.path().join(format!("{}.JBI", job)), body).unwrap();
    }
    dir
}

/// Plain breadth-first closure from `root`
fn closure(graph: &BTreeMap<String, Vec<String>>, root: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([root.to_string()]);
    while let Some(job) = queue.pop_front() {
        if !seen.insert(job.clone()) {
            continue;
        }
        for r in graph.get(&job).into_iter().flatten() {
            queue.push_back(r.clone());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The reachable set is exactly what the root can reach,
    /// cycles included, and always holds the root's direct references.
    #[test]
    fn property_reachable_matches_closure(graph in job_graph()) {
        let dir = write_folder(&graph);
        let builder = GraphBuilder::new(LocalFs::new(), JobFolder::new(dir.path()));

        let outcome = builder.build(JobName::from("J0"));
        let reachable: BTreeSet<String> = outcome
            .tree
            .reachable()
            .into_iter()
            .map(|n| n.as_str().to_string())
            .collect();

        prop_assert_eq!(&reachable, &closure(&graph, "J0"));
        for direct in &graph["J0"] {
            prop_assert!(reachable.contains(direct));
        }

        let missing: BTreeSet<String> = reachable
            .iter()
            .filter(|n| n.starts_with('M'))
            .cloned()
            .collect();
        let diagnosed: BTreeSet<String> = outcome
            .diagnostics
            .iter()
            .map(|d| d.job().as_str().to_string())
            .collect();
        prop_assert_eq!(missing, diagnosed);
    }

    /// PROPERTY: Flattening is idempotent and agrees with `reachable`.
    #[test]
    fn property_flatten_idempotent(graph in job_graph()) {
        let dir = write_folder(&graph);
        let builder = GraphBuilder::new(LocalFs::new(), JobFolder::new(dir.path()));
        let tree = builder.build(JobName::from("J0")).tree;

        let first = tree.children().flatten();
        let second = tree.children().flatten();
        prop_assert_eq!(&first, &second);

        let mut with_root = first.clone();
        with_root.insert(tree.root().clone());
        prop_assert_eq!(with_root, tree.reachable());
    }

    /// PROPERTY: Rendering is deterministic, draws one line per node and ends
    /// every top-level list with the corner glyph.
    #[test]
    fn property_render_deterministic(graph in job_graph()) {
        let dir = write_folder(&graph);
        let builder = GraphBuilder::new(LocalFs::new(), JobFolder::new(dir.path()));
        let tree = builder.build(JobName::from("J0")).tree;
        let glyphs = TreeGlyphs::unicode();

        let lines = render_tree(&tree, &glyphs);
        prop_assert_eq!(&lines, &render_tree(&tree, &glyphs));
        prop_assert_eq!(lines.len(), tree.children().node_count() + 1);

        let top: Vec<String> = render_children(tree.children(), &glyphs)
            .into_iter()
            .filter(|l| l.starts_with("├── ") || l.starts_with("└── "))
            .collect();
        if let Some(last) = top.last() {
            prop_assert!(last.starts_with("└── "));
            for line in &top[..top.len() - 1] {
                prop_assert!(line.starts_with("├── "));
            }
        }
    }
}
