use cbtree_viz::aggregator::{calculate_tree_stats, separators_match};
use cbtree_viz::parser::{parse_tree_str, NodeNamer};

const TREE: &str = "\
internal 0x1:
  key 40
  internal 0x2:
    key 10
    key 20
    leaf 0x3: [1=a] [5=b]
    leaf 0x4: [10=c]
    leaf 0x5: [20=d] [30=e]
  internal 0x6:
    key 60
    leaf 0x7: [40=f]
    leaf 0x8: [60=g] [70=h]";

#[test]
fn test_calculate_tree_stats() {
    let tree = parse_tree_str(TREE, &mut NodeNamer::new()).unwrap();
    let stats = calculate_tree_stats(&tree);

    assert_eq!(stats.internal_nodes, 3);
    assert_eq!(stats.leaf_nodes, 5);
    assert_eq!(stats.total_nodes(), 8);
    assert_eq!(stats.height, 3);
    assert_eq!(stats.separators, 4);
    assert_eq!(stats.leaf_entries, 8);
    assert!(stats.mismatched_nodes.is_empty());
}

#[test]
fn test_separators_match() {
    let tree = parse_tree_str(TREE, &mut NodeNamer::new()).unwrap();
    assert!(tree.nodes().into_iter().all(separators_match));

    let lopsided = parse_tree_str("internal 0x1:\n leaf 0x2:\n leaf 0x3:", &mut NodeNamer::new())
        .unwrap();
    assert!(!separators_match(&lopsided.root));
}

#[test]
fn test_stats_summary_line() {
    let tree = parse_tree_str("leaf 0x1: [1=a]", &mut NodeNamer::new()).unwrap();
    assert_eq!(
        calculate_tree_stats(&tree).summary(),
        "0 internal, 1 leaves, height 1, 0 separators, 1 entries"
    );
}
