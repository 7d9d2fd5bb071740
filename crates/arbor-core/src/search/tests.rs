use super::*;
use crate::tree::reference_tree;

#[test]
fn test_best_first_reference_path() {
    let tree = reference_tree();
    assert_eq!(tree.best_first_search(&4), vec![1, 3, 4]);
}

#[test]
fn test_hill_climbing_reference_path() {
    let tree = reference_tree();
    assert_eq!(tree.hill_climbing_search(&4), vec![1, 2, 7, 4]);
}

#[test]
fn test_strategies_agree_on_unique_leaf() {
    let tree = reference_tree();
    for strategy in Strategy::ALL {
        assert_eq!(tree.search(strategy, &9), vec![1, 2, 7, 9]);
        assert_eq!(tree.search(strategy, &10), vec![1, 2, 10]);
        assert_eq!(tree.search(strategy, &5), vec![1, 3, 5]);
    }
}

#[test]
fn test_single_node_tree() {
    let tree = Tree::leaf(5);
    for strategy in Strategy::ALL {
        assert_eq!(tree.search(strategy, &5), vec![5]);
        assert!(tree.search(strategy, &9).is_empty());
    }
}

#[test]
fn test_missing_target_is_empty_path() {
    let tree = reference_tree();
    for strategy in Strategy::ALL {
        assert!(tree.search(strategy, &42).is_empty());
    }
}

/// Interior values are expanded, never matched
#[test]
fn test_interior_values_never_match() {
    let tree = reference_tree();
    for strategy in Strategy::ALL {
        for interior in [1, 2, 3, 7] {
            assert!(
                tree.search(strategy, &interior).is_empty(),
                "{strategy} matched interior value {interior}"
            );
        }
    }
}

#[test]
fn test_path_always_ends_at_leaf() {
    let tree = reference_tree();
    for strategy in Strategy::ALL {
        for target in 0..12 {
            if let Some(path) = tree.find_path_by(strategy, &target, i64::cmp) {
                let last = *path.last().unwrap();
                assert!(tree[last].is_leaf());
                assert_eq!(*tree.value(last), target);
                assert_eq!(path[0], tree.root());
            }
        }
    }
}

#[test]
fn test_path_ids_follow_parent_links() {
    let tree = reference_tree();
    let path = tree
        .find_path_by(Strategy::HillClimbing, &4, i64::cmp)
        .unwrap();
    assert_eq!(path.len(), 4);
    for pair in path.windows(2) {
        assert_eq!(tree[pair[1]].parent(), Some(pair[0]));
    }
}

#[test]
fn test_repeated_searches_agree() {
    let tree = reference_tree();
    for strategy in Strategy::ALL {
        let first = tree.search(strategy, &4);
        for _ in 0..3 {
            assert_eq!(tree.search(strategy, &4), first);
        }
    }
}

#[test]
fn test_caller_comparator_reverses_priority() {
    let tree = reference_tree();
    let descending = |a: &i64, b: &i64| b.cmp(a);
    assert_eq!(tree.best_first_search_by(&4, descending), vec![1, 3, 4]);
    assert_eq!(tree.hill_climbing_search_by(&4, descending), vec![1, 3, 4]);
}

/// Equal priorities keep insertion order
#[test]
fn test_ties_keep_insertion_order() {
    let by_priority = |a: &(i64, &str), b: &(i64, &str)| a.0.cmp(&b.0);
    let tree = Tree::build(
        (0, "root"),
        vec![
            Tree::build((1, "a"), vec![Tree::leaf((9, "t"))]),
            Tree::build((1, "b"), vec![Tree::leaf((9, "t"))]),
        ],
    );

    for strategy in Strategy::ALL {
        let path = tree
            .find_path_by(strategy, &(9, "t"), by_priority)
            .unwrap();
        assert_eq!(*tree.value(path[1]), (1, "a"));
    }
}

#[test]
fn test_partial_order_search() {
    let tree = Tree::build(0.0, vec![Tree::leaf(2.5), Tree::leaf(1.5)]);
    for strategy in Strategy::ALL {
        assert_eq!(tree.try_search_partial(strategy, &2.5).unwrap(), vec![0.0, 2.5]);
    }
}

#[test]
fn test_unorderable_values_fail() {
    let tree = Tree::build(0.0, vec![Tree::leaf(f64::NAN), Tree::leaf(1.0)]);
    for strategy in Strategy::ALL {
        let err = tree.try_search_partial(strategy, &1.0).unwrap_err();
        assert!(matches!(err, ArborError::OrderingUnsupported { .. }));
    }
}

#[test]
fn test_try_variants_with_total_comparator() {
    let tree = reference_tree();
    let partial = |a: &i64, b: &i64| Some(a.cmp(b));
    assert_eq!(
        tree.try_best_first_search_by(&4, partial).unwrap(),
        vec![1, 3, 4]
    );
    assert_eq!(
        tree.try_hill_climbing_search_by(&4, partial).unwrap(),
        vec![1, 2, 7, 4]
    );
}

#[test]
fn test_strategy_parse_and_display() {
    assert_eq!("best-first".parse::<Strategy>().unwrap(), Strategy::BestFirst);
    assert_eq!("Hill".parse::<Strategy>().unwrap(), Strategy::HillClimbing);
    assert!("sideways".parse::<Strategy>().is_err());
    assert_eq!(Strategy::HillClimbing.to_string(), "hill-climbing");
    assert_eq!(
        serde_json::to_string(&Strategy::BestFirst).unwrap(),
        "\"best-first\""
    );
}
