mod common;

use argmatch_matcher::{
    Argument, Comparator, ContainerCategory, Matcher, MatcherConfig, Sequence, UnorderedStrategy,
    equatable,
};
use common::{Bag, Point, init_tracing};
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};

fn with_points() -> Matcher {
    let mut matcher = Matcher::empty();
    matcher.register::<Point, _>(|a, b| a.x == b.x && a.y == b.y);
    matcher
}

fn p(x: i32, y: i32) -> Point {
    Point { x, y }
}

// ── Ordered containers ───────────────────────────────────────────

#[test]
fn ordered_is_position_sensitive() {
    init_tracing();
    let matcher = Matcher::empty();
    assert!(matcher.compare(&vec![1, 2, 3], &vec![1, 2, 3]).unwrap());
    assert!(!matcher.compare(&vec![1, 2, 3], &vec![3, 2, 1]).unwrap());
}

#[test]
fn ordered_uses_registered_element_comparator() {
    let matcher = with_points();
    let lhs = vec![p(1, 1), p(2, 2)];
    assert!(matcher.compare(&lhs, &vec![p(1, 1), p(2, 2)]).unwrap());
    assert!(!matcher.compare(&lhs, &vec![p(2, 2), p(1, 1)]).unwrap());
}

#[test]
fn ordered_length_mismatch_never_matches() {
    let mut matcher = Matcher::empty();
    matcher.register::<i32, _>(|_, _| true);
    assert!(!matcher.compare(&vec![1, 2], &vec![1, 2, 3]).unwrap());
    assert!(!matcher.compare(&vec![], &vec![1]).unwrap());
}

#[test]
fn empty_containers_match() {
    let matcher = with_points();
    assert!(matcher.compare(&Vec::<Point>::new(), &Vec::new()).unwrap());
    assert!(matcher.compare(&Bag::<Point>::default(), &Bag::default()).unwrap());
}

#[test]
fn other_ordered_containers() {
    let matcher = with_points();

    let deque: VecDeque<Point> = [p(1, 0), p(0, 1)].into();
    let swapped: VecDeque<Point> = [p(0, 1), p(1, 0)].into();
    assert!(matcher.compare(&deque, &deque.clone()).unwrap());
    assert!(!matcher.compare(&deque, &swapped).unwrap());

    let list: LinkedList<Point> = [p(5, 5)].into_iter().collect();
    assert!(matcher.compare(&list, &list.clone()).unwrap());

    let boxed: Box<[Point]> = vec![p(1, 2)].into_boxed_slice();
    assert!(matcher.compare(&boxed, &boxed.clone()).unwrap());

    assert!(matcher.compare(&[p(1, 2), p(3, 4)], &[p(1, 2), p(3, 4)]).unwrap());
    assert!(!matcher.compare(&[p(1, 2), p(3, 4)], &[p(3, 4), p(1, 2)]).unwrap());
}

#[test]
fn option_behaves_as_zero_or_one_element() {
    let matcher = with_points();
    assert!(matcher.compare(&None::<Point>, &None).unwrap());
    assert!(!matcher.compare(&Some(p(1, 1)), &None).unwrap());
    assert!(matcher.compare(&Some(p(1, 1)), &Some(p(1, 1))).unwrap());
    assert!(!matcher.compare(&Some(p(1, 1)), &Some(p(1, 2))).unwrap());
}

#[test]
fn nested_containers_synthesize_recursively() {
    let matcher = with_points();
    let lhs = vec![Some(vec![p(1, 1)]), None];
    assert!(matcher.compare(&lhs, &vec![Some(vec![p(1, 1)]), None]).unwrap());
    assert!(!matcher.compare(&lhs, &vec![Some(vec![p(1, 9)]), None]).unwrap());
    assert!(!matcher.compare(&lhs, &vec![None, Some(vec![p(1, 1)])]).unwrap());
}

#[test]
fn element_override_reaches_synthesized_containers() {
    let mut matcher = Matcher::empty();
    matcher.register::<i32, _>(|a, b| a % 10 == b % 10);
    assert!(matcher.compare(&vec![1, 12], &vec![21, 2]).unwrap());
}

// ── Unordered containers ─────────────────────────────────────────

#[test]
fn unordered_ignores_position() {
    let matcher = Matcher::empty();
    let lhs: BinaryHeap<i32> = [1, 2, 3].into();
    let rhs: BinaryHeap<i32> = [3, 1, 2].into();
    assert!(matcher.compare(&lhs, &rhs).unwrap());
}

#[test]
fn unordered_has_multiset_semantics() {
    let matcher = Matcher::empty();
    let lhs: BinaryHeap<i32> = [1, 2, 2].into();
    let rhs: BinaryHeap<i32> = [1, 1, 2].into();
    assert!(!matcher.compare(&lhs, &rhs).unwrap());
}

#[test]
fn unordered_length_mismatch_never_matches() {
    let mut matcher = Matcher::empty();
    matcher.register::<u8, _>(|_, _| true);
    let lhs: HashSet<u8> = [1, 2].into();
    let rhs: HashSet<u8> = [1, 2, 3].into();
    assert!(!matcher.compare(&lhs, &rhs).unwrap());
}

#[test]
fn sets_compare_through_element_comparator() {
    let matcher = Matcher::new();
    let lhs: HashSet<String> = ["a".to_string(), "b".to_string()].into();
    let rhs: HashSet<String> = ["b".to_string(), "a".to_string()].into();
    assert!(matcher.compare(&lhs, &rhs).unwrap());

    let tree: BTreeSet<char> = ['x', 'y'].into();
    let other: BTreeSet<char> = ['x', 'z'].into();
    assert!(!matcher.compare(&tree, &other).unwrap());
}

#[test]
fn caller_container_is_unordered() {
    let matcher = with_points();
    let lhs = Bag(vec![p(1, 1), p(2, 2), p(2, 2)]);
    assert!(matcher.compare(&lhs, &Bag(vec![p(2, 2), p(1, 1), p(2, 2)])).unwrap());
    assert!(!matcher.compare(&lhs, &Bag(vec![p(1, 1), p(1, 1), p(2, 2)])).unwrap());
}

#[test]
fn greedy_can_miss_a_valid_pairing() {
    // 1 accepts 1 or 2; 2 accepts only 1. Greedy hands 1 to 1 and strands 2.
    let mut matcher = Matcher::empty();
    matcher.register::<i32, _>(|a, b| if *a == 2 { *b == 1 } else { (a - b).abs() <= 1 });

    assert!(!matcher.compare(&Bag(vec![1, 2]), &Bag(vec![1, 2])).unwrap());
}

#[test]
fn maximum_strategy_finds_the_pairing() {
    let mut matcher = Matcher::with_config(MatcherConfig {
        builtins: false,
        unordered: UnorderedStrategy::Maximum,
    });
    matcher.register::<i32, _>(|a, b| if *a == 2 { *b == 1 } else { (a - b).abs() <= 1 });

    assert!(matcher.compare(&Bag(vec![1, 2]), &Bag(vec![1, 2])).unwrap());
    assert!(!matcher.compare(&Bag(vec![2, 2]), &Bag(vec![1, 2])).unwrap());
}

#[test]
fn strategy_does_not_affect_ordered_containers() {
    let matcher = Matcher::with_config(MatcherConfig {
        builtins: false,
        unordered: UnorderedStrategy::Maximum,
    });
    assert!(!matcher.compare(&vec![1, 2], &vec![2, 1]).unwrap());
}

#[test]
fn synthesize_sequence_ignores_container_registration() {
    let mut matcher = Matcher::empty();
    matcher.register::<Vec<i32>, _>(|_, _| true);

    let synthesized = matcher.synthesize_sequence::<Vec<i32>>().unwrap();
    assert!(!synthesized(&vec![1], &vec![2]));
    assert!(matcher.compare(&vec![1], &vec![2]).unwrap());
}

// ── Category defaults ────────────────────────────────────────────

#[test]
fn custom_sequences_default_to_unordered() {
    assert_eq!(<Bag<i32> as Sequence>::CATEGORY, ContainerCategory::Unordered);
    assert_eq!(<HashSet<i32> as Sequence>::CATEGORY, ContainerCategory::Unordered);
    assert_eq!(<Vec<i32> as Sequence>::CATEGORY, ContainerCategory::Ordered);
    assert_eq!(<[i32; 2] as Sequence>::CATEGORY, ContainerCategory::Ordered);
}

// ── Self-referential containers ──────────────────────────────────

/// A tree whose children are trees, with its own equality.
#[derive(Debug, Clone, PartialEq)]
struct Tree(Vec<Tree>);

impl Argument for Tree {
    fn intrinsic() -> Option<Comparator<Self>> {
        Some(equatable::<Self>())
    }

    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        matcher.synthesize_sequence::<Self>()
    }
}

impl Sequence for Tree {
    type Element = Tree;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&Tree> {
        self.0.iter().collect()
    }
}

/// The same shape without intrinsic equality, so the element comparator
/// has to be resolved lazily.
#[derive(Debug, Clone)]
struct Forest(Vec<Forest>);

impl Argument for Forest {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        matcher.synthesize_sequence::<Self>()
    }
}

impl Sequence for Forest {
    type Element = Forest;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&Forest> {
        self.0.iter().collect()
    }
}

fn tree(depth: usize) -> Tree {
    Tree((0..depth).map(tree).collect())
}

fn forest(depth: usize) -> Forest {
    Forest((0..depth).map(forest).collect())
}

#[test]
fn recursive_sequence_falls_back_to_intrinsic_element_equality() {
    let matcher = Matcher::new();
    let t = tree(3);
    assert!(matcher.compare(&t, &t.clone()).unwrap());
    assert!(!matcher.compare(&t, &tree(2)).unwrap());
    assert!(!matcher.compare(&Tree(vec![tree(1)]), &Tree(vec![tree(2)])).unwrap());
}

#[test]
fn recursive_sequence_without_intrinsic_resolves_lazily() {
    let matcher = Matcher::new();
    let f = forest(4);
    assert!(matcher.compare(&f, &f.clone()).unwrap());
    assert!(!matcher.compare(&f, &forest(3)).unwrap());
    // Shapes differ only two levels down.
    assert!(!matcher.compare(&Forest(vec![forest(2)]), &Forest(vec![forest(1)])).unwrap());
}

#[test]
fn recursive_resolution_can_be_repeated() {
    let matcher = Matcher::empty();
    assert!(matcher.resolve::<Forest>().is_some());
    assert!(matcher.resolve::<Vec<Forest>>().is_some());
    assert!(matcher.resolve::<Tree>().is_some());
}
