//! Comparator synthesis for sequence-like containers.
//!
//! A container's comparator is derived from its element comparator. Both
//! sides are materialized in their own iteration order, lengths are checked,
//! and then elements are paired either by position (ordered containers) or
//! by multiset matching (unordered containers).

use crate::{Argument, Matcher, UnorderedStrategy};
use argmatch_registry::Comparator;
use argmatch_types::ContainerCategory;
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;
use std::sync::Arc;
use tracing::trace;

/// A container whose comparator can be synthesized from its elements.
///
/// Implementors also implement [`Argument`], forwarding
/// [`Argument::synthesize`] to [`Matcher::synthesize_sequence`].
pub trait Sequence: Argument {
    type Element: Argument;

    /// Whether element position is significant. Only lists and arrays are
    /// ordered; every other container defaults to unordered.
    const CATEGORY: ContainerCategory = ContainerCategory::Unordered;

    /// Returns the elements in the container's own iteration order.
    fn elements(&self) -> Vec<&Self::Element>;
}

/// Builds a comparator for `S` from the resolved comparator of its element
/// type. Returns `None` when the element type does not resolve.
pub(crate) fn synthesize<S: Sequence>(matcher: &Matcher) -> Option<Comparator<S>> {
    let element = matcher.resolve::<S::Element>()?;
    let strategy = matcher.config().unordered;
    trace!(
        "Synthesized {:?} comparator for {}",
        S::CATEGORY,
        std::any::type_name::<S>()
    );

    Some(Arc::new(move |lhs: &S, rhs: &S| {
        let (lhs, rhs) = (lhs.elements(), rhs.elements());
        match (S::CATEGORY, strategy) {
            (ContainerCategory::Ordered, _) => match_ordered(&*element, &lhs, &rhs),
            (ContainerCategory::Unordered, UnorderedStrategy::Greedy) => {
                match_unordered_greedy(&*element, &lhs, &rhs)
            }
            (ContainerCategory::Unordered, UnorderedStrategy::Maximum) => {
                match_unordered_maximum(&*element, &lhs, &rhs)
            }
        }
    }))
}

/// Position-wise comparison, short-circuiting on the first failing pair.
pub fn match_ordered<E: ?Sized>(cmp: &dyn Fn(&E, &E) -> bool, lhs: &[&E], rhs: &[&E]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| cmp(*l, *r))
}

/// Greedy multiset comparison.
///
/// Each left element, in order, consumes the first remaining right element
/// it matches. A left element with no partner fails the whole comparison.
/// `O(n²)` comparator calls in the worst case.
pub fn match_unordered_greedy<E: ?Sized>(
    cmp: &dyn Fn(&E, &E) -> bool,
    lhs: &[&E],
    rhs: &[&E],
) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut remaining = rhs.to_vec();
    for l in lhs {
        match remaining.iter().position(|r| cmp(*l, *r)) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }
    remaining.is_empty()
}

/// Multiset comparison that succeeds iff a perfect pairing exists.
///
/// Uses augmenting paths over the `n × n` match graph, so it calls the
/// comparator exactly `n²` times.
pub fn match_unordered_maximum<E: ?Sized>(
    cmp: &dyn Fn(&E, &E) -> bool,
    lhs: &[&E],
    rhs: &[&E],
) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let edges: Vec<Vec<usize>> = lhs
        .iter()
        .map(|l| (0..rhs.len()).filter(|&j| cmp(*l, rhs[j])).collect())
        .collect();

    // owner[j] = index of the left element currently paired with rhs[j]
    let mut owner: Vec<Option<usize>> = vec![None; rhs.len()];
    (0..lhs.len()).all(|i| {
        let mut visited = vec![false; rhs.len()];
        augment(i, &edges, &mut owner, &mut visited)
    })
}

fn augment(
    left: usize,
    edges: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &right in &edges[left] {
        if visited[right] {
            continue;
        }
        visited[right] = true;

        let free = match owner[right] {
            None => true,
            Some(current) => augment(current, edges, owner, visited),
        };
        if free {
            owner[right] = Some(left);
            return true;
        }
    }
    false
}

// ── Ordered containers ───────────────────────────────────────────

impl<T: Argument> Argument for Vec<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for Vec<T> {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument> Argument for VecDeque<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for VecDeque<T> {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument> Argument for LinkedList<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for LinkedList<T> {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument> Argument for Box<[T]> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for Box<[T]> {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument, const N: usize> Argument for [T; N] {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument, const N: usize> Sequence for [T; N] {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

/// `None` and `Some(_)` never match; two `Some`s match when their contents do.
impl<T: Argument> Argument for Option<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for Option<T> {
    type Element = T;
    const CATEGORY: ContainerCategory = ContainerCategory::Ordered;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

// ── Unordered containers ─────────────────────────────────────────

impl<T: Argument, S: BuildHasher + 'static> Argument for HashSet<T, S> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument, S: BuildHasher + 'static> Sequence for HashSet<T, S> {
    type Element = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument> Argument for BTreeSet<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for BTreeSet<T> {
    type Element = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Argument> Argument for BinaryHeap<T> {
    fn synthesize(matcher: &Matcher) -> Option<Comparator<Self>> {
        synthesize(matcher)
    }
}

impl<T: Argument> Sequence for BinaryHeap<T> {
    type Element = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}
