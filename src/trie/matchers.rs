// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The three retrieval strategies and word-end collection.
//!
//! All walks are worklist-based rather than recursive, so query depth is
//! bounded by heap, not stack. Children are always visited in creation order
//! (ascending node id), which keeps every traversal deterministic.

use fnv::FnvHashSet;

use super::node::{NodeId, ROOT};
use super::SearchTrie;

impl<T> SearchTrie<T> {
    /// Walks the tree by exact character match.
    ///
    /// Succeeds only if every character of `prefix` is consumed; running out
    /// of children first is a failure. The reached node need not be a
    /// word-end.
    pub(crate) fn literal_anchor(&self, prefix: &str) -> Option<NodeId> {
        let mut cur = ROOT;
        for c in prefix.chars() {
            cur = self.nodes[cur].child(c)?;
        }
        Some(cur)
    }

    /// Matches `prefix` against first letters of pronunciations.
    ///
    /// Maintains a frontier of candidate nodes, one expansion per query
    /// character: the next frontier is every child of the current frontier
    /// whose initials contain the character. An empty expansion fails the
    /// whole search immediately. Nodes without initials never match.
    pub(crate) fn initial_anchors(&self, prefix: &str) -> Vec<NodeId> {
        let mut frontier = vec![ROOT];
        for target in prefix.chars() {
            let mut next = Vec::new();
            for &id in &frontier {
                for child in self.nodes[id].ordered_children() {
                    if self.nodes[child].initials.contains(&target) {
                        next.push(child);
                    }
                }
            }
            if next.is_empty() {
                return Vec::new();
            }
            frontier = next;
        }
        frontier
    }

    /// Matches `prefix` against full pronunciations, greedily.
    ///
    /// Each worklist entry is a node plus the byte offset of the unconsumed
    /// query remainder. For every child with readings, the longest common
    /// prefix between the remainder and each reading is computed and only
    /// the single longest one per child is followed; heteronyms still fan
    /// out across sibling children. A node reached with nothing left to
    /// consume is an anchor and descent stops there.
    ///
    /// Known limitation: because only the longest local match per child is
    /// followed, a shorter reading prefix that would have enabled a
    /// different valid consumption further down is not explored.
    pub(crate) fn pronunciation_anchors(&self, prefix: &str) -> Vec<NodeId> {
        let mut anchors = Vec::new();
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((id, consumed)) = stack.pop() {
            if consumed == prefix.len() {
                anchors.push(id);
                continue;
            }
            let rest = &prefix[consumed..];
            // Reversed push so pop order follows creation order.
            for child in self.nodes[id].ordered_children().into_iter().rev() {
                let node = &self.nodes[child];
                if node.pronunciations.is_empty() {
                    continue;
                }
                let longest = node
                    .pronunciations
                    .iter()
                    .map(|p| common_prefix_len(rest, p))
                    .max()
                    .unwrap_or(0);
                if longest > 0 {
                    stack.push((child, consumed + longest));
                }
            }
        }
        anchors
    }

    /// Pre-order collection of word-end nodes under `anchors`.
    ///
    /// Each anchor is emitted first if it is itself a word-end, then its
    /// subtree follows. Collection stops the moment `limit` is reached, so
    /// earlier-visited branches win under a bounded limit. A node reachable
    /// from more than one anchor is emitted once.
    pub(crate) fn collect_words(&self, anchors: &[NodeId], limit: Option<usize>) -> Vec<NodeId> {
        let cap = limit.unwrap_or(usize::MAX);
        let mut out = Vec::new();
        let mut seen: FnvHashSet<NodeId> = FnvHashSet::default();

        for &anchor in anchors {
            let mut stack = vec![anchor];
            while let Some(id) = stack.pop() {
                if out.len() >= cap {
                    return out;
                }
                let node = &self.nodes[id];
                if node.word_end && seen.insert(id) {
                    out.push(id);
                }
                for child in node.ordered_children().into_iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }
}

/// Byte length of the longest common character prefix of two strings.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}
