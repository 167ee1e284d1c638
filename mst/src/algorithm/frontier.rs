// ============================================================================
// This code is part of Rusty-MST.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use num_traits::Float;

/// A candidate edge from the visited set (`from`) to a vertex (`to`)
/// that was unvisited when the entry was pushed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry<T> {
    pub w: T,
    pub from: usize,
    pub to: usize,
}

impl<T> FrontierEntry<T> {
    pub fn new(w: T, from: usize, to: usize) -> Self { Self { w, from, to } }
}

impl<T: Float> Eq for FrontierEntry<T> {}

// Lexicographic on (w, from, to): equal weights go to the lower source
// vertex, then the lower target vertex.
impl<T: Float> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.w.partial_cmp(&other.w)
            .unwrap_or(Ordering::Equal)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

impl<T: Float> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of frontier edges.
///
/// There is no decrease-key: an entry whose target has been visited in the
/// meantime stays in the queue and is discarded by the caller when popped.
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
}

impl<T: Float> Frontier<T> {
    pub fn with_capacity(c: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(c) }
    }

    #[inline(always)]
    pub fn push(&mut self, e: FrontierEntry<T>) { self.heap.push(Reverse(e)); }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<FrontierEntry<T>> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_weight_order() {
        let mut f = Frontier::with_capacity(3);
        f.push(FrontierEntry::new(3.0, 0, 1));
        f.push(FrontierEntry::new(1.0, 0, 2));
        f.push(FrontierEntry::new(2.0, 0, 3));
        let ws: Vec<f64> = std::iter::from_fn(|| f.pop()).map(|e| e.w).collect();
        assert_eq!(ws, vec![1.0, 2.0, 3.0]);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_break_on_lowest_indices() {
        let mut f = Frontier::with_capacity(3);
        f.push(FrontierEntry::new(1.0, 2, 0));
        f.push(FrontierEntry::new(1.0, 1, 5));
        f.push(FrontierEntry::new(1.0, 1, 3));
        assert_eq!(f.pop(), Some(FrontierEntry::new(1.0, 1, 3)));
        assert_eq!(f.pop(), Some(FrontierEntry::new(1.0, 1, 5)));
        assert_eq!(f.pop(), Some(FrontierEntry::new(1.0, 2, 0)));
        assert_eq!(f.pop(), None);
    }
}
