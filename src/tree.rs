//! An owned, unbalanced BST holding plain integers. Mutating operations walk the tree
//! recursively and splice nodes in and out without any rebalancing, so the shape of the
//! tree is exactly what the insertion order produces.
//!
//! # Examples
//!
//! ```
//! use bst_demo::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.max(), None);
//!
//! tree.insert(50);
//! tree.insert(30);
//! tree.insert(70);
//! assert!(tree.contains(30));
//! assert_eq!(tree.max(), Some(70));
//!
//! // Inserting an existing value changes nothing.
//! tree.insert(30);
//!
//! tree.remove(70);
//! assert_eq!(tree.max(), Some(50));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

/// How far each tree level is shifted right in the [`Display`][fmt::Display] rendering.
const DISPLAY_INDENT: usize = 5;

/// How many values each stage of [`Tree::measure_insert_throughput`] inserts.
pub const THROUGHPUT_STAGES: [usize; 4] = [100, 1_000, 10_000, 100_000];

type Link = Option<Box<Node>>;

#[derive(Clone)]
struct Node {
    value: i32,
    left: Link,
    right: Link,
}

/// One step of an [`insert_traced`][Tree::insert_traced] walk. The events describe the
/// path the insert took; they are observational only and never affect the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// The walk passed a node with this value and continued into its left subtree.
    WentLeft(i32),
    /// The walk passed a node with this value and continued into its right subtree.
    WentRight(i32),
    /// The walk reached an empty link and placed this value there.
    Placed(i32),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WentLeft(value) => write!(f, "Go left from {}", value),
            Self::WentRight(value) => write!(f, "Go right from {}", value),
            Self::Placed(value) => write!(f, "Insert {} here.", value),
        }
    }
}

/// The measurement for one stage of [`Tree::measure_insert_throughput`].
#[derive(Debug, Clone, Copy)]
pub struct StageTiming {
    /// How many insert calls the stage made.
    pub inserted: usize,
    /// Wall-clock time the stage took.
    pub elapsed: Duration,
}

/// An unbalanced Binary Search Tree over `i32` values. Every node owns its children
/// outright; there is no sharing and no parent back-reference.
///
/// Values are unique: inserting a value that is already present is a silent no-op, as
/// is removing a value that isn't there.
#[derive(Clone)]
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns whether the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless it is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert!(tree.contains(1));
    /// assert!(tree.contains(2));
    /// assert!(!tree.contains(3));
    /// ```
    pub fn insert(&mut self, value: i32) {
        self.insert_traced(value, |_| {});
    }

    /// Inserts `value` unless it is already present, reporting each step of the
    /// descent to `trace`. A duplicate insert reports the descent but no
    /// [`Placed`][TraceEvent::Placed] event.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::{TraceEvent, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(50);
    ///
    /// let mut events = Vec::new();
    /// tree.insert_traced(30, |event| events.push(event));
    ///
    /// assert_eq!(events, [TraceEvent::WentLeft(50), TraceEvent::Placed(30)]);
    /// ```
    pub fn insert_traced(&mut self, value: i32, mut trace: impl FnMut(TraceEvent)) {
        insert_into(&mut self.root, value, &mut trace);
    }

    /// Removes `value` if it is present.
    ///
    /// A node with two children isn't unlinked: its value is overwritten with its
    /// in-order successor's (the smallest value in its right subtree) and the
    /// successor's old node is removed from that right subtree instead. No
    /// rebalancing happens in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// tree.remove(2);
    /// assert!(!tree.contains(2));
    /// assert!(tree.contains(1));
    /// assert!(tree.contains(3));
    ///
    /// // Removing a missing value is fine.
    /// tree.remove(42);
    /// ```
    pub fn remove(&mut self, value: i32) {
        remove_from(&mut self.root, value);
    }

    /// Returns whether `value` is in the tree.
    pub fn contains(&self, value: i32) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right.as_deref(),
            };
        }
        false
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(3);
    /// tree.insert(7);
    /// tree.insert(5);
    /// assert_eq!(tree.max(), Some(7));
    /// ```
    pub fn max(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.value)
    }

    /// Inserts an escalating number of random values and times each stage.
    ///
    /// For each count in [`THROUGHPUT_STAGES`] this inserts `count` values drawn
    /// uniformly from `[0, count * 10)` into this same tree, without resetting it
    /// between stages, and records the wall-clock time the stage took. Inserts are
    /// the silent kind, so nothing is traced while measuring.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_demo::tree::{Tree, THROUGHPUT_STAGES};
    ///
    /// let mut tree = Tree::new();
    /// let stages = tree.measure_insert_throughput(&mut rand::thread_rng());
    ///
    /// assert_eq!(stages.len(), THROUGHPUT_STAGES.len());
    /// assert!(!tree.is_empty());
    /// ```
    pub fn measure_insert_throughput<R: Rng>(&mut self, rng: &mut R) -> Vec<StageTiming> {
        THROUGHPUT_STAGES
            .iter()
            .map(|&count| {
                let start = Instant::now();
                for _ in 0..count {
                    self.insert(rng.gen_range(0..count as i32 * 10));
                }
                StageTiming {
                    inserted: count,
                    elapsed: start.elapsed(),
                }
            })
            .collect()
    }
}

impl Drop for Tree {
    // Unlink each node before dropping it so that a degenerate (list-shaped) tree
    // can't overflow the stack with recursive drops.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Renders the tree rotated a quarter turn: reverse in-order, one value per line,
/// right-aligned in [`DISPLAY_INDENT`] columns per level of depth. Larger values end
/// up toward the top, and reading the lines bottom-to-top gives the sorted order.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => root.render(1, f),
            None => Ok(()),
        }
    }
}

impl Node {
    fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(right) = self.right.as_deref() {
            right.render(depth + 1, f)?;
        }
        writeln!(f, "{:>width$}", self.value, width = depth * DISPLAY_INDENT)?;
        if let Some(left) = self.left.as_deref() {
            left.render(depth + 1, f)?;
        }
        Ok(())
    }
}

fn insert_into(link: &mut Link, value: i32, trace: &mut impl FnMut(TraceEvent)) {
    match link {
        None => {
            trace(TraceEvent::Placed(value));
            *link = Some(Box::new(Node::new(value)));
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => {
                trace(TraceEvent::WentLeft(node.value));
                insert_into(&mut node.left, value, trace);
            }
            // Already present. Leave the tree alone.
            Ordering::Equal => {}
            Ordering::Greater => {
                trace(TraceEvent::WentRight(node.value));
                insert_into(&mut node.right, value, trace);
            }
        },
    }
}

fn remove_from(link: &mut Link, value: i32) {
    let node = match link {
        Some(node) => node,
        None => return,
    };
    match value.cmp(&node.value) {
        Ordering::Less => remove_from(&mut node.left, value),
        Ordering::Greater => remove_from(&mut node.right, value),
        Ordering::Equal => match node.right.as_deref() {
            // No right child: the left subtree moves up into this node's place
            // (which also covers the childless case).
            None => {
                let left = node.left.take();
                *link = left;
            }
            Some(_) if node.left.is_none() => {
                let right = node.right.take();
                *link = right;
            }
            Some(right) => {
                // Two children: overwrite with the in-order successor and remove the
                // successor's node from the right subtree. Recursing into `node.right`
                // (never the whole tree) is what keeps this from touching any other
                // node on the successor's value.
                let successor = smallest(right);
                node.value = successor;
                remove_from(&mut node.right, successor);
            }
        },
    }
}

/// The leftmost value in the subtree rooted at `node`.
fn smallest(node: &Node) -> i32 {
    let mut node = node;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node.value
}
