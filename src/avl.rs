use crate::comparator::{Comparator, Natural};
use crate::tree::TreeOps;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

pub struct AvlTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

pub struct Node<T> {
    value: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T, C: Comparator<T>> TreeOps<T> for AvlTree<T, C> {
    fn insert(&mut self, value: T) -> bool {
        let inserted = insert_into(&mut self.root, value, &self.cmp);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        AvlTree {
            root: None,
            len: 0,
            cmp,
        }
    }

    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    pub fn take(&mut self, value: &T) -> Option<T> {
        let removed = remove_from(&mut self.root, value, &self.cmp);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match self.cmp.compare(value, &node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }
}

impl<T, C> AvlTree<T, C> {
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// 0 when the tree is empty.
    pub fn height(&self) -> usize {
        link_height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn in_order<F: FnMut(&Node<T>)>(&self, mut visit: F) {
        fn walk<T, F: FnMut(&Node<T>)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left(), visit);
                visit(node);
                walk(node.right(), visit);
            }
        }
        walk(self.root(), &mut visit);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn balance_factor(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }
}

fn link_height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn insert_into<T, C: Comparator<T>>(link: &mut Link<T>, value: T, cmp: &C) -> bool {
    let inserted = match link {
        None => {
            *link = Some(Box::new(Node::leaf(value)));
            return true;
        }
        Some(node) => match cmp.compare(&value, &node.value) {
            Ordering::Less => insert_into(&mut node.left, value, cmp),
            Ordering::Greater => insert_into(&mut node.right, value, cmp),
            Ordering::Equal => false,
        },
    };
    if inserted {
        rebalance(link);
    }
    inserted
}

fn remove_from<T, C: Comparator<T>>(link: &mut Link<T>, value: &T, cmp: &C) -> Option<T> {
    let node = link.as_mut()?;
    let removed = match cmp.compare(value, &node.value) {
        Ordering::Less => remove_from(&mut node.left, value, cmp),
        Ordering::Greater => remove_from(&mut node.right, value, cmp),
        Ordering::Equal => unlink(link),
    };
    if removed.is_some() {
        rebalance(link);
    }
    removed
}

// two-child nodes take their in-order successor's value
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (Some(left), Some(right)) => {
            debug!("promoting in-order successor of a two-child node");
            let (rest, successor) = take_min(right);
            node.left = Some(left);
            node.right = rest;
            let value = std::mem::replace(&mut node.value, successor);
            *link = Some(node);
            Some(value)
        }
        (child, None) | (None, child) => {
            *link = child;
            Some(node.value)
        }
    }
}

fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            let mut link = Some(node);
            rebalance(&mut link);
            (link, min)
        }
        None => (node.right.take(), node.value),
    }
}

fn rebalance<T>(link: &mut Link<T>) {
    let Some(node) = link.as_mut() else {
        return;
    };
    node.update_height();
    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            trace!("left-right case");
            rotate_left(&mut node.left);
        } else {
            trace!("left-left case");
        }
        rotate_right(link);
    } else if balance_factor < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            trace!("right-left case");
            rotate_right(&mut node.right);
        } else {
            trace!("right-right case");
        }
        rotate_left(link);
    }
}

fn rotate_right<T>(link: &mut Link<T>) {
    let Some(mut x) = link.take() else {
        return;
    };
    let Some(mut y) = x.left.take() else {
        *link = Some(x);
        return;
    };

    // x adopts y's right subtree, then becomes y's right child
    x.left = y.right.take();
    x.update_height();
    y.right = Some(x);
    y.update_height();
    *link = Some(y);
}

fn rotate_left<T>(link: &mut Link<T>) {
    let Some(mut x) = link.take() else {
        return;
    };
    let Some(mut y) = x.right.take() else {
        *link = Some(x);
        return;
    };

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    *link = Some(y);
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut cur: Option<&'a Node<T>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.insert_many(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
