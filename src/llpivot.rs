use log::debug;

/// A singly linked list node.  Each node owns the rest of the list through `next`.
/// Nodes only ever live inside a List, which frees them one at a time.
#[derive(Debug)]
pub struct Node<T> {
    pub val: T,
    next: Link<T>
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn new(val: T) -> Box<Self> {
        Box::new(Self{val, next: None})
    }

    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

/// Split a linked list around a pivot without allocating or copying any node.
/// Every node whose value is <= pivot ends up in the first returned list and every
/// other node in the second, each list keeping the nodes in their original order.
/// All nodes are taken out of `list`, so it is empty afterwards.
pub fn llpivot<T: PartialOrd>(list: &mut List<T>, pivot: &T) -> (List<T>, List<T>) {
    let mut rest = list.head.take();
    let (mut smaller, mut larger) = (List::new(), List::new());
    let (mut s_tail, mut l_tail) = (&mut smaller.head, &mut larger.head);
    let (mut s_count, mut l_count) = (0usize, 0usize);
    while let Some(mut node) = rest {
        rest = node.next.take();
        // the node is detached before being linked in, so no tail ever points back into
        // the other list or the unprocessed remainder
        if node.val <= *pivot {
            s_tail = &mut s_tail.insert(node).next;
            s_count += 1;
        } else {
            l_tail = &mut l_tail.insert(node).next;
            l_count += 1;
        }
    }
    debug!("pivoted {} nodes: {} smaller or equal, {} larger", s_count + l_count, s_count, l_count);
    (smaller, larger)
}

/// An owned singly linked list.  Dropping it unlinks the nodes one at a time,
/// so arbitrarily long lists can be dropped without exhausting the stack.
#[derive(Debug)]
pub struct List<T> {
    head: Link<T>
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self{head: None}
    }

    pub fn push_front(&mut self, val: T) {
        let mut node = Node::new(val);
        node.next = self.head.take();
        self.head = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node{val, next} = *node;
        self.head = next;
        Some(val)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// O(n): the list does not cache its length
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter{next: self.head.as_deref()}
    }

    /// Get the first node, for walking the nodes themselves rather than their values
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        let mut res = Vec::new();
        while let Some(val) = self.pop_front() {
            res.push(val)
        }
        res
    }
}

impl<T: PartialOrd> List<T> {
    /// Move every node of this list into one of two new lists, see `llpivot`.
    /// This list is left empty.
    pub fn partition(&mut self, pivot: &T) -> (Self, Self) {
        llpivot(self, pivot)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        let mut tail = &mut res.head;
        for val in iter {
            tail = &mut tail.insert(Node::new(val)).next;
        }
        res
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.val)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::Rng;

    use crate::testing::{init_test, random_vec, MAX_LEN, TRIALS};

    use super::*;

    fn node_addrs<T>(list: &List<T>) -> Vec<usize> {
        let mut res = Vec::new();
        let mut node = list.head();
        while let Some(n) = node {
            res.push(n as *const Node<T> as usize);
            node = n.next();
        }
        res
    }

    #[test]
    fn pivot_mixed() {
        init_test();
        let mut list: List<i32> = [5, 1, 8, 2, 9].into_iter().collect();
        let (smaller, larger) = list.partition(&5);
        assert!(list.is_empty());
        assert_eq!(smaller.into_vec(), [5, 1, 2]);
        assert_eq!(larger.into_vec(), [8, 9]);
    }

    #[test]
    fn pivot_empty() {
        init_test();
        let mut list: List<i32> = List::new();
        let (smaller, larger) = llpivot(&mut list, &42);
        assert!(list.is_empty());
        assert!(smaller.is_empty());
        assert!(larger.is_empty());
    }

    #[test]
    fn pivot_edges() {
        init_test();
        let mut list = List::new();
        list.push_front(3);
        let (smaller, larger) = llpivot(&mut list, &3);
        assert!(list.is_empty());
        assert_eq!(smaller.head().map(|n|n.val), Some(3));
        assert!(smaller.head().and_then(Node::next).is_none());
        assert!(larger.is_empty());

        let mut list: List<i32> = [1, 2, 3].into_iter().collect();
        let (smaller, larger) = list.partition(&10);
        assert_eq!(smaller.into_vec(), [1, 2, 3]);
        assert!(larger.is_empty());

        let mut list: List<i32> = [4, 5, 6].into_iter().collect();
        let (smaller, larger) = list.partition(&0);
        assert!(smaller.is_empty());
        assert_eq!(larger.into_vec(), [4, 5, 6]);
    }

    #[test]
    fn pivot_reuses_nodes() {
        init_test();
        let mut list: List<i32> = (0..50).map(|i|(i*37)%50).collect();
        let before: HashSet<usize> = node_addrs(&list).into_iter().collect();
        let (smaller, larger) = list.partition(&25);
        let mut after = node_addrs(&smaller);
        after.extend(node_addrs(&larger));
        assert_eq!(after.len(), before.len());
        assert_eq!(after.into_iter().collect::<HashSet<_>>(), before);
    }

    #[test]
    fn random_pivots() {
        init_test();
        let mut rng = rand::thread_rng();
        for _ in 0..TRIALS*5 {
            let input = random_vec(&mut rng, MAX_LEN, -20, 20);
            let pivot = rng.gen_range(-25..=25);
            let mut list: List<i64> = input.iter().copied().collect();
            assert_eq!(list.len(), input.len());
            let (smaller, larger) = list.partition(&pivot);
            assert!(list.is_empty());
            let expected_smaller: Vec<i64> = input.iter().copied().filter(|&x|x <= pivot).collect();
            let expected_larger: Vec<i64> = input.iter().copied().filter(|&x|x > pivot).collect();
            assert_eq!(smaller.iter().copied().collect::<Vec<_>>(), expected_smaller);
            assert_eq!(larger.into_vec(), expected_larger);
        }
    }

    #[test]
    fn long_list_drops() {
        let list: List<u32> = (0..1_000_000).collect();
        let mut list2 = List::new();
        list2.push_front(1);
        assert_eq!(list2.pop_front(), Some(1));
        assert_eq!(list2.pop_front(), None);
        drop(list);
    }

    #[test]
    fn long_pivot_outputs_drop() {
        let mut list: List<u32> = (0..1_000_000).collect();
        let (smaller, larger) = llpivot(&mut list, &2_000_000);
        assert!(list.is_empty());
        assert!(larger.is_empty());
        drop(smaller);
        drop(larger);

        let mut list: List<u32> = (0..1_000_000).collect();
        let (smaller, larger) = llpivot(&mut list, &499_999);
        assert_eq!(smaller.head().map(|n|n.val), Some(0));
        assert_eq!(larger.head().map(|n|n.val), Some(500_000));
        drop(larger);
        drop(smaller);
    }
}
