use slotmap::DefaultKey;

/// Which child slot a node occupies in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A node in the splay tree arena.
///
/// Children are owned through the arena; `parent` is a back reference.
/// `side` is `None` only for the root.
#[derive(Debug)]
pub(crate) struct SplayNode<T> {
    pub key: T,
    pub left: Option<DefaultKey>,
    pub right: Option<DefaultKey>,
    pub parent: Option<DefaultKey>,
    pub side: Option<Side>,
}

impl<T> SplayNode<T> {
    pub(crate) fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent: None,
            side: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<DefaultKey> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<DefaultKey>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_node_creation() {
        let node = SplayNode::new(7);
        assert_eq!(node.key, 7);
        assert_eq!(node.left, None);
        assert_eq!(node.right, None);
        assert_eq!(node.parent, None);
        assert_eq!(node.side, None);
    }

    #[test]
    fn test_child_slots() {
        let mut arena = SlotMap::new();
        let a = arena.insert(SplayNode::new(1));
        let b = arena.insert(SplayNode::new(2));

        let mut node = SplayNode::new(5);
        node.set_child(Side::Left, Some(a));
        node.set_child(Side::Right, Some(b));
        assert_eq!(node.child(Side::Left), Some(a));
        assert_eq!(node.child(Side::Right), Some(b));

        node.set_child(Side::Left, None);
        assert_eq!(node.left, None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
