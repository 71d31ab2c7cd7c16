use slotmap::DefaultKey;

/// Value slot of a skip node, with the two row sentinels.
///
/// Variant order gives `NegInf < Value(_) < PosInf`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound<T> {
    NegInf,
    Value(T),
    PosInf,
}

impl<T> Bound<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Bound::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Bound::Value(_))
    }
}

/// A node in the skip list lattice.
///
/// All four links are plain arena keys; no link owns its target.
#[derive(Debug)]
pub(crate) struct SkipNode<T> {
    pub value: Bound<T>,
    pub before: Option<DefaultKey>,
    pub after: Option<DefaultKey>,
    pub above: Option<DefaultKey>,
    pub below: Option<DefaultKey>,
}

impl<T> SkipNode<T> {
    pub(crate) fn new(value: Bound<T>) -> Self {
        Self {
            value,
            before: None,
            after: None,
            above: None,
            below: None,
        }
    }
}
