use bitflags::bitflags;

bitflags! {
    /// Records which symbolic atoms occur somewhere in a subtree.
    ///
    /// Leaves carry an implicit value ([`Literal::tags`](super::literal::Literal::tags)), while
    /// binary, unary, call, and assignment nodes store the union of their children. The stored
    /// value is only trustworthy right after a tagging pass, since rewriting a tree does not
    /// update it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Tags: u8 {
        /// The free variable occurs in the subtree.
        const VARIABLE = 0b001;

        /// Euler's number `e` occurs in the subtree.
        const E = 0b010;

        /// `pi` occurs in the subtree.
        const PI = 0b100;
    }
}

impl Tags {
    /// Returns true if the free variable occurs in the subtree.
    pub fn has_variable(self) -> bool {
        self.contains(Self::VARIABLE)
    }
}

/// Which side of an equality contains the free variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableSide {
    /// Only the left-hand side contains the variable.
    Left,

    /// Only the right-hand side contains the variable.
    Right,

    /// Both sides contain the variable.
    Both,

    /// Neither side contains the variable. This is also the value before tagging.
    #[default]
    Neither,
}

impl VariableSide {
    /// Determines the side from the tags of the left-hand and right-hand sides.
    pub fn from_tags(lhs: Tags, rhs: Tags) -> Self {
        match (lhs.has_variable(), rhs.has_variable()) {
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (true, true) => Self::Both,
            (false, false) => Self::Neither,
        }
    }
}
