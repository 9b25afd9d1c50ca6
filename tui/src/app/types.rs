//! Type Definitions Module
//!
//! Panels, navigation directions and the edges panels slide across.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed, ordered set of displayable panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

impl Panel {
    /// All panels in navigation order.
    pub const ALL: [Panel; 5] = [Panel::A, Panel::B, Panel::C, Panel::D, Panel::E];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Panel> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Panel::A => 'A',
            Panel::B => 'B',
            Panel::C => 'C',
            Panel::D => 'D',
            Panel::E => 'E',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::A => "View A",
            Panel::B => "View B",
            Panel::C => "View C",
            Panel::D => "View D",
            Panel::E => "View E",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Panel::ALL
                .into_iter()
                .find(|panel| panel.letter().eq_ignore_ascii_case(&c))
                .ok_or_else(|| format!("unknown panel '{}', expected one of a-e", s)),
            _ => Err(format!("unknown panel '{}', expected one of a-e", s)),
        }
    }
}

/// Which way the user moved through the ring of panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Forward,
    Backward,
}

impl NavDirection {
    /// Signed step applied to the selection index.
    pub fn step(self) -> isize {
        match self {
            NavDirection::Forward => 1,
            NavDirection::Backward => -1,
        }
    }

    /// The edge the outgoing panel leaves toward.
    pub fn edge(self) -> Edge {
        match self {
            NavDirection::Forward => Edge::Trailing,
            NavDirection::Backward => Edge::Leading,
        }
    }
}

/// Layout-direction-relative screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    #[default]
    Leading,
    Trailing,
}

impl Edge {
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Leading => Edge::Trailing,
            Edge::Trailing => Edge::Leading,
        }
    }
}

/// Physical screen side an edge resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Column direction of travel toward this side.
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn resolve(self, edge: Edge) -> Side {
        match (self, edge) {
            (LayoutDirection::LeftToRight, Edge::Leading) => Side::Left,
            (LayoutDirection::LeftToRight, Edge::Trailing) => Side::Right,
            (LayoutDirection::RightToLeft, Edge::Leading) => Side::Right,
            (LayoutDirection::RightToLeft, Edge::Trailing) => Side::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_index_matches_order() {
        for (i, panel) in Panel::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(Panel::from_index(i), Some(*panel));
        }
        assert_eq!(Panel::from_index(Panel::COUNT), None);
    }

    #[test]
    fn test_panel_from_str() {
        assert_eq!("a".parse::<Panel>(), Ok(Panel::A));
        assert_eq!("E".parse::<Panel>(), Ok(Panel::E));
        assert!("f".parse::<Panel>().is_err());
        assert!("ab".parse::<Panel>().is_err());
        assert!("".parse::<Panel>().is_err());
    }

    #[test]
    fn test_direction_edges() {
        assert_eq!(NavDirection::Forward.edge(), Edge::Trailing);
        assert_eq!(NavDirection::Backward.edge(), Edge::Leading);
        assert_eq!(Edge::Leading.opposite(), Edge::Trailing);
    }

    #[test]
    fn test_layout_direction_resolves_edges() {
        let ltr = LayoutDirection::LeftToRight;
        let rtl = LayoutDirection::RightToLeft;
        assert_eq!(ltr.resolve(Edge::Leading), Side::Left);
        assert_eq!(ltr.resolve(Edge::Trailing), Side::Right);
        assert_eq!(rtl.resolve(Edge::Leading), Side::Right);
        assert_eq!(rtl.resolve(Edge::Trailing), Side::Left);
    }
}
