/// One side of a rectangular element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Parses a side keyword (`top`, `right`, `bottom`, `left`), case-insensitive.
    pub fn from_keyword(s: &str) -> Option<Edge> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Some(Edge::Top),
            "right" => Some(Edge::Right),
            "bottom" => Some(Edge::Bottom),
            "left" => Some(Edge::Left),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Edge::Top => 1,
            Edge::Right => 2,
            Edge::Bottom => 4,
            Edge::Left => 8,
        }
    }
}

/// Set of sides that receive a rendered border ("edge flags").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSet(u8);

impl EdgeSet {
    #[inline]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn with(self, edge: Edge) -> Self {
        Self(self.0 | edge.bit())
    }

    #[inline]
    pub const fn without(self, edge: Edge) -> Self {
        Self(self.0 & !edge.bit())
    }

    #[inline]
    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parses a whitespace- or comma-separated list of side keywords.
    ///
    /// `all` selects every side. Returns the first unknown word on failure.
    pub fn parse(s: &str) -> Result<EdgeSet, String> {
        let mut set = EdgeSet::none();
        for word in s.split(|c: char| c.is_whitespace() || c == ',').filter(|w| !w.is_empty()) {
            if word.eq_ignore_ascii_case("all") {
                set = EdgeSet::all();
                continue;
            }
            match Edge::from_keyword(word) {
                Some(edge) => set = set.with(edge),
                None => return Err(word.to_string()),
            }
        }
        Ok(set)
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(EdgeSet::none(), EdgeSet::with)
    }
}
