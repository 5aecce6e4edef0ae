/// The three rows of an arrangement, compared independently at showdown.
/// Sizes are fixed: 3 cards up front, 5 in the middle and back.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Lane {
    Front,
    Middle,
    Back,
}

impl Lane {
    pub const fn all() -> [Lane; 3] {
        [Lane::Front, Lane::Middle, Lane::Back]
    }

    pub const fn size(&self) -> usize {
        match self {
            Lane::Front => 3,
            Lane::Middle | Lane::Back => 5,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Lane::Front => "front",
                Lane::Middle => "middle",
                Lane::Back => "back",
            }
        )
    }
}
