//! The three cyclic sprite kinds and their predator/prey relation.
//!
//! The relation is fixed:
//!
//! ```text
//!   Rock ──eats──▶ Scissors ──eats──▶ Paper ──eats──▶ Rock
//! ```

/// The type of a sprite.  Which group table holds the agent always agrees
/// with this tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Rock,
    Paper,
    Scissors,
}

impl Kind {
    /// All kinds in table order (also the left-to-right score-bar order).
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// The kind this one hunts and converts on contact.
    #[inline]
    pub fn prey(self) -> Kind {
        match self {
            Kind::Rock     => Kind::Scissors,
            Kind::Paper    => Kind::Rock,
            Kind::Scissors => Kind::Paper,
        }
    }

    /// The kind this one flees from.
    #[inline]
    pub fn hunter(self) -> Kind {
        match self {
            Kind::Rock     => Kind::Paper,
            Kind::Paper    => Kind::Scissors,
            Kind::Scissors => Kind::Rock,
        }
    }

    /// Position in [`Kind::ALL`]; used to index per-kind arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Kind::Rock     => 0,
            Kind::Paper    => 1,
            Kind::Scissors => 2,
        }
    }

    /// The literal name handed to the host when this kind wins.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Rock     => "Rock",
            Kind::Paper    => "Paper",
            Kind::Scissors => "Scissors",
        }
    }

    /// Game-over banner text.
    pub fn winner_message(self) -> String {
        format!("The winner is {}!", self.as_str())
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
