//! Pick order for the snake draft
//!
//! The cursor walks team indices forward, turns at the last team and walks
//! back, turning again at the first. What happens at each turn depends on
//! the order:
//!
//! - `BoundaryReset`: on running past the end the cursor jumps to `k-2`, on
//!   running past the start it jumps to `1`. End teams are not picked twice
//!   in a row: `0, 1, .., k-1, k-2, .., 1, 0, 1, ..`.
//! - `Mirrored`: the end teams pick twice in a row:
//!   `0, 1, .., k-1, k-1, .., 1, 0, 0, 1, ..`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftOrder {
    #[default]
    BoundaryReset,
    Mirrored,
}

impl DraftOrder {
    /// Iterator over the team index for each successive pick
    pub fn cursor(self, team_count: usize) -> DraftCursor {
        DraftCursor {
            order: self,
            team_count: team_count as isize,
            index: 0,
            direction: 1,
        }
    }
}

impl std::fmt::Display for DraftOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftOrder::BoundaryReset => write!(f, "boundary_reset"),
            DraftOrder::Mirrored => write!(f, "mirrored"),
        }
    }
}

impl std::str::FromStr for DraftOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "boundary_reset" => Ok(DraftOrder::BoundaryReset),
            "mirrored" => Ok(DraftOrder::Mirrored),
            other => Err(format!("unknown draft order: {}", other)),
        }
    }
}

/// Endless sequence of team indices in draft order
#[derive(Debug, Clone)]
pub struct DraftCursor {
    order: DraftOrder,
    team_count: isize,
    index: isize,
    direction: isize,
}

impl Iterator for DraftCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.team_count <= 0 {
            return None;
        }
        if self.team_count == 1 {
            return Some(0);
        }

        let current = self.index as usize;

        self.index += self.direction;
        if self.index >= self.team_count {
            self.index = match self.order {
                DraftOrder::BoundaryReset => self.team_count - 2,
                DraftOrder::Mirrored => self.team_count - 1,
            };
            self.direction = -1;
        } else if self.index < 0 {
            self.index = match self.order {
                DraftOrder::BoundaryReset => 1,
                DraftOrder::Mirrored => 0,
            };
            self.direction = 1;
        }

        Some(current)
    }
}
