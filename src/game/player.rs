use rand::Rng;

use super::board::Cell;

pub const DEFAULT_PLAYER1: &str = "Player 1";
pub const DEFAULT_PLAYER2: &str = "Player 2";

/// Player 1 plays black, player 2 plays red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    Red,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::Red => Cell::Red,
        }
    }

    /// Owner of a cell, `None` for an empty one
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Black => Some(Player::Black),
            Cell::Red => Some(Player::Red),
            Cell::Empty => None,
        }
    }

    /// Color name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::Red => "Red",
        }
    }

    /// Unbiased coin flip for who moves first.
    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Player {
        if rng.random_bool(0.5) {
            Player::Black
        } else {
            Player::Red
        }
    }
}

/// Display names for both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    player1: String,
    player2: String,
}

impl PlayerNames {
    /// Build from prompt answers. `None` means the prompt was cancelled; both
    /// cancelled and blank answers fall back to the default name.
    pub fn new(player1: Option<&str>, player2: Option<&str>) -> Self {
        PlayerNames {
            player1: name_or_default(player1, DEFAULT_PLAYER1),
            player2: name_or_default(player2, DEFAULT_PLAYER2),
        }
    }

    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::Black => &self.player1,
            Player::Red => &self.player2,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames::new(None, None)
    }
}

fn name_or_default(name: Option<&str>, default: &str) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::Red);
        assert_eq!(Player::Red.other(), Player::Black);
    }

    #[test]
    fn test_player_cell_roundtrip() {
        for player in [Player::Black, Player::Red] {
            assert_eq!(Player::from_cell(player.to_cell()), Some(player));
        }
        assert_eq!(Player::from_cell(Cell::Empty), None);
    }

    #[test]
    fn test_coin_flip_picks_both_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let flips: Vec<Player> = (0..64).map(|_| Player::coin_flip(&mut rng)).collect();
        assert!(flips.contains(&Player::Black));
        assert!(flips.contains(&Player::Red));
    }

    #[test]
    fn test_names_default_when_blank_or_cancelled() {
        let names = PlayerNames::new(Some("   "), None);
        assert_eq!(names.get(Player::Black), "Player 1");
        assert_eq!(names.get(Player::Red), "Player 2");
    }

    #[test]
    fn test_names_are_trimmed() {
        let names = PlayerNames::new(Some(" Ada "), Some("Grace"));
        assert_eq!(names.get(Player::Black), "Ada");
        assert_eq!(names.get(Player::Red), "Grace");
    }
}
