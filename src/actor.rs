use serde::Serialize;

use crate::grid::{Coordinate, Direction};

/// Lives pacman starts a game with
pub const PACMAN_LIVES: i32 = 3;

/// Stable handle into the maze's actor table, assigned in placement order
/// at parse time. Used as the identity key for timelines and histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ActorId(pub usize);

/// The five kinds of entity that can occupy a path cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActorKind {
    Pacman,
    Ghost,
    Key,
    Boost,
    Target,
}

impl ActorKind {
    /// Textual type tag used in record lines
    pub fn name(&self) -> &'static str {
        match self {
            ActorKind::Pacman => "PACMAN",
            ActorKind::Ghost => "GHOST",
            ActorKind::Key => "KEY",
            ActorKind::Boost => "BOOST",
            ActorKind::Target => "TARGET",
        }
    }

    /// Inverse of `name`; None for an unknown tag
    pub fn from_name(name: &str) -> Option<ActorKind> {
        match name {
            "PACMAN" => Some(ActorKind::Pacman),
            "GHOST" => Some(ActorKind::Ghost),
            "KEY" => Some(ActorKind::Key),
            "BOOST" => Some(ActorKind::Boost),
            "TARGET" => Some(ActorKind::Target),
            _ => None,
        }
    }

    /// Pacman and ghosts walk; keys, boosts and targets stay put
    pub fn is_movable(&self) -> bool {
        matches!(self, ActorKind::Pacman | ActorKind::Ghost)
    }
}

/// A maze inhabitant: its kind, remaining lives, facing and current cell
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorKind,
    pub lives: i32,
    pub direction: Direction,
    /// None once the actor has been consumed or taken off the board
    pub cell: Option<Coordinate>,
}

impl Actor {
    pub fn new(kind: ActorKind, cell: Coordinate) -> Self {
        Actor {
            kind,
            lives: if kind == ActorKind::Pacman { PACMAN_LIVES } else { 0 },
            direction: Direction::Left,
            cell: Some(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_round_trip() {
        let kinds = [
            ActorKind::Pacman,
            ActorKind::Ghost,
            ActorKind::Key,
            ActorKind::Boost,
            ActorKind::Target,
        ];
        for kind in kinds {
            assert_eq!(ActorKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_kind_name() {
        assert_eq!(ActorKind::from_name("WALL"), None);
        assert_eq!(ActorKind::from_name("pacman"), None);
        assert_eq!(ActorKind::from_name(""), None);
    }

    #[test]
    fn test_new_actor_defaults() {
        let pacman = Actor::new(ActorKind::Pacman, Coordinate::new(1, 1));
        assert_eq!(pacman.lives, PACMAN_LIVES);
        assert_eq!(pacman.cell, Some(Coordinate::new(1, 1)));

        let key = Actor::new(ActorKind::Key, Coordinate::new(2, 2));
        assert_eq!(key.lives, 0);
        assert!(!key.kind.is_movable());
    }
}
