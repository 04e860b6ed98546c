use crate::actor::{Actor, ActorId, ActorKind, PACMAN_LIVES};
use crate::grid::{Coordinate, Direction, Grid};

/// A parsed maze: the bordered grid plus every actor living on it.
///
/// Cells and actors reference each other through the grid's occupant table
/// and `Actor::cell`; every placement goes through `place`/`lift` so the two
/// sides stay consistent.
pub struct Maze {
    grid: Grid,
    actors: Vec<Actor>,
    pacman: Option<ActorId>,
    target: Option<ActorId>,
    ghosts: Vec<ActorId>,
    keys: Vec<ActorId>,
    boosts: Vec<ActorId>,
    collected_keys: Vec<ActorId>,
    collected_boosts: Vec<ActorId>,
    /// Starting cell of every actor, in placement order
    initial_layout: Vec<(ActorId, Coordinate)>,
}

impl Maze {
    /// `rows` and `cols` include the border ring
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        Maze {
            grid: Grid::new(rows, cols),
            actors: Vec::new(),
            pacman: None,
            target: None,
            ghosts: Vec::new(),
            keys: Vec::new(),
            boosts: Vec::new(),
            collected_keys: Vec::new(),
            collected_boosts: Vec::new(),
            initial_layout: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Total row count, border included
    pub fn rows(&self) -> i32 {
        self.grid.rows
    }

    /// Total column count, border included
    pub fn cols(&self) -> i32 {
        self.grid.cols
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn pacman(&self) -> Option<ActorId> {
        self.pacman
    }

    pub fn target(&self) -> Option<ActorId> {
        self.target
    }

    pub fn ghosts(&self) -> &[ActorId] {
        &self.ghosts
    }

    pub fn keys(&self) -> &[ActorId] {
        &self.keys
    }

    pub fn boosts(&self) -> &[ActorId] {
        &self.boosts
    }

    pub fn collected_keys(&self) -> &[ActorId] {
        &self.collected_keys
    }

    pub fn collected_boosts(&self) -> &[ActorId] {
        &self.collected_boosts
    }

    pub fn actor_at(&self, pos: Coordinate) -> Option<ActorId> {
        self.grid.occupant(pos)
    }

    /// True once pacman has consumed the target
    pub fn target_reached(&self) -> bool {
        match self.target {
            Some(id) => self.actors[id.0].cell.is_none(),
            None => false,
        }
    }

    /// Starting cell recorded for `id` at parse time
    pub fn initial_cell(&self, id: ActorId) -> Option<Coordinate> {
        self.initial_layout
            .iter()
            .find(|(actor, _)| *actor == id)
            .map(|(_, pos)| *pos)
    }

    /// All actors in recording order: pacman, ghosts, keys, boosts, target
    pub fn roster(&self) -> Vec<ActorId> {
        let mut roster = Vec::new();
        if let Some(id) = self.pacman {
            roster.push(id);
        }
        roster.extend_from_slice(&self.ghosts);
        roster.extend_from_slice(&self.keys);
        roster.extend_from_slice(&self.boosts);
        if let Some(id) = self.target {
            roster.push(id);
        }
        roster
    }

    /// Look up an actor by its record address: type tag plus position in
    /// that type's list
    pub fn resolve(&self, kind: ActorKind, ordinal: usize) -> Option<ActorId> {
        match kind {
            ActorKind::Pacman => self.pacman.filter(|_| ordinal == 0),
            ActorKind::Target => self.target.filter(|_| ordinal == 0),
            ActorKind::Ghost => self.ghosts.get(ordinal).copied(),
            ActorKind::Key => self.keys.get(ordinal).copied(),
            ActorKind::Boost => self.boosts.get(ordinal).copied(),
        }
    }

    /// Position of `id` within its type's list (inverse of `resolve`)
    pub fn ordinal(&self, id: ActorId) -> usize {
        let list: &[ActorId] = match self.actors[id.0].kind {
            ActorKind::Pacman | ActorKind::Target => return 0,
            ActorKind::Ghost => &self.ghosts,
            ActorKind::Key => &self.keys,
            ActorKind::Boost => &self.boosts,
        };
        list.iter().position(|&a| a == id).unwrap_or(0)
    }

    /// Carve an empty path cell (parser use)
    pub(crate) fn carve_path(&mut self, pos: Coordinate) {
        self.grid.carve_path(pos);
    }

    /// Create an actor of `kind` on a fresh path cell at `pos` and record
    /// it in the initial layout. Singleton checks are the parser's job.
    pub(crate) fn spawn(&mut self, kind: ActorKind, pos: Coordinate) -> ActorId {
        self.grid.carve_path(pos);
        let id = ActorId(self.actors.len());
        self.actors.push(Actor::new(kind, pos));
        self.grid.set_occupant(pos, id);
        match kind {
            ActorKind::Pacman => self.pacman = Some(id),
            ActorKind::Target => self.target = Some(id),
            ActorKind::Ghost => self.ghosts.push(id),
            ActorKind::Key => self.keys.push(id),
            ActorKind::Boost => self.boosts.push(id),
        }
        self.initial_layout.push((id, pos));
        id
    }

    /// Stamp wall over the entire outer ring, overwriting whatever a short
    /// or malicious body left there
    pub(crate) fn add_border(&mut self) {
        for row in 0..self.grid.rows {
            self.grid.set_wall(Coordinate::new(row, 0));
            self.grid.set_wall(Coordinate::new(row, self.grid.cols - 1));
        }
        for col in 0..self.grid.cols {
            self.grid.set_wall(Coordinate::new(0, col));
            self.grid.set_wall(Coordinate::new(self.grid.rows - 1, col));
        }
    }

    /// Move an actor onto a path cell, vacating wherever it stood before.
    /// Last writer wins if the target is occupied; callers resolve
    /// occupant interactions before placing.
    pub fn place(&mut self, id: ActorId, pos: Coordinate) {
        if let Some(old) = self.actors[id.0].cell {
            self.grid.clear_occupant(old);
        }
        self.grid.set_occupant(pos, id);
        self.actors[id.0].cell = Some(pos);
    }

    /// Take an actor off the board entirely (pickups, replay snapshots)
    pub fn lift(&mut self, id: ActorId) {
        if let Some(old) = self.actors[id.0].cell {
            self.grid.clear_occupant(old);
            self.actors[id.0].cell = None;
        }
    }

    /// Whether a single step in `direction` lands on a path cell
    pub fn can_move(&self, id: ActorId, direction: Direction) -> bool {
        if !self.actors[id.0].kind.is_movable() {
            return false;
        }
        match self.actors[id.0].cell {
            Some(from) => !self.grid.is_wall(from.shifted(direction)),
            None => false,
        }
    }

    /// One live-play step. The actor turns to face `direction` even when
    /// the step is refused. Pacman picks up keys and boosts, consumes the
    /// target, and loses a life (with a position reset) on ghost contact.
    pub fn move_actor(&mut self, id: ActorId, direction: Direction) -> bool {
        let actor = &mut self.actors[id.0];
        if !actor.kind.is_movable() || actor.cell.is_none() {
            return false;
        }
        actor.direction = direction;
        if !self.can_move(id, direction) {
            return false;
        }
        let from = match self.actors[id.0].cell {
            Some(pos) => pos,
            None => return false,
        };
        let to = from.shifted(direction);
        let kind = self.actors[id.0].kind;
        let occupant = self.grid.occupant(to);
        match occupant {
            None => {
                self.place(id, to);
                true
            }
            Some(other) => match (kind, self.actors[other.0].kind) {
                (ActorKind::Pacman, ActorKind::Key) => {
                    self.lift(other);
                    self.collected_keys.push(other);
                    self.place(id, to);
                    true
                }
                (ActorKind::Pacman, ActorKind::Boost) => {
                    self.lift(other);
                    self.collected_boosts.push(other);
                    self.place(id, to);
                    true
                }
                (ActorKind::Pacman, ActorKind::Target) => {
                    self.lift(other);
                    self.place(id, to);
                    true
                }
                (ActorKind::Pacman, ActorKind::Ghost)
                | (ActorKind::Ghost, ActorKind::Pacman) => {
                    if let Some(pacman) = self.pacman {
                        self.actors[pacman.0].lives -= 1;
                    }
                    self.restore();
                    true
                }
                _ => false,
            },
        }
    }

    /// Put movable actors back on their starting cells (life-loss reset);
    /// collected items stay collected.
    pub fn restore(&mut self) {
        for i in 0..self.initial_layout.len() {
            let (id, _) = self.initial_layout[i];
            if self.actors[id.0].kind.is_movable() {
                self.lift(id);
            }
        }
        for i in 0..self.initial_layout.len() {
            let (id, start) = self.initial_layout[i];
            if self.actors[id.0].kind.is_movable() {
                self.place(id, start);
            }
        }
    }

    /// Rebuild the pristine parse-time state: every actor back on its
    /// starting cell, collections emptied, pacman's lives refilled
    pub fn restore_game(&mut self) {
        for i in 0..self.initial_layout.len() {
            let (id, _) = self.initial_layout[i];
            self.lift(id);
        }
        for i in 0..self.initial_layout.len() {
            let (id, start) = self.initial_layout[i];
            self.place(id, start);
        }
        self.collected_keys.clear();
        self.collected_boosts.clear();
        if let Some(pacman) = self.pacman {
            self.actors[pacman.0].lives = PACMAN_LIVES;
        }
    }
}
