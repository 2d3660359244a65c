use std::collections::VecDeque;

use crate::*;

/// Outcome of a reveal action. Publication happens exactly when
/// `has_update()` holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Owns the game state and runs the whole action loop: board generation,
/// reveal and flag handling, flood fill, terminal evaluation, and snapshot
/// publication. An explicit, independently constructible value; whatever
/// composes the application owns it and serializes access to it.
pub struct GameEngine {
    state: GameState,
    generator: Box<dyn BoardGenerator>,
    timer: Box<dyn TickTimer>,
    publisher: StatePublisher,
}

impl GameEngine {
    /// Engine with a clock-seeded random generator and no real timer.
    pub fn new() -> Self {
        Self::with_parts(Box::new(RandomBoardGenerator::new()), Box::new(NullTimer))
    }

    pub fn with_parts(generator: Box<dyn BoardGenerator>, timer: Box<dyn TickTimer>) -> Self {
        let state = GameState::placeholder();
        let publisher = StatePublisher::new(state.clone());
        Self {
            state,
            generator,
            timer,
            publisher,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Read-only deep copy of the current state.
    pub fn current_snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Registers an observer; it immediately receives the latest snapshot.
    pub fn attach_observer(&mut self, observer: Observer) -> ObserverId {
        self.publisher.attach(observer)
    }

    pub fn detach_observer(&mut self, id: ObserverId) -> bool {
        self.publisher.detach(id)
    }

    /// Starts a fresh game, abandoning any game in progress without
    /// confirmation. An invalid config fails before anything is touched:
    /// prior state, observers, and a running timer all survive.
    pub fn start(&mut self, config: GameConfig) -> Result<GameState> {
        config.validate()?;

        self.timer.stop();

        let grid = self.generator.generate(config)?;
        self.state = GameState {
            status: GameStatus::Playing,
            rows: config.rows,
            columns: config.columns,
            total_mines: config.mines,
            flags_placed: 0,
            cells_revealed: 0,
            elapsed_seconds: 0,
            grid,
        };
        log::debug!(
            "started {}x{} game with {} mines",
            config.rows,
            config.columns,
            config.mines
        );

        self.publish();
        self.timer.start();
        Ok(self.current_snapshot())
    }

    /// Reveal action. Out-of-range coordinates, finished or unstarted games,
    /// and already-revealed cells are silent no-ops: nothing mutates and
    /// nothing is published.
    pub fn reveal(&mut self, row: Coord, column: Coord) {
        if self.apply_reveal(row, column).has_update() {
            self.publish();
        }
    }

    /// Flag toggle. Same no-op rules as `reveal`.
    pub fn toggle_flag(&mut self, row: Coord, column: Coord) {
        if self.apply_flag(row, column).has_update() {
            self.publish();
        }
    }

    /// Delivery point for the external timer. Ticks arriving outside an
    /// active game (including any that raced past a stop) are dropped.
    pub fn tick(&mut self, seconds: u32) {
        if !self.state.status.is_playing() {
            return;
        }
        self.state.elapsed_seconds = seconds;
        self.publish();
    }

    fn apply_reveal(&mut self, row: Coord, column: Coord) -> RevealOutcome {
        if !self.state.status.is_playing() || !self.state.in_bounds(row, column) {
            return RevealOutcome::NoChange;
        }

        let position = Position::new(row, column);
        let cell = self.state.grid[position.to_nd_index()];
        if cell.revealed {
            return RevealOutcome::NoChange;
        }

        if cell.mine {
            log::debug!("mine hit at {:?}", position);
            self.end_game(false);
            RevealOutcome::HitMine
        } else {
            self.flood_reveal(position);
            if self.state.cells_revealed == self.state.safe_cell_count() {
                self.end_game(true);
                RevealOutcome::Won
            } else {
                RevealOutcome::Revealed
            }
        }
    }

    fn apply_flag(&mut self, row: Coord, column: Coord) -> FlagOutcome {
        if !self.state.status.is_playing() || !self.state.in_bounds(row, column) {
            return FlagOutcome::NoChange;
        }

        let cell = &mut self.state.grid[[row as usize, column as usize]];
        if cell.revealed {
            return FlagOutcome::NoChange;
        }

        if cell.flagged {
            cell.flagged = false;
            self.state.flags_placed -= 1;
        } else {
            cell.flagged = true;
            self.state.flags_placed += 1;
        }
        FlagOutcome::Changed
    }

    /// Reveals `start` and, through every zero-adjacency cell reachable from
    /// it, the whole connected zero region plus its numbered border. Cells
    /// are marked revealed before they are enqueued, so the revealed flag
    /// doubles as the visited set and no cell is processed twice.
    fn flood_reveal(&mut self, start: Position) {
        self.reveal_cell(start);

        let mut to_visit = VecDeque::from([start]);
        while let Some(position) = to_visit.pop_front() {
            if self.state.grid[position.to_nd_index()].adjacent_mines > 0 {
                // numbered cells form the reveal boundary
                continue;
            }

            for neighbor in self.state.grid.iter_neighbors(position) {
                if self.state.grid[neighbor.to_nd_index()].can_flood_reveal() {
                    self.reveal_cell(neighbor);
                    to_visit.push_back(neighbor);
                }
            }
        }
    }

    fn reveal_cell(&mut self, position: Position) {
        self.state.grid[position.to_nd_index()].revealed = true;
        self.state.cells_revealed += 1;
        log::trace!("revealed {:?}", position);
    }

    /// One-way transition to a terminal status. Stops the timer and, on a
    /// loss, reveals every mine on the board; non-mine cells keep whatever
    /// revealed state they had.
    fn end_game(&mut self, won: bool) {
        if self.state.status.is_terminal() {
            return;
        }

        self.timer.stop();
        self.state.status = if won {
            GameStatus::Victory
        } else {
            GameStatus::Loss
        };
        log::debug!("game over: {:?}", self.state.status);

        if !won {
            for cell in self.state.grid.iter_mut() {
                if cell.mine {
                    cell.revealed = true;
                }
            }
        }
    }

    fn publish(&mut self) {
        self.publisher.publish(&self.state);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
