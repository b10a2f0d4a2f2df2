//! Game state module - manages the complete game state
//!
//! Ties together the board, the active piece, the RNG and the counters, and
//! exposes every transition as one method. Callers that share a `GameState`
//! between threads hold one lock around each call, so a transition is never
//! observed half-done.
//!
//! Placement state machine:
//!
//! ```text
//! falling --place--> loss?  --yes--> reset + spawn --> falling
//!                      |
//!                      no --> stamp, mark rows --none--> spawn --> falling
//!                                      |
//!                                      some --> clearing (no active piece)
//! clearing --next gravity tick--> compact, score, spawn --> falling
//! ```

use log::{debug, trace};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::SimpleRng;
use crate::scoring::{
    advance_speed_tier, frames_per_row, frames_to_ms, level_for_lines, line_clear_score,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Falling piece; empty only while flagged rows wait to be compacted
    active: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    speed_tier: usize,
    /// One-shot soft drop request, consumed by the scheduler on the next tick
    fast: bool,
    redraw: bool,
    paused: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            level: 0,
            speed_tier: 0,
            fast: false,
            redraw: false,
            paused: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn speed_tier(&self) -> usize {
        self.speed_tier
    }

    pub fn fast(&self) -> bool {
        self.fast
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    ///
    /// The active piece is stamped into the board; edits under it are
    /// overwritten by the next transition.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Swap the active piece for `piece`, erasing the old one from the board
    pub fn replace_active(&mut self, piece: Piece) {
        if let Some(old) = self.active.take() {
            self.board.clear_piece_cells(&old);
        }
        self.board.stamp_piece_cells(&piece);
        self.active = Some(piece);
        self.started = true;
        self.redraw = true;
    }

    /// Spawn a new random piece above the board
    pub fn spawn_piece(&mut self) {
        let piece = Piece::spawn(&mut self.rng);
        debug!("spawn {:?} at x={} y={}", piece.kind, piece.x, piece.y);
        self.board.stamp_piece_cells(&piece);
        self.active = Some(piece);
        self.redraw = true;
    }

    /// Whether any occupied cell of `piece` would be blocked on the board
    fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| self.board.is_blocked(x, y))
    }

    /// Erase the active piece, try `candidate`, and stamp whichever survives
    fn try_replace(&mut self, candidate: impl Fn(&Piece) -> Piece) -> bool {
        if self.paused {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        self.board.clear_piece_cells(&piece);
        let next = candidate(&piece);
        let ok = !self.collides(&next);
        let kept = if ok { next } else { piece };
        self.board.stamp_piece_cells(&kept);
        self.active = Some(kept);

        if ok {
            self.redraw = true;
        }
        ok
    }

    /// Shift the active piece one column
    ///
    /// A shift that would leave the board or overlap a filled cell is rejected
    /// and leaves everything unchanged.
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        let dx = direction.dx();
        self.try_replace(|p| p.shifted(dx, 0))
    }

    /// Turn the active piece 90° clockwise around its anchor
    ///
    /// No wall kicks: if the turned shape collides at the current anchor the
    /// rotation is rejected.
    pub fn rotate(&mut self) -> bool {
        self.try_replace(Piece::rotated)
    }

    /// Advance the active piece one row, placing it if it cannot move
    pub fn soft_drop_tick(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        self.board.clear_piece_cells(&piece);
        let down = piece.shifted(0, 1);
        if self.collides(&down) {
            self.place(piece);
        } else {
            self.board.stamp_piece_cells(&down);
            self.active = Some(down);
            self.redraw = true;
        }
    }

    /// Drop the active piece to its lowest legal row and place it
    pub fn hard_drop(&mut self) -> bool {
        if self.paused {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        self.board.clear_piece_cells(&piece);
        while !self.collides(&piece.shifted(0, 1)) {
            piece = piece.shifted(0, 1);
        }
        self.place(piece);
        true
    }

    /// Whether settling `piece` here ends the game
    ///
    /// True when any occupied cell is still above the board while the top
    /// cell of its column is already filled.
    pub fn check_loss(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .any(|(x, y)| y < 0 && self.board.is_occupied(x, 0))
    }

    /// Settle `piece` (already erased from the board)
    ///
    /// On loss the whole game restarts silently. Otherwise the piece is
    /// stamped for good and full rows are flagged; the next piece spawns now,
    /// or after the flagged rows are compacted.
    pub fn place(&mut self, piece: Piece) {
        self.active = None;

        if self.check_loss(&piece) {
            debug!(
                "loss at score={} lines={} level={}",
                self.score, self.lines, self.level
            );
            self.reset();
            self.spawn_piece();
        } else {
            self.board.stamp_piece_cells(&piece);
            if self.board.mark_full_rows() {
                debug!("rows flagged for clearing");
            } else {
                self.spawn_piece();
            }
        }

        self.redraw = true;
    }

    /// Compact flagged rows, score them and spawn the next piece
    ///
    /// Returns the number of rows removed (0 when nothing was pending).
    pub fn resolve_pending_clears(&mut self) -> usize {
        if !self.board.has_pending_rows() {
            return 0;
        }

        let cleared = self.board.compact_pending_rows();
        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = level_for_lines(self.lines);
        self.speed_tier = advance_speed_tier(self.speed_tier, self.level);
        debug!(
            "cleared {} rows (+{}), lines={} level={} tier={}",
            cleared, points, self.lines, self.level, self.speed_tier
        );

        if self.active.is_none() {
            self.spawn_piece();
        }
        self.redraw = true;
        cleared
    }

    /// One gravity step: finish any pending clear, then drop one row
    pub fn tick(&mut self) -> bool {
        if self.paused || !self.started {
            return false;
        }
        trace!("gravity tick");
        self.resolve_pending_clears();
        self.soft_drop_tick();
        true
    }

    /// Current gravity interval in milliseconds
    ///
    /// Flagged rows force the slow flash interval; a soft drop request forces
    /// the fastest one; otherwise the speed tier decides.
    pub fn gravity_interval_ms(&self) -> u64 {
        let frames = if self.board.has_pending_rows() {
            CLEAR_FLASH_FRAMES
        } else if self.fast {
            FAST_DROP_FRAMES
        } else {
            frames_per_row(self.speed_tier)
        };
        frames_to_ms(frames)
    }

    /// Ask for the next gravity step to come as soon as possible
    pub fn request_fast(&mut self) {
        self.fast = true;
    }

    /// Consume the soft drop request
    pub fn take_fast(&mut self) -> bool {
        std::mem::replace(&mut self.fast, false)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.redraw = true;
    }

    /// Consume the redraw flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    /// Fresh board, zeroed counters, first speed tier
    ///
    /// The RNG keeps running so the next game differs from the last.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.speed_tier = 0;
        self.fast = false;
        self.paused = false;
        self.redraw = true;
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything. `Quit` is a session
    /// concern and is never applied here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Quit => false,
            _ if self.paused => false,
            GameAction::MoveLeft => self.move_horizontal(Direction::Left),
            GameAction::MoveRight => self.move_horizontal(Direction::Right),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                self.request_fast();
                true
            }
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.pending = self.board.pending_rows();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_rotations;

    fn fill_row_except(state: &mut GameState, y: i8, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                state.board_mut().set(x, y, 1);
            }
        }
    }

    /// O piece occupying columns `x+1..=x+2`, rows `y+1..=y+2`
    fn o_piece(x: i8, y: i8) -> Piece {
        Piece::new(PieceKind::O, 0, x, y)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.speed_tier, 0);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        state.start();
        assert!(state.started);
        assert!(state.active.is_some());
        assert!(state.needs_redraw());
        // Spawned piece is invisible until it drops in.
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = GameState::new(5);
        state.start();
        let first = state.active;
        state.start();
        assert_eq!(state.active, first);
    }

    #[test]
    fn test_move_commits_and_restamps() {
        let mut state = GameState::new(1);
        state.replace_active(o_piece(3, 10));

        assert!(state.move_horizontal(Direction::Right));
        let active = state.active.unwrap();
        assert_eq!(active.x, 4);
        assert_eq!(state.board.get(4, 11), Some(EMPTY));
        assert_eq!(state.board.get(6, 11), Some(PieceKind::O.color()));
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut state = GameState::new(1);
        // O occupies columns 0..=1
        state.replace_active(o_piece(-1, 10));
        let before = state.board.clone();

        assert!(!state.move_horizontal(Direction::Left));
        assert_eq!(state.active.unwrap().x, -1);
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_move_into_stack_is_noop() {
        let mut state = GameState::new(1);
        state.board_mut().set(5, 11, 4);
        state.replace_active(o_piece(2, 10));
        let before = state.board.clone();

        assert!(!state.move_horizontal(Direction::Right));
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_move_above_board_checks_columns_only() {
        let mut state = GameState::new(1);
        state.board_mut().set(4, 0, 1);
        state.replace_active(o_piece(1, -4));
        assert!(state.move_horizontal(Direction::Right));
        assert_eq!(state.active.unwrap().x, 2);
    }

    #[test]
    fn test_rotate_commits() {
        let mut state = GameState::new(1);
        state.replace_active(Piece::new(PieceKind::T, 0, 3, 5));

        assert!(state.rotate());
        let active = state.active.unwrap();
        assert_eq!(active.shape, shape_rotations(PieceKind::T)[1]);
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_rotate_blocked_by_wall() {
        let mut state = GameState::new(1);
        // Vertical I on board column 9 (local column 2 at x=7). Turning back
        // to horizontal would need columns 7..=10.
        let piece = Piece::new(PieceKind::I, 1, 7, 5);
        state.replace_active(piece);
        let before = state.board.clone();

        assert!(!state.rotate());
        assert_eq!(state.active, Some(piece));
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_rotate_blocked_by_stack() {
        let mut state = GameState::new(1);
        let piece = Piece::new(PieceKind::I, 0, 3, 5);
        state.replace_active(piece);
        // Rotated I uses local column 2 => board column 5, rows 5..=8
        state.board_mut().set(5, 8, 2);
        let before = state.board.clone();

        assert!(!state.rotate());
        assert_eq!(state.active, Some(piece));
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_soft_drop_moves_down() {
        let mut state = GameState::new(1);
        state.replace_active(o_piece(3, 5));
        state.soft_drop_tick();
        assert_eq!(state.active.unwrap().y, 6);
        assert_eq!(state.board.get(4, 6), Some(EMPTY));
        assert_eq!(state.board.get(4, 8), Some(PieceKind::O.color()));
    }

    #[test]
    fn test_soft_drop_places_on_floor() {
        let mut state = GameState::new(7);
        // O bottom row at 19
        state.replace_active(o_piece(3, 17));
        state.soft_drop_tick();

        assert_eq!(state.board.get(4, 19), Some(PieceKind::O.color()));
        assert_eq!(state.board.get(5, 18), Some(PieceKind::O.color()));
        // A new piece was spawned above the board.
        let next = state.active.unwrap();
        assert!(next.cells().all(|(_, y)| y < 0));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_hard_drop_lands_on_stack() {
        let mut state = GameState::new(1);
        state.board_mut().set(4, 15, 3);
        state.replace_active(o_piece(3, 0));

        assert!(state.hard_drop());
        assert_eq!(state.board.get(4, 14), Some(PieceKind::O.color()));
        assert_eq!(state.board.get(5, 13), Some(PieceKind::O.color()));
        assert_eq!(state.board.filled_count(), 5);
    }

    #[test]
    fn test_place_flags_rows_and_defers_spawn() {
        let mut state = GameState::new(1);
        fill_row_except(&mut state, 19, Some(4));
        fill_row_except(&mut state, 18, Some(4));
        // Vertical I in column 4 covering rows 16..=19
        state.replace_active(Piece::new(PieceKind::I, 1, 2, 16));

        state.soft_drop_tick();

        assert!(state.active.is_none());
        assert!(state.board.is_pending(19));
        assert!(state.board.is_pending(18));
        assert_eq!(state.gravity_interval_ms(), 250);

        // Movement while clearing does nothing.
        assert!(!state.move_horizontal(Direction::Left));
        assert!(!state.rotate());
        assert!(!state.hard_drop());
    }

    #[test]
    fn test_tick_resolves_clear_then_drops() {
        let mut state = GameState::new(1);
        fill_row_except(&mut state, 19, Some(4));
        fill_row_except(&mut state, 18, Some(4));
        state.replace_active(Piece::new(PieceKind::I, 1, 2, 16));
        state.soft_drop_tick();

        assert!(state.tick());
        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 2);
        assert_eq!(state.level, 0);
        assert!(!state.board.has_pending_rows());
        // Remaining I cells (rows 16,17) fell two rows.
        assert_eq!(state.board.get(4, 19), Some(PieceKind::I.color()));
        assert_eq!(state.board.get(4, 18), Some(PieceKind::I.color()));
        assert!(state.active.is_some());
    }

    #[test]
    fn test_loss_resets_everything() {
        let mut state = GameState::new(3);
        state.score = 999;
        state.lines = 42;
        state.level = 4;
        state.speed_tier = 4;
        state.board_mut().set(4, 0, 1);
        state.board_mut().set(0, 10, 1);
        // O resting on row 0 from above: cells in rows -2..=-1, columns 4..=5
        let piece = o_piece(3, -3);

        assert!(state.check_loss(&piece));
        state.place(piece);

        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.speed_tier, 0);
        assert_eq!(state.board.filled_count(), 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_loss_needs_matching_column() {
        let mut state = GameState::new(3);
        state.board_mut().set(0, 0, 1);
        assert!(!state.check_loss(&o_piece(3, -3)));
    }

    #[test]
    fn test_gravity_interval_priorities() {
        let mut state = GameState::new(1);
        state.start();
        assert_eq!(state.gravity_interval_ms(), 800);

        state.request_fast();
        assert_eq!(state.gravity_interval_ms(), 16);
        assert!(state.take_fast());
        assert!(!state.fast());

        state.speed_tier = 14;
        assert_eq!(state.gravity_interval_ms(), 16);
        state.speed_tier = 8;
        assert_eq!(state.gravity_interval_ms(), 133);
    }

    #[test]
    fn test_pause_blocks_actions_and_gravity() {
        let mut state = GameState::new(1);
        state.replace_active(o_piece(3, 5));

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.tick());
        assert_eq!(state.active.unwrap().y, 5);

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.tick());
        assert_eq!(state.active.unwrap().y, 6);
    }

    #[test]
    fn test_apply_action_soft_drop_sets_fast() {
        let mut state = GameState::new(1);
        state.start();
        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(state.fast());
        assert!(!state.apply_action(GameAction::Quit));
    }

    #[test]
    fn test_take_redraw_consumes() {
        let mut state = GameState::new(1);
        state.start();
        assert!(state.take_redraw());
        assert!(!state.take_redraw());
    }

    #[test]
    fn test_snapshot_copies_counters_and_pending() {
        let mut state = GameState::new(1);
        fill_row_except(&mut state, 19, None);
        state.board_mut().mark_full_rows();
        state.score = 40;
        state.lines = 1;

        let snap = state.snapshot();
        assert!(snap.is_pending(19));
        assert_eq!(snap.board[19][0], 1);
        assert_eq!(snap.score, 40);
        assert_eq!(snap.lines, 1);
    }
}
