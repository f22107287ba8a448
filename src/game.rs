use crate::chess::board::Board;
use crate::chess::config::RuleOptions;
use crate::chess::piece::{Color, Piece};
use crate::core::square::Square;
use crate::error::{ChessError, Result};
use crate::record::MoveRecord;
use crate::rules::checkmate::{status, GameStatus};
use crate::rules::legal::{apply, destinations};
use crate::rules::movegen::Destinations;

/// Where the selection state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    /// A piece of the side to move is held on this square.
    AwaitingDestination(Square),
}

/// What a click did, so a host knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored,
    Selected(Square),
    /// The held piece was dropped without moving.
    Deselected,
    Moved(MoveRecord),
}

/// A single game: board, side to move, click selection and move history.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    selection: Option<Square>,
    rules: RuleOptions,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Standard start, White to move, core rules.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White, RuleOptions::default())
    }

    pub fn from_board(board: Board, turn: Color, rules: RuleOptions) -> Self {
        log::debug!("new game: {turn} to move, rules: {}", rules.summary());
        Self {
            board,
            turn,
            selection: None,
            rules,
            history: Vec::new(),
        }
    }

    /// Swaps the rule set; any held selection is dropped.
    pub fn with_rules(mut self, rules: RuleOptions) -> Self {
        self.rules = rules;
        self.selection = None;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> &RuleOptions {
        &self.rules
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        match self.selection {
            Some(sq) => Phase::AwaitingDestination(sq),
            None => Phase::AwaitingSelection,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Destinations of the piece on `sq`, for highlighting. Empty for an empty square.
    pub fn legal_destinations(&self, sq: Square) -> Destinations {
        destinations(&self.board, sq, &self.rules, self.last_move())
    }

    pub fn status(&self) -> GameStatus {
        status(&self.board, self.turn, &self.rules, self.last_move())
    }

    /// Click on a square given as raw host coordinates; off-board clicks are ignored.
    pub fn select(&mut self, rank: i32, file: i32) -> SelectOutcome {
        match Square::from_coords(rank, file) {
            Ok(sq) => self.select_square(sq),
            Err(e) => {
                log::trace!("click ignored: {e}");
                SelectOutcome::Ignored
            }
        }
    }

    /// Click on a square.
    ///
    /// With nothing held, a piece of the side to move is picked up; anything else is
    /// ignored. With a piece held, a destination click plays the move and passes the turn;
    /// any other click drops the piece, even one on another own piece.
    pub fn select_square(&mut self, sq: Square) -> SelectOutcome {
        if self.rules.king_safety && self.status().is_over() {
            log::trace!("click on {sq} ignored: game over");
            return SelectOutcome::Ignored;
        }

        let held = self.selection.take().filter(|&from| {
            self.board
                .piece_at(from)
                .is_some_and(|p| p.color == self.turn)
        });
        let Some(from) = held else {
            return match self.board.piece_at(sq) {
                Some(p) if p.color == self.turn => {
                    log::trace!("selected {:?} on {sq}", p.kind);
                    self.selection = Some(sq);
                    SelectOutcome::Selected(sq)
                }
                _ => SelectOutcome::Ignored,
            };
        };

        match self.try_move(from, sq) {
            Ok(record) => SelectOutcome::Moved(record),
            Err(e) => {
                log::trace!("deselected {from}: {e}");
                SelectOutcome::Deselected
            }
        }
    }

    /// Plays `from -> to` directly. A successful move drops any click selection.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveRecord> {
        if self.rules.king_safety && self.status().is_over() {
            return Err(ChessError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessError::EmptySource(from))?;
        if piece.color != self.turn {
            return Err(ChessError::NotYourTurn(from));
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        self.play(from, to)
    }

    fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord> {
        let record = apply(&mut self.board, from, to, &self.rules, self.history.last())?;
        log::debug!("{}: {record}", record.color);
        if let Some(kind) = record.captured {
            log::debug!("captured {:?} on {to}", kind);
        }
        self.history.push(record);
        self.selection = None;
        self.turn = self.turn.opponent();
        Ok(record)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
