use crate::error::AgentError;
use std::fmt;
use std::str::FromStr;

/// Number of rows on a Connect Four board.
pub const ROWS: usize = 6;
/// Number of columns on a Connect Four board.
pub const COLUMNS: usize = 7;

const EMPTY_SYMBOL: char = ' ';
const PLAYER_ONE_SYMBOL: char = 'X';
const PLAYER_TWO_SYMBOL: char = 'O';

/// Row and column steps of the four line directions: vertical, horizontal and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The side that moves first.
    One,
    /// The side that moves second.
    Two,
}

impl Player {
    /// Returns the opposing side.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::One => PLAYER_ONE_SYMBOL,
            Player::Two => PLAYER_TWO_SYMBOL,
        }
    }
}

/// The state of a game as seen by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Nobody has won and there is still room to play.
    Ongoing,
    /// The player has four pieces in a line.
    Win,
    /// The board is full and the player has not won.
    Draw,
}

/// A 6x7 Connect Four grid.
///
/// Row 0 is the bottom row. Pieces always rest on the piece below them or on the bottom row,
/// which is kept true by only ever placing pieces through [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; COLUMNS]; ROWS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the piece at `row` (counted from the bottom) and `column`, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.cells.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    /// Returns `true` if a piece can still be dropped into `column`.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < COLUMNS && self.cells[ROWS - 1][column].is_none()
    }

    /// Returns every column that still has room, in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.is_valid_move(c)).collect()
    }

    /// Drops a piece of `player` into `column` and returns the row it landed in.
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, AgentError> {
        if !self.is_valid_move(column) {
            return Err(AgentError::InvalidMove { column });
        }

        let row = (0..ROWS)
            .find(|&r| self.cells[r][column].is_none())
            .ok_or(AgentError::InvalidMove { column })?;
        self.cells[row][column] = Some(player);
        Ok(row)
    }

    /// Returns a copy of the board with a piece of `player` dropped into `column`.
    pub fn with_move(&self, column: usize, player: Player) -> Result<Board, AgentError> {
        let mut board = *self;
        board.apply_move(column, player)?;
        Ok(board)
    }

    /// Returns `true` if `player` has four pieces in a row in any direction.
    pub fn connected_four(&self, player: Player) -> bool {
        windows().any(|window| {
            window
                .iter()
                .all(|&(row, column)| self.cells[row][column] == Some(player))
        })
    }

    /// Returns `true` if no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].iter().all(Option::is_some)
    }

    /// Returns `true` if either side has won or the board is full.
    pub fn is_finished(&self) -> bool {
        self.connected_four(Player::One) || self.connected_four(Player::Two) || self.is_full()
    }

    /// Classifies the board from the point of view of `player`.
    pub fn classify(&self, player: Player) -> GameState {
        if self.connected_four(player) {
            GameState::Win
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    /// Returns the column in which `after` holds a piece of `player` that this board does not.
    pub fn placed_column(&self, after: &Board, player: Player) -> Option<usize> {
        (0..COLUMNS).find(|&column| {
            (0..ROWS).any(|row| {
                after.cells[row][column] == Some(player) && self.cells[row][column] != Some(player)
            })
        })
    }
}

/// Every run of four consecutive cells on the board, direction by direction.
///
/// Yields the vertical runs first, then the horizontal ones, then the two diagonals.
pub(crate) fn windows() -> impl Iterator<Item = [(usize, usize); 4]> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| {
            (0..COLUMNS).filter_map(move |column| window_from(row, column, dr, dc))
        })
    })
}

fn window_from(row: usize, column: usize, dr: isize, dc: isize) -> Option<[(usize, usize); 4]> {
    let end_row = row as isize + 3 * dr;
    let end_column = column as isize + 3 * dc;
    if !(0..ROWS as isize).contains(&end_row) || !(0..COLUMNS as isize).contains(&end_column) {
        return None;
    }

    Some(std::array::from_fn(|i| {
        let step = i as isize;
        (
            (row as isize + step * dr) as usize,
            (column as isize + step * dc) as usize,
        )
    }))
}

impl fmt::Display for Board {
    /// Draws the board with the top row first, framed and followed by the column numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = format!("|{}|", "=".repeat(COLUMNS * 2));
        writeln!(f, "{frame}")?;
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for column in 0..COLUMNS {
                let symbol = self.cells[row][column].map_or(EMPTY_SYMBOL, Player::symbol);
                write!(f, "{symbol} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{frame}")?;
        write!(f, "|")?;
        for column in 0..COLUMNS {
            write!(f, "{column} ")?;
        }
        write!(f, "|")
    }
}

impl FromStr for Board {
    type Err = AgentError;

    /// Parses the output of the `Display` implementation back into a board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != ROWS + 3 {
            return Err(AgentError::ParseBoard(format!(
                "expected {} lines, found {}",
                ROWS + 3,
                lines.len()
            )));
        }

        let mut board = Board::new();
        for (index, line) in lines[1..=ROWS].iter().enumerate() {
            let row = ROWS - 1 - index;
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLUMNS * 2 + 2 || symbols[0] != '|' {
                return Err(AgentError::ParseBoard(format!("malformed row {line:?}")));
            }
            for column in 0..COLUMNS {
                board.cells[row][column] = match symbols[1 + column * 2] {
                    EMPTY_SYMBOL => None,
                    PLAYER_ONE_SYMBOL => Some(Player::One),
                    PLAYER_TWO_SYMBOL => Some(Player::Two),
                    other => {
                        return Err(AgentError::ParseBoard(format!("unknown symbol {other:?}")));
                    }
                };
            }
        }

        for column in 0..COLUMNS {
            let height = (0..ROWS)
                .take_while(|&row| board.cells[row][column].is_some())
                .count();
            if (height..ROWS).any(|row| board.cells[row][column].is_some()) {
                return Err(AgentError::ParseBoard(format!(
                    "floating piece in column {column}"
                )));
            }
        }

        Ok(board)
    }
}
