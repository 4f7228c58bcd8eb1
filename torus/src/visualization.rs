use crate::{Board, Occupant, Token, BOARD_SIZE};

/// How an empty cell is rendered.
pub const EMPTY_CELL: &str = "#";

/// Token numbers separated by single spaces, in iteration order.
pub fn token_listing(tokens: impl IntoIterator<Item = Token>) -> String {
    let ids: Vec<String> = tokens.into_iter().map(|token| token.to_string()).collect();
    ids.join(" ")
}

/// Renders a row or column as the token numbers, `#` for empty cells,
/// separated by single spaces.
///
/// ```
/// # use torus::{line_to_text, Occupant, Player, Token};
/// let occupant = Occupant { token: Token::new(12), player: Player::Two };
/// assert_eq!(line_to_text(&[None, Some(occupant), None]), "# 12 #");
/// ```
pub fn line_to_text(line: &[Option<Occupant>]) -> String {
    let cells: Vec<String> = line
        .iter()
        .map(|cell| match cell {
            Some(occupant) => occupant.token.to_string(),
            None => String::from(EMPTY_CELL),
        })
        .collect();
    cells.join(" ")
}

/// Draws the whole board with row and column numbers.
pub fn visualize_board(board: &Board) -> String {
    let inner_width = 3 * BOARD_SIZE + 1;
    let mut result = String::from("     ");
    for col in 0..BOARD_SIZE {
        result += &format!("{:>3}", col);
    }
    result += &format!("\n    ╭{}╮", "─".repeat(inner_width));
    for row in 0..BOARD_SIZE {
        result += &format!("\n{:>3} │", row);
        for col in 0..BOARD_SIZE {
            let cell = match board.get(row * BOARD_SIZE + col) {
                Some(occupant) => occupant.token.to_string(),
                None => String::from(EMPTY_CELL),
            };
            result += &format!("{:>3}", cell);
        }
        result += " │";
    }
    result += &format!("\n    ╰{}╯\n    {}", "─".repeat(inner_width), board.board_type());
    result
}
