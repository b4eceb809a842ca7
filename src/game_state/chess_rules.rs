use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind};

/// Back-rank piece order, queenside to kingside.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece kinds a pawn may promote to.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Conventional material value used for the captured-piece display.
#[inline]
pub const fn piece_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Standard starting position: black on rows 0-1, white on rows 6-7.
pub fn starting_board() -> BoardGrid {
    let mut board: BoardGrid = [[None; 8]; 8];

    for (col, &kind) in BACK_RANK_LAYOUT.iter().enumerate() {
        board[0][col] = Some(Piece::new(kind, Color::Black));
        board[7][col] = Some(Piece::new(kind, Color::White));
    }
    for col in 0..8 {
        board[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        board[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
    }

    board
}
