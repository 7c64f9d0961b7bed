#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceTeam {
    Dark,
    Light,
}

impl PieceTeam {
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Rank direction pawns of this team advance in.
    pub const fn pawn_step(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => -1,
        }
    }

    /// Rank pawns of this team start on.
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => 6,
        }
    }

    /// Rank a pawn of this team promotes on.
    pub const fn promotion_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 7,
            PieceTeam::Dark => 0,
        }
    }

    /// Back rank holding this team's king and rooks at game start.
    pub const fn home_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }
}
