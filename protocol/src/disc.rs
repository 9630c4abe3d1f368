//! 格子、玩家与坐标定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, NUM_CELLS};
use crate::error::{GameError, ProtocolError};

/// 格子状态，线上表示为整数：0=空 1=黑 2=白
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// 空格
    Empty,
    /// 黑子
    Black,
    /// 白子
    White,
}

impl Cell {
    /// 该格子上的棋子归属（空格返回 None）
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        match cell {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            _ => Err(ProtocolError::InvalidCellValue { value }),
        }
    }
}

/// 玩家阵营，线上表示为整数：1=黑 2=白
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// 黑方（先手）
    Black,
    /// 白方（后手，本地人机对战中为机器人）
    White,
}

impl Player {
    /// 获取对方阵营
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 该玩家的棋子对应的格子状态
    pub fn cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        match player {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            _ => Err(ProtocolError::InvalidPlayerValue { value }),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// 游戏变体
///
/// Othello：固定 4 子开局；Reversi：前 4 手交互摆中心，之后才用翻子规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Othello,
    Reversi,
}

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Position {
    /// 创建新坐标，越界返回 OutOfBounds
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的坐标，越界返回 None
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let new_row = self.row as i8 + dr;
        let new_col = self.col as i8 + dc;
        if new_row >= 0
            && (new_row as usize) < BOARD_SIZE
            && new_col >= 0
            && (new_col as usize) < BOARD_SIZE
        {
            Some(Position {
                row: new_row as u8,
                col: new_col as u8,
            })
        } else {
            None
        }
    }

    /// 转换为行优先数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从行优先数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_CELLS {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
