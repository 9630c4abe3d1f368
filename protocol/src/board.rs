//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::NUM_CELLS;
use crate::disc::{Cell, Player, Position, Variant};
use crate::error::ProtocolError;

/// 8x8 棋盘，行优先，索引为 row * 8 + col
///
/// 值对象：AI 模拟走法前必须先 clone，绝不在权威棋盘上试算。
/// 序列化形式即线上契约的 64 整数平铺数组。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 使用 Vec 以支持 serde
    cells: Vec<Cell>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::Empty; NUM_CELLS],
        }
    }

    /// 创建指定变体的初始棋盘
    ///
    /// Othello 预置中心 4 子；Reversi 从空盘开始，布子阶段交互摆放。
    pub fn initial(variant: Variant) -> Self {
        let mut board = Self::empty();

        if variant == Variant::Othello {
            board.set(Position::new_unchecked(3, 3), Cell::White);
            board.set(Position::new_unchecked(3, 4), Cell::Black);
            board.set(Position::new_unchecked(4, 3), Cell::Black);
            board.set(Position::new_unchecked(4, 4), Cell::White);
        }

        board
    }

    /// 获取指定位置的格子
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// 设置指定位置的格子
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// 统计双方棋子数，返回 (黑, 白)
    pub fn count_pieces(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// 棋盘上的棋子总数
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// 指定玩家的所有棋子位置（行优先）
    pub fn pieces(&self, player: Player) -> Vec<Position> {
        let target = player.cell();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == target)
            .filter_map(|(idx, _)| Position::from_index(idx))
            .collect()
    }

    /// 转换为线上契约的平铺形式
    pub fn to_flat(&self) -> [u8; NUM_CELLS] {
        let mut flat = [0u8; NUM_CELLS];
        for (idx, &cell) in self.cells.iter().enumerate() {
            flat[idx] = u8::from(cell);
        }
        flat
    }

    /// 从平铺形式解析，长度或取值非法时整体拒绝
    pub fn from_flat(flat: &[u8]) -> Result<Self, ProtocolError> {
        if flat.len() != NUM_CELLS {
            return Err(ProtocolError::BadBoardLength { len: flat.len() });
        }

        let cells = flat
            .iter()
            .map(|&value| Cell::try_from(value))
            .collect::<Result<Vec<Cell>, ProtocolError>>()?;

        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

// 线上形式是裸的 64 整数数组而非带字段名的结构体，序列化直接平铺
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.cells.serialize(serializer)
    }
}

// 反序列化需要校验长度，不能用 derive
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cells = Vec::<Cell>::deserialize(deserializer)?;
        if cells.len() != NUM_CELLS {
            return Err(serde::de::Error::invalid_length(
                cells.len(),
                &"a flat board of 64 cells",
            ));
        }
        Ok(Self { cells })
    }
}
