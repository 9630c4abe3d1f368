//! 走法生成和规则验证
//!
//! Othello 与 Reversi 共用翻子规则；Reversi 额外有布子阶段：
//! 盘面不足 4 子时只能在中心 2x2 摆子，且不翻子。

use crate::board::Board;
use crate::constants::{DIRECTIONS, NUM_CELLS, SETUP_PIECES};
use crate::disc::{Player, Position, Variant};
use crate::error::GameError;
use crate::message::GameResult;

/// Reversi 布子阶段的 4 个中心格（行优先）
pub const CENTER_CELLS: [Position; 4] = [
    Position::new_unchecked(3, 3),
    Position::new_unchecked(3, 4),
    Position::new_unchecked(4, 3),
    Position::new_unchecked(4, 4),
];

/// 对局阶段
///
/// 不变量：阶段永远由盘面棋子数实时推导，绝不缓存成字段，
/// 避免与棋盘状态脱节。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Reversi 布子阶段（盘面不足 4 子）
    Setup,
    /// 正常翻子阶段
    Normal,
}

/// 某一方在当前盘面下的回合结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// 有合法走法
    HasMoves,
    /// 无合法走法但对方有，必须停一手
    MustPass,
    /// 双方都无走法，对局结束
    GameOver(GameResult),
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 推导当前对局阶段（纯函数，每次查询重新计数）
    pub fn phase(board: &Board, variant: Variant) -> GamePhase {
        if variant == Variant::Reversi && board.piece_count() < SETUP_PIECES {
            GamePhase::Setup
        } else {
            GamePhase::Normal
        }
    }

    /// 检查落子是否合法
    pub fn is_legal_move(board: &Board, pos: Position, player: Player, variant: Variant) -> bool {
        if !board.get(pos).is_empty() {
            return false;
        }

        match Self::phase(board, variant) {
            // 布子阶段只看是否在中心 2x2，与落子方无关
            GamePhase::Setup => CENTER_CELLS.contains(&pos),
            GamePhase::Normal => Self::is_flipping_move(board, pos, player),
        }
    }

    /// 生成所有合法走法（行优先稳定顺序）
    pub fn legal_moves(board: &Board, player: Player, variant: Variant) -> Vec<Position> {
        if Self::phase(board, variant) == GamePhase::Setup {
            return CENTER_CELLS
                .iter()
                .copied()
                .filter(|&pos| board.get(pos).is_empty())
                .collect();
        }

        let mut moves = Vec::new();
        for index in 0..NUM_CELLS {
            let pos = match Position::from_index(index) {
                Some(pos) => pos,
                None => continue,
            };
            if board.get(pos).is_empty() && Self::is_flipping_move(board, pos, player) {
                moves.push(pos);
            }
        }
        moves
    }

    /// 原地应用走法
    ///
    /// 先验证合法性：非法落子返回 IllegalMove，绝不静默落子。
    /// 布子阶段（落子后盘面不超过 4 子）只摆子不翻子。
    pub fn apply_move(
        board: &mut Board,
        pos: Position,
        player: Player,
        variant: Variant,
    ) -> Result<(), GameError> {
        if !Self::is_legal_move(board, pos, player, variant) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }

        board.set(pos, player.cell());

        if variant == Variant::Reversi && board.piece_count() <= SETUP_PIECES {
            return Ok(());
        }

        // 各方向独立翻子，一步棋可能同时翻多个方向
        for &(dr, dc) in &DIRECTIONS {
            for flip in Self::ray_captures(board, pos, player, dr, dc) {
                board.set(flip, player.cell());
            }
        }

        Ok(())
    }

    /// 在棋盘副本上模拟走法，原棋盘不受影响
    pub fn simulate_move(
        board: &Board,
        pos: Position,
        player: Player,
        variant: Variant,
    ) -> Result<Board, GameError> {
        let mut copy = board.clone();
        Self::apply_move(&mut copy, pos, player, variant)?;
        Ok(copy)
    }

    /// 计算某一方的回合结果
    pub fn turn_outcome(board: &Board, player: Player, variant: Variant) -> TurnOutcome {
        if !Self::legal_moves(board, player, variant).is_empty() {
            return TurnOutcome::HasMoves;
        }

        if !Self::legal_moves(board, player.opponent(), variant).is_empty() {
            return TurnOutcome::MustPass;
        }

        let (black, white) = board.count_pieces();
        let result = if black > white {
            GameResult::BlackWin
        } else if white > black {
            GameResult::WhiteWin
        } else {
            GameResult::Draw
        };
        TurnOutcome::GameOver(result)
    }

    /// 正常阶段合法性：至少一个方向能翻到对方棋子
    fn is_flipping_move(board: &Board, pos: Position, player: Player) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !Self::ray_captures(board, pos, player, dr, dc).is_empty())
    }

    /// 沿单一方向收集可翻的对方棋子
    ///
    /// 射线从紧邻格开始，越过连续对方棋子后必须落在己方棋子上；
    /// 中途出界或遇到空格则一子不翻。
    fn ray_captures(
        board: &Board,
        from: Position,
        player: Player,
        dr: i8,
        dc: i8,
    ) -> Vec<Position> {
        let own = player.cell();
        let opponent = player.opponent().cell();

        let mut path = Vec::new();
        let mut cursor = from.offset(dr, dc);

        while let Some(pos) = cursor {
            let cell = board.get(pos);
            if cell == opponent {
                path.push(pos);
                cursor = pos.offset(dr, dc);
            } else if cell == own {
                return if path.is_empty() { Vec::new() } else { path };
            } else {
                return Vec::new();
            }
        }

        // 射线出界
        Vec::new()
    }
}
