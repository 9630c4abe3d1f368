//! 搜索引擎
//!
//! 三档难度共用一个入口：Easy 均匀随机，Medium 位置权重贪心，
//! Hard 为固定深度的 Minimax + Alpha-Beta 剪枝。

use protocol::{Board, GameError, MoveGenerator, Player, Position, Variant};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;

// 重导出 Difficulty 以便外部使用
pub use protocol::Difficulty;

/// Hard 档的搜索深度（半着）
const HARD_SEARCH_DEPTH: u8 = 3;

/// AI 配置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 剩余搜索深度；Easy/Medium 不做树搜索
    pub search_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy | Difficulty::Medium => Self {
                difficulty,
                search_depth: 0,
            },
            Difficulty::Hard => Self {
                difficulty,
                search_depth: HARD_SEARCH_DEPTH,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 固定随机种子创建（测试用，结果可复现）
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            config: AiConfig::from_difficulty(difficulty),
            rng: ChaCha8Rng::seed_from_u64(seed),
            nodes_searched: 0,
        }
    }

    /// 为指定玩家选择走法
    ///
    /// 前置条件：该玩家必须有合法走法，否则返回 NoLegalMoves。
    /// 调用方（会话层）应先用 turn_outcome 检查。
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        variant: Variant,
    ) -> Result<Position, GameError> {
        self.nodes_searched = 0;

        let moves = MoveGenerator::legal_moves(board, player, variant);
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let chosen = match self.config.difficulty {
            Difficulty::Easy => moves.choose(&mut self.rng).copied().unwrap_or(moves[0]),
            Difficulty::Medium => Self::best_by_weight(&moves),
            Difficulty::Hard => self.search_root(board, &moves, player, variant)?,
        };

        tracing::debug!(
            player = %player,
            row = chosen.row,
            col = chosen.col,
            nodes = self.nodes_searched,
            "AI 选定走法"
        );

        Ok(chosen)
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Medium：取落点权重最高的走法，同分取生成序靠前者
    fn best_by_weight(moves: &[Position]) -> Position {
        let mut best = moves[0];
        let mut best_score = i32::MIN;
        for &mv in moves {
            let score = Evaluator::position_weight(mv);
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }
        best
    }

    /// Hard：逐一模拟根走法，再对剩余深度做 Alpha-Beta 搜索
    fn search_root(
        &mut self,
        board: &Board,
        moves: &[Position],
        player: Player,
        variant: Variant,
    ) -> Result<Position, GameError> {
        let mut best = moves[0];
        let mut best_value = i32::MIN;

        for &mv in moves {
            let next = MoveGenerator::simulate_move(board, mv, player, variant)?;
            let value = self.minimax(
                &next,
                self.config.search_depth,
                i32::MIN,
                i32::MAX,
                player.opponent() == Player::White,
                variant,
            )?;
            // 评估值是白方视角，黑方调用时取反再比较
            let value = match player {
                Player::White => value,
                Player::Black => -value,
            };

            if value > best_value {
                best_value = value;
                best = mv;
            }
        }

        Ok(best)
    }

    /// Minimax + Alpha-Beta
    ///
    /// 白方为最大化一方。被迫停一手时在同一盘面上减一层深度换边继续；
    /// 双方都无走法则该节点为终局，直接返回静态评估。
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        variant: Variant,
    ) -> Result<i32, GameError> {
        self.nodes_searched += 1;

        if depth == 0 {
            return Ok(Evaluator::evaluate(board));
        }

        let side = if maximizing {
            Player::White
        } else {
            Player::Black
        };
        let moves = MoveGenerator::legal_moves(board, side, variant);

        if moves.is_empty() {
            if MoveGenerator::legal_moves(board, side.opponent(), variant).is_empty() {
                return Ok(Evaluator::evaluate(board));
            }
            // 停一手同样消耗一层深度
            return self.minimax(board, depth - 1, alpha, beta, !maximizing, variant);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let next = MoveGenerator::simulate_move(board, mv, side, variant)?;
                let value = self.minimax(&next, depth - 1, alpha, beta, false, variant)?;
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            Ok(best)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let next = MoveGenerator::simulate_move(board, mv, side, variant)?;
                let value = self.minimax(&next, depth - 1, alpha, beta, true, variant)?;
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            Ok(best)
        }
    }
}
