//! 对局会话
//!
//! 本地权威状态机：Active → Finished。
//! 回合推进、停一手、终局判定都经由这里，走法应用委托给规则层。

use protocol::{
    Board, GameError, GameResult, MoveGenerator, Player, Position, TurnOutcome, Variant,
};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// 对局进行中
    Active,
    /// 对局结束
    Finished,
}

/// 一步走法应用后的回合推进结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 轮到对方
    Continued { next: Player },
    /// 对方无子可走被跳过，继续由落子方行棋
    Passed { skipped: Player, next: Player },
    /// 对局结束
    Finished { result: GameResult },
}

/// 本地对局会话
///
/// 唯一归属：同一时刻只有一个逻辑执行者驱动会话。
/// 搜索只在棋盘副本上进行，权威棋盘在两次提交之间始终自洽。
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    variant: Variant,
    status: SessionStatus,
    result: Option<GameResult>,
    move_history: Vec<(Player, Position)>,
}

impl GameSession {
    /// 开始新对局，黑方先行
    pub fn new(variant: Variant) -> Self {
        Self {
            board: Board::initial(variant),
            current_player: Player::Black,
            variant,
            status: SessionStatus::Active,
            result: None,
            move_history: Vec::new(),
        }
    }

    /// 从给定盘面恢复会话（加载存档或接管快照时用）
    pub fn from_board(board: Board, current_player: Player, variant: Variant) -> Self {
        Self {
            board,
            current_player,
            variant,
            status: SessionStatus::Active,
            result: None,
            move_history: Vec::new(),
        }
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 游戏变体
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 会话状态
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// 对局结果（未结束时为 None）
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// 走法历史
    pub fn move_history(&self) -> &[(Player, Position)] {
        &self.move_history
    }

    /// 双方棋子数 (黑, 白)
    pub fn count_pieces(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    /// 当前走子方的合法走法
    pub fn legal_moves(&self) -> Vec<Position> {
        MoveGenerator::legal_moves(&self.board, self.current_player, self.variant)
    }

    /// 提交一步走法
    ///
    /// 只接受当前走子方的提交；合法性与翻子委托给规则层。
    /// 成功后按对方的回合结果推进：有子可走换边，
    /// 无子可走跳过对方（落子方继续），双方都无则终局。
    pub fn submit_move(
        &mut self,
        player: Player,
        row: u8,
        col: u8,
    ) -> Result<MoveOutcome, GameError> {
        if self.status == SessionStatus::Finished {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }

        let pos = Position::new(row, col)?;
        MoveGenerator::apply_move(&mut self.board, pos, player, self.variant)?;
        self.move_history.push((player, pos));
        tracing::info!(player = %player, row, col, "落子");

        let opponent = player.opponent();
        let outcome = match MoveGenerator::turn_outcome(&self.board, opponent, self.variant) {
            TurnOutcome::HasMoves => {
                self.current_player = opponent;
                MoveOutcome::Continued { next: opponent }
            }
            TurnOutcome::MustPass => {
                tracing::info!(player = %opponent, "无子可走，停一手");
                self.current_player = player;
                MoveOutcome::Passed {
                    skipped: opponent,
                    next: player,
                }
            }
            TurnOutcome::GameOver(result) => {
                self.status = SessionStatus::Finished;
                self.result = Some(result);
                tracing::info!(?result, "对局结束");
                MoveOutcome::Finished { result }
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::Cell;

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Variant::Othello);

        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.current_player(), Player::Black);
        assert_eq!(session.count_pieces(), (2, 2));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_submit_move_switches_turn() {
        let mut session = GameSession::new(Variant::Othello);

        let outcome = session.submit_move(Player::Black, 2, 3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Continued {
                next: Player::White
            }
        );
        assert_eq!(session.current_player(), Player::White);
        assert_eq!(session.count_pieces(), (4, 1));
        assert_eq!(session.move_history(), &[(Player::Black, pos(2, 3))]);
    }

    #[test]
    fn test_wrong_side_is_rejected() {
        let mut session = GameSession::new(Variant::Othello);

        let err = session.submit_move(Player::White, 2, 4).unwrap_err();
        assert_eq!(err, GameError::NotYourTurn);
        // 会话状态不受影响
        assert_eq!(session.count_pieces(), (2, 2));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut session = GameSession::new(Variant::Othello);

        let err = session.submit_move(Player::Black, 8, 0).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { row: 8, col: 0 });
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut session = GameSession::new(Variant::Othello);

        let err = session.submit_move(Player::Black, 0, 0).unwrap_err();
        assert_eq!(err, GameError::IllegalMove { row: 0, col: 0 });
        assert_eq!(session.current_player(), Player::Black);
    }

    #[test]
    fn test_opponent_pass_keeps_mover() {
        // 黑走 (0,2) 翻掉 (0,1) 后：白只剩 (2,1) 一子且无处可走，
        // 黑仍可走 (2,2)，白被跳过
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(0, 1), Cell::White);
        board.set(pos(2, 0), Cell::Black);
        board.set(pos(2, 1), Cell::White);

        let mut session = GameSession::from_board(board, Player::Black, Variant::Othello);
        let outcome = session.submit_move(Player::Black, 0, 2).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Passed {
                skipped: Player::White,
                next: Player::Black,
            }
        );
        assert_eq!(session.current_player(), Player::Black);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_wipeout_finishes_game() {
        // 接上面的局面：黑走 (2,2) 吃掉白方最后一子，双方都无子可走
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(0, 1), Cell::Black);
        board.set(pos(0, 2), Cell::Black);
        board.set(pos(2, 0), Cell::Black);
        board.set(pos(2, 1), Cell::White);

        let mut session = GameSession::from_board(board, Player::Black, Variant::Othello);
        let outcome = session.submit_move(Player::Black, 2, 2).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Finished {
                result: GameResult::BlackWin
            }
        );
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.result(), Some(GameResult::BlackWin));

        // 终局后拒绝任何提交
        let err = session.submit_move(Player::Black, 4, 4).unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[test]
    fn test_reversi_setup_alternates() {
        let mut session = GameSession::new(Variant::Reversi);
        assert_eq!(session.count_pieces(), (0, 0));

        // 布子阶段双方交替摆中心格，无翻子
        session.submit_move(Player::Black, 3, 3).unwrap();
        assert_eq!(session.current_player(), Player::White);
        session.submit_move(Player::White, 3, 4).unwrap();
        session.submit_move(Player::Black, 4, 4).unwrap();
        session.submit_move(Player::White, 4, 3).unwrap();

        assert_eq!(session.count_pieces(), (2, 2));
        assert_eq!(session.status(), SessionStatus::Active);
        // 布子结束，黑方进入正常翻子阶段
        assert_eq!(session.current_player(), Player::Black);
        assert!(!session.legal_moves().is_empty());
    }
}
