//! 远程同步
//!
//! 联网对局中引擎侧不做任何权威变更：服务端快照整体覆盖本地镜像，
//! 本地只在上行指令前做合法性预检，落子结果等快照确认。

use protocol::{
    Board, GameError, GameSnapshot, JoinReply, MoveCommand, MoveGenerator, Player, Position,
    RoomStatus, Variant,
};

/// 联网对局的本地镜像
#[derive(Debug, Clone)]
pub struct RemoteGame {
    me: Player,
    variant: Variant,
    board: Board,
    current_player: Player,
    status: RoomStatus,
}

impl RemoteGame {
    /// 按加入应答创建镜像，空盘等待对手
    pub fn join(reply: &JoinReply) -> Self {
        Self {
            me: reply.player_id,
            variant: reply.mode,
            board: Board::empty(),
            current_player: Player::Black,
            status: RoomStatus::Waiting,
        }
    }

    /// 自己的阵营
    pub fn me(&self) -> Player {
        self.me
    }

    /// 游戏变体
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 镜像棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 房间状态
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// 应用服务端快照，整体覆盖本地状态
    ///
    /// 快照反序列化时已整体校验，这里不存在部分应用；
    /// 本地任何陈旧状态一律被覆盖。
    pub fn apply_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.board = snapshot.board.clone();
        self.current_player = snapshot.turn;
        self.variant = snapshot.mode;
        self.status = snapshot.status;
    }

    /// 是否轮到自己落子
    pub fn my_turn(&self) -> bool {
        self.status == RoomStatus::Active && self.current_player == self.me
    }

    /// 生成上行落子指令
    ///
    /// 只做本地预检（对局进行中、轮到自己、坐标与规则合法），
    /// 不在本地应用走法。
    pub fn request_move(&self, row: u8, col: u8) -> Result<MoveCommand, GameError> {
        match self.status {
            RoomStatus::Waiting => return Err(GameError::NotStarted),
            RoomStatus::Finished => return Err(GameError::GameOver),
            RoomStatus::Active => {}
        }
        if self.current_player != self.me {
            return Err(GameError::NotYourTurn);
        }

        let pos = Position::new(row, col)?;
        if !MoveGenerator::is_legal_move(&self.board, pos, self.me, self.variant) {
            return Err(GameError::IllegalMove { row, col });
        }

        Ok(MoveCommand::new(pos, self.me))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::Cell;

    fn join_as(player: Player, mode: Variant) -> RemoteGame {
        RemoteGame::join(&JoinReply {
            player_id: player,
            mode,
        })
    }

    fn active_snapshot() -> GameSnapshot {
        GameSnapshot {
            status: RoomStatus::Active,
            board: Board::initial(Variant::Othello),
            turn: Player::Black,
            mode: Variant::Othello,
        }
    }

    #[test]
    fn test_join_starts_waiting() {
        let game = join_as(Player::White, Variant::Othello);

        assert_eq!(game.status(), RoomStatus::Waiting);
        assert_eq!(game.board().piece_count(), 0);
        assert!(!game.my_turn());
    }

    #[test]
    fn test_cannot_move_before_start() {
        let game = join_as(Player::Black, Variant::Othello);
        let err = game.request_move(2, 3).unwrap_err();
        assert_eq!(err, GameError::NotStarted);
    }

    #[test]
    fn test_snapshot_overwrites_everything() {
        let mut game = join_as(Player::Black, Variant::Othello);
        game.apply_snapshot(&active_snapshot());

        assert_eq!(game.status(), RoomStatus::Active);
        assert_eq!(game.board().count_pieces(), (2, 2));
        assert!(game.my_turn());

        // 第二份快照完全取代第一份
        let mut board = Board::initial(Variant::Othello);
        MoveGenerator::apply_move(
            &mut board,
            Position::new_unchecked(2, 3),
            Player::Black,
            Variant::Othello,
        )
        .unwrap();
        let next = GameSnapshot {
            status: RoomStatus::Active,
            board: board.clone(),
            turn: Player::White,
            mode: Variant::Othello,
        };
        game.apply_snapshot(&next);

        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), Player::White);
        assert!(!game.my_turn());
    }

    #[test]
    fn test_snapshot_from_wire_json() {
        // 走完整的线上反序列化路径再喂给镜像
        let mut flat = vec![0u8; 64];
        flat[27] = 2;
        flat[28] = 1;
        flat[35] = 1;
        flat[36] = 2;
        let json = format!(
            "{{\"status\":\"active\",\"board\":{},\"turn\":1,\"mode\":\"othello\"}}",
            serde_json::to_string(&flat).unwrap()
        );
        let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();

        let mut game = join_as(Player::Black, Variant::Othello);
        game.apply_snapshot(&snapshot);

        assert_eq!(
            game.board().get(Position::new_unchecked(3, 4)),
            Cell::Black
        );
        assert!(game.my_turn());
    }

    #[test]
    fn test_request_move_emits_command_without_applying() {
        let mut game = join_as(Player::Black, Variant::Othello);
        game.apply_snapshot(&active_snapshot());

        let cmd = game.request_move(2, 3).unwrap();
        assert_eq!(cmd.row, 2);
        assert_eq!(cmd.column, 3);
        assert_eq!(cmd.player, Player::Black);

        // 本地镜像不变，等服务端快照确认
        assert_eq!(game.board().count_pieces(), (2, 2));
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_request_move_rejections() {
        let mut game = join_as(Player::White, Variant::Othello);
        game.apply_snapshot(&active_snapshot());

        // 轮到黑方，白方被拒
        assert_eq!(game.request_move(2, 3).unwrap_err(), GameError::NotYourTurn);

        let mut game = join_as(Player::Black, Variant::Othello);
        game.apply_snapshot(&active_snapshot());

        assert_eq!(
            game.request_move(8, 0).unwrap_err(),
            GameError::OutOfBounds { row: 8, col: 0 }
        );
        assert_eq!(
            game.request_move(0, 0).unwrap_err(),
            GameError::IllegalMove { row: 0, col: 0 }
        );

        // 终局快照之后一律拒绝
        let mut finished = active_snapshot();
        finished.status = RoomStatus::Finished;
        game.apply_snapshot(&finished);
        assert_eq!(game.request_move(2, 3).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_mode_synced_from_snapshot() {
        // 重入房间时以服务端的变体为准
        let mut game = join_as(Player::Black, Variant::Othello);
        let snapshot = GameSnapshot {
            status: RoomStatus::Active,
            board: Board::empty(),
            turn: Player::Black,
            mode: Variant::Reversi,
        };
        game.apply_snapshot(&snapshot);

        assert_eq!(game.variant(), Variant::Reversi);
        // 空盘 Reversi 处于布子阶段，中心格合法
        assert!(game.request_move(3, 3).is_ok());
    }
}
