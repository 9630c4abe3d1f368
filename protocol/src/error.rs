//! 错误类型定义

use thiserror::Error;

/// 规则与对局错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 坐标超出棋盘
    #[error("Position out of bounds: ({row}, {col})")]
    OutOfBounds { row: u8, col: u8 },

    /// 非法落子（目标被占用或不在合法走法集内）
    #[error("Illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 没有合法走法（调用方应先检查回合结果）
    #[error("No legal moves available")]
    NoLegalMoves,

    /// 对局尚未开始
    #[error("Game has not started")]
    NotStarted,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 非法格子值（0=空 1=黑 2=白）
    #[error("Invalid cell value: {value}")]
    InvalidCellValue { value: u8 },

    /// 非法玩家值（1=黑 2=白）
    #[error("Invalid player value: {value}")]
    InvalidPlayerValue { value: u8 },

    /// 棋盘长度错误（应为 64）
    #[error("Bad board length: {len} (expected 64)")]
    BadBoardLength { len: usize },

    /// 规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
