//! 黑白棋共享协议库
//!
//! 包含:
//! - 格子、玩家、棋盘等核心数据结构
//! - 走法生成和规则验证（Othello / Reversi 双变体）
//! - 远程协调器的快照 / 指令消息定义
//! - 错误类型定义

mod board;
mod constants;
mod disc;
mod error;
mod message;
mod moves;

pub use board::Board;
pub use constants::*;
pub use disc::{Cell, Player, Position, Variant};
pub use error::{GameError, ProtocolError, Result};
pub use message::{
    Difficulty, GameResult, GameSnapshot, JoinReply, MoveCommand, RoomStatus,
};
pub use moves::{GamePhase, MoveGenerator, TurnOutcome, CENTER_CELLS};
