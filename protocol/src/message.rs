//! 消息类型定义
//!
//! 远程协调器契约：服务端通过 `/state` 轮询下发 [`GameSnapshot`]，
//! 客户端通过 `/move` 上行 [`MoveCommand`]，`/join` 应答 [`JoinReply`]。
//! 棋盘在线上始终是 64 整数的行优先平铺数组。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::disc::{Player, Position, Variant};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：合法走法中均匀随机
    Easy,
    /// 中等：位置权重贪心
    Medium,
    /// 困难：深度 3 的 Alpha-Beta 搜索
    Hard,
}

/// 房间状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// 等待对手加入
    Waiting,
    /// 对局进行中
    Active,
    /// 对局结束
    Finished,
}

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 黑方胜
    BlackWin,
    /// 白方胜
    WhiteWin,
    /// 平局
    Draw,
}

/// 服务端下发的对局快照
///
/// 反序列化整体成败：任一字段非法则整个快照被拒绝，绝不部分应用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 房间状态
    pub status: RoomStatus,
    /// 棋盘（64 整数平铺）
    pub board: Board,
    /// 当前走子方（1=黑 2=白）
    pub turn: Player,
    /// 游戏变体
    pub mode: Variant,
}

/// 客户端上行的落子指令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// 行 (0-7)
    pub row: u8,
    /// 列 (0-7)
    pub column: u8,
    /// 落子方（1=黑 2=白）
    pub player: Player,
}

impl MoveCommand {
    /// 从棋盘坐标创建指令
    pub fn new(pos: Position, player: Player) -> Self {
        Self {
            row: pos.row,
            column: pos.col,
            player,
        }
    }
}

/// 加入房间的应答
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReply {
    /// 分配到的阵营（1=黑 2=白）
    pub player_id: Player,
    /// 房间的游戏变体
    pub mode: Variant,
}
