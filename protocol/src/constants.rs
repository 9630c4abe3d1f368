//! 协议常量定义

use std::time::Duration;

/// 棋盘边长
pub const BOARD_SIZE: usize = 8;

/// 格子总数
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Reversi 布子阶段的棋子数（前 4 子摆中心，不翻子）
pub const SETUP_PIECES: usize = 4;

/// 8 个射线方向 (dr, dc)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 本地人机对战中机器人"思考"延迟（毫秒）
pub const BOT_DELAY_MS: u64 = 600;

/// 机器人延迟 Duration
pub const BOT_DELAY: Duration = Duration::from_millis(BOT_DELAY_MS);
