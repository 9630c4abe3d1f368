//! 黑白棋对局编排
//!
//! 包含:
//! - 本地权威会话（回合推进、停一手、终局判定）
//! - 人机对战驱动（机器人与人类共用落子路径）
//! - 远程协调器同步的引擎侧（快照镜像 + 上行指令）

mod local;
mod session;
mod sync;

pub use local::{LocalGame, TurnEvent};
pub use session::{GameSession, MoveOutcome, SessionStatus};
pub use sync::RemoteGame;
