//! 本地人机对战
//!
//! 人类执黑、机器人执白。机器人走法走与人类相同的 submit_move
//! 路径，翻子语义完全一致；"思考"延迟只是界面体验，可配置为零。

use std::thread;
use std::time::Duration;

use othello_ai::AiEngine;
use protocol::{Difficulty, GameError, Player, Position, Variant, BOT_DELAY};

use crate::session::{GameSession, MoveOutcome, SessionStatus};

/// 一次落子事件，按发生顺序交给界面层
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEvent {
    pub player: Player,
    pub pos: Position,
    pub outcome: MoveOutcome,
}

/// 本地对局：人类对机器人
pub struct LocalGame {
    session: GameSession,
    engine: AiEngine,
    human: Player,
    bot_delay: Duration,
}

impl LocalGame {
    /// 创建本地对局，人类执黑先行
    pub fn new(variant: Variant, difficulty: Difficulty) -> Self {
        Self {
            session: GameSession::new(variant),
            engine: AiEngine::from_difficulty(difficulty),
            human: Player::Black,
            bot_delay: BOT_DELAY,
        }
    }

    /// 固定随机种子创建（测试用）
    pub fn with_seed(variant: Variant, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            session: GameSession::new(variant),
            engine: AiEngine::with_seed(difficulty, seed),
            human: Player::Black,
            bot_delay: BOT_DELAY,
        }
    }

    /// 自定义机器人延迟（无头运行或测试时设为零）
    pub fn with_bot_delay(mut self, delay: Duration) -> Self {
        self.bot_delay = delay;
        self
    }

    /// 底层会话
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// 人类一方
    pub fn human(&self) -> Player {
        self.human
    }

    /// 人类落子，随后驱动机器人直到重新轮到人类或对局结束
    ///
    /// 返回本次调用中发生的全部落子事件（含机器人的），按顺序排列。
    pub fn play_human(&mut self, row: u8, col: u8) -> Result<Vec<TurnEvent>, GameError> {
        if self.session.status() == SessionStatus::Finished {
            return Err(GameError::GameOver);
        }
        if self.session.current_player() != self.human {
            return Err(GameError::NotYourTurn);
        }

        let mut events = Vec::new();
        let outcome = self.session.submit_move(self.human, row, col)?;
        events.push(TurnEvent {
            player: self.human,
            pos: Position::new(row, col)?,
            outcome,
        });

        self.drive_bot(&mut events)?;
        Ok(events)
    }

    /// 连续驱动机器人：对局进行中且轮到机器人时反复走子
    /// （人类被跳过时机器人会连走多步）
    fn drive_bot(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), GameError> {
        let bot = self.human.opponent();

        while self.session.status() == SessionStatus::Active
            && self.session.current_player() == bot
        {
            if !self.bot_delay.is_zero() {
                thread::sleep(self.bot_delay);
            }

            // 会话只会把回合交给有子可走的一方，这里选子必然成功
            let pos = self
                .engine
                .select_move(self.session.board(), bot, self.session.variant())?;
            let outcome = self.session.submit_move(bot, pos.row, pos.col)?;
            events.push(TurnEvent {
                player: bot,
                pos,
                outcome,
            });
        }

        Ok(())
    }
}
