//! Per-mode submit handlers.
//!
//! One function per mode, in the shape the state machine demands: take
//! the shared context and the submitted answer, queue presentation
//! effects, and return `Some(next)` to transition or `None` to stay.
//!
//! ```text
//!  MENU ──[digit 1-4]──▶ PLAYING
//!    ▲                       │
//!    │      [streak reaches target, or lives exhausted]
//!    └───────────────────────┘
//! ```

use log::info;
use rand::Rng;

use super::context::{Effect, GameContext, SessionOutcome};
use super::{Level, Mode, Prompt};
use crate::error::MenuError;
use crate::symbols;

/// Hard cap on positional word comparison, inherited from the original
/// check. Targets are three letters, so the cap never binds in play.
const WORD_COMPARE_LIMIT: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════
//  MENU — any submission is a level selection
// ═══════════════════════════════════════════════════════════════════════════

pub(super) fn menu_submit(
    ctx: &mut GameContext,
    answer: &str,
    rng: &mut impl Rng,
) -> Option<Mode> {
    if answer.chars().count() > 1 {
        ctx.push_effect(Effect::ShowMenuError(MenuError::NotASingleDigit));
        return None;
    }

    // An empty answer falls through to the range error.
    let Some(level) = answer.chars().next().and_then(Level::from_digit) else {
        ctx.push_effect(Effect::ShowMenuError(MenuError::DigitOutOfRange));
        return None;
    };

    info!("starting level {}", level.number());
    ctx.begin_level(level, rng);
    ctx.push_effect(Effect::ShowLevelIntro(level));
    ctx.push_effect(Effect::ShowPrompt);
    Some(Mode::Playing)
}

// ═══════════════════════════════════════════════════════════════════════════
//  PLAYING — any submission is an answer to the current prompt
// ═══════════════════════════════════════════════════════════════════════════

pub(super) fn playing_submit(
    ctx: &mut GameContext,
    answer: &str,
    rng: &mut impl Rng,
) -> Option<Mode> {
    // Latched once lives are exhausted: submissions are ignored until a
    // new level starts.
    if ctx.lives == 0 {
        return None;
    }

    ctx.attempts += 1;
    let passed = answer_matches(ctx.prompt, answer);

    if passed {
        ctx.correct += 1;
        ctx.streak += 1;
        // Correct answers restore lost lives, up to the cap.
        if ctx.lives < ctx.config.max_lives {
            ctx.lives += 1;
        }
        ctx.push_effect(Effect::ShowFeedback {
            passed: true,
            lives: ctx.lives,
        });

        if ctx.streak >= ctx.config.streak_to_win {
            let Some(level) = ctx.level else {
                return Some(Mode::Menu);
            };
            ctx.levels_completed[level.index()] = true;
            let outcome = if ctx.all_levels_completed() {
                SessionOutcome::GameWon
            } else {
                SessionOutcome::LevelComplete(level)
            };
            info!("level {} complete ({:?})", level.number(), outcome);
            return end_level(ctx, outcome);
        }

        ctx.choose_prompt(rng);
        ctx.push_effect(Effect::ShowPrompt);
        None
    } else {
        ctx.lives -= 1;
        ctx.streak = 0;
        ctx.incorrect += 1;
        ctx.push_effect(Effect::ShowFeedback {
            passed: false,
            lives: ctx.lives,
        });

        if ctx.lives == 0 {
            info!("out of lives after {} attempts", ctx.attempts);
            return end_level(ctx, SessionOutcome::GameOver);
        }

        // Same prompt again.
        ctx.push_effect(Effect::ShowPrompt);
        None
    }
}

/// Close out the level: outcome screen, stats snapshot, back to menu.
fn end_level(ctx: &mut GameContext, outcome: SessionOutcome) -> Option<Mode> {
    ctx.push_effect(Effect::ShowOutcome(outcome));
    ctx.push_effect(Effect::ShowStats {
        correct: ctx.correct,
        incorrect: ctx.incorrect,
        attempts: ctx.attempts,
    });
    ctx.finish_level();
    ctx.push_effect(Effect::ShowMenu);
    Some(Mode::Menu)
}

/// Does `answer` match the current prompt?
fn answer_matches(prompt: Option<Prompt>, answer: &str) -> bool {
    match prompt {
        Some(Prompt::Character(idx)) => {
            // One decoded character, exactly the target.
            answer.len() == 1 && answer.as_bytes()[0] == symbols::character(idx) as u8
        }
        Some(Prompt::Word(idx)) => {
            let target = symbols::word(idx).as_bytes();
            let got = answer.as_bytes();
            for col in 0..WORD_COMPARE_LIMIT {
                let want = target.get(col);
                if got.get(col) != want {
                    return false;
                }
                // Both terminated together.
                if want.is_none() {
                    break;
                }
            }
            true
        }
        None => false,
    }
}
