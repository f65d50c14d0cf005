//! Key classification
//!
//! Every (session context, key) pair maps to exactly one [`Action`]. The
//! mapping is pure; applying the action is the tick's job.

use serde::{Deserialize, Serialize};

use super::state::SessionPhase;
use crate::consts::NAME_MAX_LEN;

/// A key press delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Flap while playing, start from the menu screens, a space in a name
    Space,
    /// Confirm the typed name
    Enter,
    /// Erase the last typed character
    Backspace,
    /// A key that produced text
    Char(char),
    /// Anything without text (arrows, modifiers, function keys)
    Other,
}

/// What a key press means in the current context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Begin a new run
    Start,
    /// Flap the bird
    Flap,
    /// Open the name prompt with this first character
    BeginName(char),
    /// Add a character to the name
    Append(char),
    /// Remove the last character of the name
    Erase,
    /// Save the name and score
    Confirm,
    /// No effect
    Ignore,
}

/// The slice of session state that key classification depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub phase: SessionPhase,
    /// The last run scored at least one point
    pub has_score: bool,
    /// The last run's score is already saved
    pub submitted: bool,
    /// Characters already typed
    pub name_len: usize,
}

fn is_text(c: char) -> bool {
    !c.is_control()
}

/// Map a key press to its action
///
/// A `Char(' ')` from a text-producing host means the same as `Space`.
pub fn classify(ctx: &InputContext, key: Key) -> Action {
    let key = match key {
        Key::Char(' ') => Key::Space,
        other => other,
    };

    match ctx.phase {
        SessionPhase::Playing => match key {
            Key::Space => Action::Flap,
            _ => Action::Ignore,
        },

        SessionPhase::AwaitingName => match key {
            Key::Enter => Action::Confirm,
            Key::Backspace => Action::Erase,
            Key::Space if ctx.name_len < NAME_MAX_LEN => Action::Append(' '),
            Key::Char(c) if is_text(c) && ctx.name_len < NAME_MAX_LEN => Action::Append(c),
            _ => Action::Ignore,
        },

        SessionPhase::Menu | SessionPhase::NameSubmitted => match key {
            Key::Space => Action::Start,
            Key::Char(c) if is_text(c) && ctx.has_score && !ctx.submitted => {
                Action::BeginName(c)
            }
            _ => Action::Ignore,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(phase: SessionPhase) -> InputContext {
        InputContext {
            phase,
            has_score: true,
            submitted: false,
            name_len: 0,
        }
    }

    #[test]
    fn test_space_is_overloaded() {
        assert_eq!(classify(&ctx(SessionPhase::Playing), Key::Space), Action::Flap);
        assert_eq!(classify(&ctx(SessionPhase::Menu), Key::Space), Action::Start);
        assert_eq!(
            classify(&ctx(SessionPhase::NameSubmitted), Key::Space),
            Action::Start
        );
        assert_eq!(
            classify(&ctx(SessionPhase::AwaitingName), Key::Space),
            Action::Append(' ')
        );
    }

    #[test]
    fn test_typed_space_matches_space_key() {
        for phase in [
            SessionPhase::Playing,
            SessionPhase::Menu,
            SessionPhase::AwaitingName,
            SessionPhase::NameSubmitted,
        ] {
            let c = ctx(phase);
            assert_eq!(classify(&c, Key::Char(' ')), classify(&c, Key::Space));
        }
        assert_eq!(classify(&ctx(SessionPhase::Playing), Key::Char(' ')), Action::Flap);
        assert_eq!(classify(&ctx(SessionPhase::Menu), Key::Char(' ')), Action::Start);
    }

    #[test]
    fn test_playing_ignores_everything_else() {
        let c = ctx(SessionPhase::Playing);
        for key in [Key::Enter, Key::Backspace, Key::Char('a'), Key::Other] {
            assert_eq!(classify(&c, key), Action::Ignore);
        }
    }

    #[test]
    fn test_typing_opens_name_prompt_only_with_unsaved_score() {
        let c = ctx(SessionPhase::Menu);
        assert_eq!(classify(&c, Key::Char('Z')), Action::BeginName('Z'));

        let no_score = InputContext {
            has_score: false,
            ..c
        };
        assert_eq!(classify(&no_score, Key::Char('Z')), Action::Ignore);

        let saved = InputContext {
            phase: SessionPhase::NameSubmitted,
            submitted: true,
            ..c
        };
        assert_eq!(classify(&saved, Key::Char('Z')), Action::Ignore);
    }

    #[test]
    fn test_menu_ignores_confirm_erase_and_non_text() {
        let c = ctx(SessionPhase::Menu);
        assert_eq!(classify(&c, Key::Enter), Action::Ignore);
        assert_eq!(classify(&c, Key::Backspace), Action::Ignore);
        assert_eq!(classify(&c, Key::Other), Action::Ignore);
        assert_eq!(classify(&c, Key::Char('\t')), Action::Ignore);
    }

    #[test]
    fn test_name_entry_keys() {
        let c = ctx(SessionPhase::AwaitingName);
        assert_eq!(classify(&c, Key::Char('q')), Action::Append('q'));
        assert_eq!(classify(&c, Key::Backspace), Action::Erase);
        assert_eq!(classify(&c, Key::Enter), Action::Confirm);
        assert_eq!(classify(&c, Key::Other), Action::Ignore);
    }

    #[test]
    fn test_full_name_ignores_more_text() {
        let full = InputContext {
            name_len: NAME_MAX_LEN,
            ..ctx(SessionPhase::AwaitingName)
        };
        assert_eq!(classify(&full, Key::Char('x')), Action::Ignore);
        assert_eq!(classify(&full, Key::Space), Action::Ignore);
        // Erase and confirm still work
        assert_eq!(classify(&full, Key::Backspace), Action::Erase);
        assert_eq!(classify(&full, Key::Enter), Action::Confirm);
    }
}
