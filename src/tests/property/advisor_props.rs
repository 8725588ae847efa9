//! Property-based tests for the advisor conversation
//!
//! Tests invariants:
//! - Blank submissions never change the log or state
//! - An accepted submission appends exactly one user message, as typed
//! - A second submission while awaiting is refused
//! - Replies are always drawn from the configured set

use std::time::Duration;

use proptest::prelude::*;

use crate::core::advisor::{
    AdvisorSession, ChatRole, ResponderState, SimulatedAdvisor, Submission,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Whitespace-only input, including the empty string.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,12}"
}

/// Input with at least one visible character.
fn arb_question() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9?'$][a-zA-Z0-9 ?'$,.]{0,60}"
}

fn arb_reply_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{1,40}", 1..8)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: blank input is ignored in every state
    #[test]
    fn prop_blank_submission_is_noop(blank in arb_blank(), awaiting in any::<bool>()) {
        let mut session = AdvisorSession::new();
        if awaiting {
            session.submit("pending");
        }
        let before_len = session.len();
        let before_state = session.state();

        prop_assert_eq!(session.submit(&blank), Submission::Empty);
        prop_assert_eq!(session.len(), before_len);
        prop_assert_eq!(session.state(), before_state);
    }

    /// Property: accepted text is stored as typed, one message at a time
    #[test]
    fn prop_accepted_appends_one(question in arb_question()) {
        let mut session = AdvisorSession::new();
        let before = session.len();

        prop_assert_eq!(session.submit(&question), Submission::Accepted(question.clone()));
        prop_assert_eq!(session.len(), before + 1);
        let last = session.messages().last().unwrap();
        prop_assert_eq!(last.role, ChatRole::User);
        prop_assert_eq!(&last.content, &question);
        prop_assert_eq!(session.state(), ResponderState::AwaitingReply);
    }

    /// Property: at most one request outstanding
    #[test]
    fn prop_busy_while_awaiting(first in arb_question(), second in arb_question()) {
        let mut session = AdvisorSession::new();
        session.submit(&first);
        let len = session.len();

        prop_assert_eq!(session.submit(&second), Submission::Busy);
        prop_assert_eq!(session.len(), len);

        prop_assert!(session.complete("done"));
        prop_assert_eq!(session.len(), len + 1);
        prop_assert!(!session.complete("late"));
        prop_assert_eq!(session.len(), len + 1);
    }

    /// Property: every pick is a member of the reply set
    #[test]
    fn prop_pick_is_member(replies in arb_reply_set(), seed in any::<u64>()) {
        let advisor = SimulatedAdvisor::with_seed(replies.clone(), Duration::ZERO, seed).unwrap();
        for _ in 0..32 {
            let pick = advisor.pick();
            prop_assert!(replies.iter().any(|r| r == pick));
        }
    }
}
