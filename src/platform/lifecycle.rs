//! Page lifecycle handling for the frame loop
//!
//! A page entering the back/forward cache fires `pagehide` with `persisted`
//! set and may later come back through `pageshow`. The loop must survive that
//! round trip; only a real unload releases it.

/// A `pagehide` or `pageshow` event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

/// What to do with the frame loop handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Keep,
    Stop,
    Restart,
}

/// Decide how the frame loop reacts to a page transition
pub fn loop_action(transition: PageTransition, loop_running: bool) -> LoopAction {
    match transition {
        // Cached pages have their frames suspended by the browser
        PageTransition::Hide { persisted: true } => LoopAction::Keep,
        PageTransition::Hide { persisted: false } if loop_running => LoopAction::Stop,
        PageTransition::Show { .. } if !loop_running => LoopAction::Restart,
        _ => LoopAction::Keep,
    }
}
