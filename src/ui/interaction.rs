//! User interactions routed from the views back into session transitions

use crate::game::GameSession;

/// Something the player clicked this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A board cell, by board index
    Cell(usize),
    /// A history entry, by its original history index
    Jump(usize),
    /// The order toggle button
    ToggleOrder,
}

impl Interaction {
    /// Run the matching transition and return the new session
    pub fn apply(self, session: &GameSession) -> GameSession {
        match self {
            Interaction::Cell(index) => session.apply_move(index),
            Interaction::Jump(step) => session.jump_to(step),
            Interaction::ToggleOrder => session.toggle_sort_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_cell_click_applies_move() {
        let session = Interaction::Cell(4).apply(&GameSession::new());
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.next_player(), Mark::O);
    }

    #[test]
    fn test_jump_uses_history_index() {
        let session = GameSession::new()
            .apply_move(0)
            .apply_move(1)
            .toggle_sort_order();
        let jumped = Interaction::Jump(1).apply(&session);
        assert_eq!(jumped.current_step(), 1);
    }

    #[test]
    fn test_toggle_order() {
        let session = Interaction::ToggleOrder.apply(&GameSession::new());
        assert!(!session.sort_ascending());
    }
}
