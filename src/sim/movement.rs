//! All-or-nothing movement against obstacle boxes
//!
//! The combined X/Y move is committed only if the box at the candidate
//! position overlaps no obstacle. There is no sliding and no partial move.

use glam::Vec2;

use super::collision::CollisionBox;

/// Result of a movement attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Candidate position accepted
    Moved(Vec2),
    /// Candidate overlapped obstacle `index`; entity stays put
    Blocked { position: Vec2, index: usize },
}

impl MoveOutcome {
    /// Position the entity ends up at
    pub fn position(&self) -> Vec2 {
        match *self {
            MoveOutcome::Moved(p) => p,
            MoveOutcome::Blocked { position, .. } => position,
        }
    }

    pub fn blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}

/// Try to move `own` from `current` by `delta`
///
/// On success `own` is left at the candidate position; on rejection it is put
/// back at `current`. An empty obstacle set always accepts the move.
pub fn try_move<'a>(
    current: Vec2,
    delta: Vec2,
    own: &mut CollisionBox,
    obstacles: impl IntoIterator<Item = &'a CollisionBox>,
) -> MoveOutcome {
    let candidate = current + delta;
    own.move_to(candidate);

    if let Some(index) = obstacles.into_iter().position(|o| own.intersects(o)) {
        own.move_to(current);
        log::debug!("move {current} -> {candidate} blocked by obstacle {index}");
        return MoveOutcome::Blocked {
            position: current,
            index,
        };
    }

    MoveOutcome::Moved(candidate)
}
