//! Card tiles and their lifecycle.
//!
//! ```text
//! Back -> Front -> Matched -> Complete
//!           |
//!           +-> Back   (mismatch clear)
//! ```
//!
//! `Complete` is only ever applied to the whole deck at once, when the
//! last pair is matched.

use serde::{Deserialize, Serialize};

use super::image::ImageId;

/// Lifecycle state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down, selectable.
    #[default]
    Back,
    /// Face-up, awaiting resolution.
    Front,
    /// Part of a found pair.
    Matched,
    /// Every pair in the deck has been found.
    Complete,
}

impl CardState {
    /// Is the front image showing?
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardState::Back)
    }

    /// Has this card left play (matched or complete)?
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, CardState::Matched | CardState::Complete)
    }
}

/// One tile in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face image, shared with its pair.
    pub front: ImageId,

    /// Back image, shared by the whole deck.
    pub back: ImageId,

    state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(front: ImageId, back: ImageId) -> Self {
        Self {
            front,
            back,
            state: CardState::Back,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Image the renderer should show for the current state.
    #[must_use]
    pub fn visible_image(&self) -> &ImageId {
        if self.state.is_face_up() {
            &self.front
        } else {
            &self.back
        }
    }

    /// Does this card form a pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.front == other.front
    }

    /// `Back -> Front`. Returns false if the card was not face-down.
    pub fn flip_up(&mut self) -> bool {
        self.transition(CardState::Back, CardState::Front)
    }

    /// `Front -> Back`. Returns false if the card was not face-up and pending.
    pub fn flip_down(&mut self) -> bool {
        self.transition(CardState::Front, CardState::Back)
    }

    /// `Front -> Matched`.
    pub fn mark_matched(&mut self) -> bool {
        self.transition(CardState::Front, CardState::Matched)
    }

    /// `Matched -> Complete`. Already complete cards are left alone.
    pub fn mark_complete(&mut self) -> bool {
        self.transition(CardState::Matched, CardState::Complete)
    }

    fn transition(&mut self, from: CardState, to: CardState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str) -> Card {
        Card::new(ImageId::from(front), ImageId::from("back"))
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = card("cat");
        assert_eq!(card.state(), CardState::Back);
        assert_eq!(card.visible_image(), &ImageId::from("back"));
    }

    #[test]
    fn test_full_lifecycle() {
        let mut card = card("cat");

        assert!(card.flip_up());
        assert_eq!(card.visible_image(), &ImageId::from("cat"));
        assert!(card.mark_matched());
        assert!(card.mark_complete());
        assert_eq!(card.state(), CardState::Complete);
        assert!(card.state().is_resolved());
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut card = card("cat");

        card.flip_up();
        assert!(card.flip_down());
        assert_eq!(card.state(), CardState::Back);
    }

    #[test]
    fn test_illegal_transitions_are_ignored() {
        let mut card = card("cat");

        assert!(!card.flip_down());
        assert!(!card.mark_matched());
        assert!(!card.mark_complete());
        assert_eq!(card.state(), CardState::Back);

        card.flip_up();
        assert!(!card.flip_up());

        card.mark_matched();
        assert!(!card.flip_down());
        assert!(!card.flip_up());
        assert_eq!(card.state(), CardState::Matched);
    }

    #[test]
    fn test_pairs_with() {
        assert!(card("cat").pairs_with(&card("cat")));
        assert!(!card("cat").pairs_with(&card("dog")));
    }

    #[test]
    fn test_state_predicates() {
        assert!(!CardState::Back.is_face_up());
        assert!(CardState::Front.is_face_up());
        assert!(!CardState::Front.is_resolved());
        assert!(CardState::Matched.is_resolved());
        assert!(CardState::Complete.is_face_up());
    }
}
