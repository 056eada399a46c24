use crate::card::DrawnCard;
use crate::deck::Deck;

/// Shuffle passes performed per reading.
const SHUFFLE_PASSES: usize = 3;

/// Offsets from the end of the deck for the three spread positions.
const PAST_OFFSET: usize = 7;
const NOW_OFFSET: usize = 14;
const FUTURE_OFFSET: usize = 21;

/// One past/now/future reading. Holds copies of the drawn cards; the deck
/// keeps its full sequence and can be read again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadResult {
    pub past: DrawnCard,
    pub now: DrawnCard,
    pub future: DrawnCard,
}

impl SpreadResult {
    /// The three positions with their display labels, in reading order.
    pub fn positions(&self) -> [(&'static str, DrawnCard); 3] {
        [("Past", self.past), ("Now", self.now), ("Future", self.future)]
    }
}

/// Produce a three-card reading from `deck`.
///
/// Shuffles exactly three times, then copies the cards at `len-7` (past),
/// `len-14` (now) and `len-21` (future). Total for every valid scope: the
/// smallest scope holds 22 cards, so the offsets always land in range and
/// are pairwise distinct.
pub fn draw_spread(deck: &mut Deck) -> SpreadResult {
    debug_assert!(deck.len() > FUTURE_OFFSET, "Deck too small for a spread");

    for _ in 0..SHUFFLE_PASSES {
        deck.shuffle();
    }

    let len = deck.len();
    SpreadResult {
        past: deck.get(len - PAST_OFFSET),
        now: deck.get(len - NOW_OFFSET),
        future: deck.get(len - FUTURE_OFFSET),
    }
}
