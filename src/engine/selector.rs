//! Bounded-random selection over filtered candidate lists.

use rand::Rng;

/// How many of the closest-to-target candidates a meal is drawn from.
///
/// Drawing from a small window balances nutritional fit against variety:
/// always taking rank #1 would repeat the same meal all week, while drawing
/// from the whole filtered set would ignore the calorie target.
pub const MEAL_WINDOW: usize = 5;

/// The outcome of a selection attempt.
///
/// An empty candidate list is not an error; it degrades to `NotFound`, which
/// the planner converts into a placeholder record. The engine itself never
/// fails mid-generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Found(T),
    NotFound,
}

impl<T> Selection<T> {
    /// Converts into an `Option`, discarding the `NotFound` marker.
    pub fn found(self) -> Option<T> {
        match self {
            Selection::Found(item) => Some(item),
            Selection::NotFound => None,
        }
    }
}

/// Draws uniformly at random from the first `min(window, len)` items.
///
/// Intended for ranked lists, where the head holds the best candidates. The
/// draw is always a strict subset pick; the result is an element of `items`.
pub fn select_within_window<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    window: usize,
    rng: &mut R,
) -> Selection<&'a T> {
    if items.is_empty() {
        return Selection::NotFound;
    }
    let bound = window.min(items.len());
    Selection::Found(&items[rng.random_range(0..bound)])
}

/// Draws uniformly at random from the whole list.
pub fn select_uniform<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Selection<&'a T> {
    select_within_window(items, items.len(), rng)
}
