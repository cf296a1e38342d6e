//! Slot transfer algorithms
//!
//! These are written once against the minimal `FixedInv` surface (get, set,
//! capacity) and reused by every backend and by decorators that tighten the
//! rules before falling through to them.

use crate::filter::Filter;
use crate::fixed::FixedInv;
use crate::grouped::{Extractable, Insertable};
use crate::simulation::Simulation;
use crate::stack::Stack;

/// Insert `stack` into `slot`, returning whatever did not fit.
///
/// `stack` itself is never modified. The slot only changes if `set_stack`
/// accepts the merged result; in simulation it reports the same outcome
/// without changing anything.
pub fn insert_stack<S, I>(inv: &I, slot: usize, stack: &S, simulation: Simulation) -> S
where
    S: Stack,
    I: FixedInv<S> + ?Sized,
{
    if stack.is_empty() {
        return S::empty();
    }

    let current = inv.get_stack(slot);
    let current_count = if current.is_empty() { 0 } else { current.count() };
    if current_count > 0 && !current.same_kind(stack) {
        return stack.clone();
    }

    let max = current_count
        .saturating_add(stack.count())
        .min(inv.max_amount(slot, stack));
    let addable = max.saturating_sub(current_count);
    if addable == 0 {
        return stack.clone();
    }

    let target = if current_count == 0 {
        stack.with_count(addable)
    } else {
        let mut merged = current;
        merged.increment(addable);
        merged
    };

    if !inv.set_stack(slot, target, simulation) {
        return stack.clone();
    }

    let mut remainder = stack.clone();
    remainder.decrement(addable);
    if remainder.is_empty() {
        S::empty()
    } else {
        remainder
    }
}

/// Extract up to `max_count` units from `slot`, merged into `merge_with`.
///
/// Returns `merge_with` unchanged when nothing could be taken: the slot is
/// empty, the kinds differ, `filter` rejects the slot's stack, or the
/// inventory refused the write.
pub fn extract_stack<S, I>(
    inv: &I,
    slot: usize,
    filter: Option<&Filter<S>>,
    merge_with: S,
    max_count: u32,
    simulation: Simulation,
) -> S
where
    S: Stack,
    I: FixedInv<S> + ?Sized,
{
    let current = inv.get_stack(slot);
    if current.is_empty() {
        return merge_with;
    }

    let mut max_count = max_count;
    if !merge_with.is_empty() {
        if !merge_with.same_kind(&current) {
            return merge_with;
        }
        max_count = max_count.min(merge_with.max_count().saturating_sub(merge_with.count()));
    }
    if max_count == 0 {
        return merge_with;
    }

    if let Some(filter) = filter {
        if !filter.matches(&current) {
            return merge_with;
        }
    }

    let mut remaining = current;
    let taken = remaining.split(max_count);
    if remaining.is_empty() {
        remaining = S::empty();
    }

    if !inv.set_stack(slot, remaining, simulation) {
        return merge_with;
    }

    if merge_with.is_empty() {
        taken
    } else {
        let mut merged = merge_with;
        merged.increment(taken.count());
        merged
    }
}

/// Move up to `max` units matching `filter` from `from` into `to`.
///
/// Both sides are simulated first so only the amount `to` will accept is
/// ever taken out of `from`. Returns the number of units that ended up in
/// `to`. Anything `to` refuses on the real insertion goes back into `from`.
pub fn move_stacks<S, F, T>(from: &F, to: &T, filter: &Filter<S>, max: u32) -> u32
where
    S: Stack,
    F: Extractable<S> + Insertable<S> + ?Sized,
    T: Insertable<S> + ?Sized,
{
    let extracted = from.attempt_extraction(filter, max, Simulation::Simulate);
    if extracted.is_empty() {
        return 0;
    }

    let leftover = to.attempt_insertion(&extracted, Simulation::Simulate);
    let insertable = extracted.count().saturating_sub(leftover.count());
    if insertable == 0 {
        return 0;
    }

    let kind = extracted.clone();
    let exact = Filter::custom(move |stack: &S| stack.same_kind(&kind));
    let extracted = from.attempt_extraction(&exact, insertable, Simulation::Action);
    if extracted.is_empty() {
        return 0;
    }

    let leftover = to.attempt_insertion(&extracted, Simulation::Action);
    if leftover.is_empty() {
        return extracted.count();
    }

    log::warn!(
        "Insertion accepted less than it simulated, returning {:?} to the source",
        leftover
    );
    let lost = from.attempt_insertion(&leftover, Simulation::Action);
    if !lost.is_empty() {
        log::error!("Source refused {:?} back after a short insertion", lost);
    }
    extracted.count().saturating_sub(leftover.count())
}
