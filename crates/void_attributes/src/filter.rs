//! Stack filters
//!
//! A filter is a pure predicate over stacks, used to gate insertion and
//! extraction. Filters compose with [`Filter::and`], [`Filter::or`] and
//! [`Filter::negate`]; the two constants fold away wherever they appear.
//!
//! Negating an inverted filter hands back the exact filter that was
//! inverted, so `f.negate().negate()` is reference-equal to `f` and repeated
//! negation never grows a chain of wrappers.

use core::fmt;
use std::sync::Arc;

/// A predicate over stacks
pub trait StackFilter<S>: Send + Sync {
    /// Check if the stack passes this filter. Must not have side effects.
    fn matches(&self, stack: &S) -> bool;

    /// The filter this one is the negation of, if any
    fn inverse(&self) -> Option<Filter<S>> {
        None
    }
}

impl<S, F> StackFilter<S> for F
where
    F: Fn(&S) -> bool + Send + Sync,
{
    fn matches(&self, stack: &S) -> bool {
        self(stack)
    }
}

/// A shareable filter handle
pub enum Filter<S> {
    /// Matches nothing
    Nothing,
    /// Matches everything
    Everything,
    /// Any other predicate
    Custom(Arc<dyn StackFilter<S>>),
}

impl<S: 'static> Filter<S> {
    /// Wrap a predicate
    pub fn custom(filter: impl StackFilter<S> + 'static) -> Self {
        Filter::Custom(Arc::new(filter))
    }

    /// Check if the stack passes this filter
    pub fn matches(&self, stack: &S) -> bool {
        match self {
            Filter::Nothing => false,
            Filter::Everything => true,
            Filter::Custom(filter) => filter.matches(stack),
        }
    }

    /// The filter matching exactly what this one rejects
    pub fn negate(&self) -> Self {
        match self {
            Filter::Nothing => Filter::Everything,
            Filter::Everything => Filter::Nothing,
            Filter::Custom(filter) => filter.inverse().unwrap_or_else(|| {
                Filter::custom(InvertedFilter {
                    delegate: self.clone(),
                })
            }),
        }
    }

    /// Matches stacks accepted by both filters
    pub fn and(&self, other: &Filter<S>) -> Self {
        match (self, other) {
            (Filter::Nothing, _) | (_, Filter::Nothing) => Filter::Nothing,
            (Filter::Everything, f) | (f, Filter::Everything) => f.clone(),
            _ => Filter::custom(AggregateFilter {
                mode: AggregateMode::All,
                filters: vec![self.clone(), other.clone()],
            }),
        }
    }

    /// Matches stacks accepted by either filter
    pub fn or(&self, other: &Filter<S>) -> Self {
        match (self, other) {
            (Filter::Everything, _) | (_, Filter::Everything) => Filter::Everything,
            (Filter::Nothing, f) | (f, Filter::Nothing) => f.clone(),
            _ => Filter::custom(AggregateFilter {
                mode: AggregateMode::Any,
                filters: vec![self.clone(), other.clone()],
            }),
        }
    }

    /// Matches stacks accepted by every filter (everything if there are none)
    pub fn all_of<I: IntoIterator<Item = Filter<S>>>(filters: I) -> Self {
        AggregateFilter::fold(AggregateMode::All, filters)
    }

    /// Matches stacks accepted by at least one filter (nothing if there are none)
    pub fn any_of<I: IntoIterator<Item = Filter<S>>>(filters: I) -> Self {
        AggregateFilter::fold(AggregateMode::Any, filters)
    }
}

impl<S> Filter<S> {
    /// Reference identity: same constant, or the same shared predicate
    pub fn same(&self, other: &Filter<S>) -> bool {
        match (self, other) {
            (Filter::Nothing, Filter::Nothing) | (Filter::Everything, Filter::Everything) => true,
            (Filter::Custom(a), Filter::Custom(b)) => {
                core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }

    /// Check if this is the `Nothing` constant
    pub fn is_nothing(&self) -> bool {
        matches!(self, Filter::Nothing)
    }

    /// Check if this is the `Everything` constant
    pub fn is_everything(&self) -> bool {
        matches!(self, Filter::Everything)
    }
}

impl<S> Clone for Filter<S> {
    fn clone(&self) -> Self {
        match self {
            Filter::Nothing => Filter::Nothing,
            Filter::Everything => Filter::Everything,
            Filter::Custom(filter) => Filter::Custom(Arc::clone(filter)),
        }
    }
}

impl<S> Default for Filter<S> {
    fn default() -> Self {
        Filter::Everything
    }
}

impl<S> fmt::Debug for Filter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Nothing => write!(f, "Filter::Nothing"),
            Filter::Everything => write!(f, "Filter::Everything"),
            Filter::Custom(filter) => write!(f, "Filter::Custom({:p})", Arc::as_ptr(filter)),
        }
    }
}

/// The negation of another filter
pub struct InvertedFilter<S> {
    delegate: Filter<S>,
}

impl<S: 'static> StackFilter<S> for InvertedFilter<S> {
    fn matches(&self, stack: &S) -> bool {
        !self.delegate.matches(stack)
    }

    fn inverse(&self) -> Option<Filter<S>> {
        Some(self.delegate.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AggregateMode {
    All,
    Any,
}

/// Conjunction or disjunction over several filters
struct AggregateFilter<S> {
    mode: AggregateMode,
    filters: Vec<Filter<S>>,
}

impl<S: 'static> AggregateFilter<S> {
    fn fold<I: IntoIterator<Item = Filter<S>>>(mode: AggregateMode, filters: I) -> Filter<S> {
        // The absorbing constant short-circuits, the identity constant drops out
        let (absorbing, identity) = match mode {
            AggregateMode::All => (Filter::Nothing, Filter::Everything),
            AggregateMode::Any => (Filter::Everything, Filter::Nothing),
        };

        let mut kept = Vec::new();
        for filter in filters {
            if filter.same(&absorbing) {
                return absorbing;
            }
            if !filter.same(&identity) {
                kept.push(filter);
            }
        }

        match kept.len() {
            0 => identity,
            1 => kept.swap_remove(0),
            _ => Filter::custom(AggregateFilter {
                mode,
                filters: kept,
            }),
        }
    }
}

impl<S: 'static> StackFilter<S> for AggregateFilter<S> {
    fn matches(&self, stack: &S) -> bool {
        match self.mode {
            AggregateMode::All => self.filters.iter().all(|f| f.matches(stack)),
            AggregateMode::Any => self.filters.iter().any(|f| f.matches(stack)),
        }
    }
}
