//! Fetch state that ignores superseded responses.
//!
//! # Design
//! - Every fetch is tagged with a generation when it is issued.
//! - A response applies only if its generation is still the latest one issued.
//! - Starting a fetch keeps the previous data visible; resolution replaces it wholesale.

use std::rc::Rc;
use yew::Reducible;

/// `{data, loading, error}` for one logical request stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource<T> {
    /// Last successfully applied payload.
    pub data: Option<T>,
    /// A request for the current generation is in flight.
    pub loading: bool,
    /// Failure of the current generation.
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

/// Transition applied to a [`Resource`].
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceAction<T> {
    /// A request tagged with this generation was issued.
    Begin(u64),
    /// A request tagged with this generation resolved.
    Resolve(u64, Result<T, String>),
}

impl<T> Resource<T> {
    /// Generation of the latest issued request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a transition. Returns `false` when a stale resolution was dropped.
    pub fn apply(&mut self, action: ResourceAction<T>) -> bool {
        match action {
            ResourceAction::Begin(generation) => {
                self.generation = generation;
                self.loading = true;
                self.error = None;
                true
            }
            ResourceAction::Resolve(generation, result) => {
                if generation != self.generation {
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(data) => {
                        self.data = Some(data);
                        self.error = None;
                    }
                    Err(message) => self.error = Some(message),
                }
                true
            }
        }
    }
}

impl<T: Clone> Reducible for Resource<T> {
    type Action = ResourceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Monotonic source of request generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationCounter(u64);

impl GenerationCounter {
    /// Issue the next generation.
    pub const fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Latest generation issued.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_keeps_stale_data_visible() {
        let mut counter = GenerationCounter::default();
        let mut resource = Resource::default();
        let first = counter.next();
        resource.apply(ResourceAction::Begin(first));
        resource.apply(ResourceAction::Resolve(first, Ok(vec![1, 2])));
        let second = counter.next();
        resource.apply(ResourceAction::Begin(second));
        assert!(resource.loading);
        assert_eq!(resource.data, Some(vec![1, 2]));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut counter = GenerationCounter::default();
        let mut resource: Resource<&str> = Resource::default();
        let week = counter.next();
        resource.apply(ResourceAction::Begin(week));
        let year = counter.next();
        resource.apply(ResourceAction::Begin(year));
        assert!(resource.apply(ResourceAction::Resolve(year, Ok("year"))));
        assert!(!resource.apply(ResourceAction::Resolve(week, Ok("week"))));
        assert_eq!(resource.data, Some("year"));
        assert!(!resource.loading);
    }

    #[test]
    fn failures_clear_on_next_begin() {
        let mut resource: Resource<u8> = Resource::default();
        resource.apply(ResourceAction::Begin(1));
        resource.apply(ResourceAction::Resolve(1, Err("boom".into())));
        assert_eq!(resource.error.as_deref(), Some("boom"));
        assert!(!resource.loading);
        resource.apply(ResourceAction::Begin(2));
        assert_eq!(resource.error, None);
    }

    #[test]
    fn counter_reports_latest_generation() {
        let mut counter = GenerationCounter::default();
        assert_eq!(counter.current(), 0);
        let issued = counter.next();
        assert_eq!(counter.current(), issued);
    }

    #[test]
    fn reducer_returns_same_rc_for_stale_results() {
        let state = Rc::new(Resource::<u8>::default());
        let begun = Rc::clone(&state).reduce(ResourceAction::Begin(3));
        let stale = Rc::clone(&begun).reduce(ResourceAction::Resolve(2, Ok(9)));
        assert!(Rc::ptr_eq(&begun, &stale));
        let fresh = Rc::clone(&begun).reduce(ResourceAction::Resolve(3, Ok(9)));
        assert_eq!(fresh.data, Some(9));
    }
}
