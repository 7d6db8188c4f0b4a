//! Selection state shared between a host view and its segmented controls.
//!
//! The host owns a [`SelectionModel`] and lends it to controls for the frame
//! in which they are shown. Host code observes changes by subscribing a
//! callback; immediate-mode widgets observe by comparing [`SelectionModel::generation`]
//! with the generation they last rendered.

use std::fmt;

/// Handle returned by [`SelectionModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A single write to a [`SelectionModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<T> {
    pub previous: T,
    pub current: T,
    /// Generation after the write.
    pub generation: u64,
}

impl<T: PartialEq> SelectionChange<T> {
    /// True when the write stored the value that was already selected.
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

type Observer<T> = Box<dyn FnMut(&SelectionChange<T>)>;

/// The currently selected option plus its change observers.
///
/// Every call to [`set`](Self::set) bumps the generation and notifies all
/// observers, including writes of the value that is already selected.
pub struct SelectionModel<T> {
    value: T,
    generation: u64,
    observers: Vec<(ObserverId, Observer<T>)>,
    next_observer: u64,
}

impl<T> SelectionModel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            generation: 0,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The selected option.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of writes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Register a callback run after every write, in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&SelectionChange<T>) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone + fmt::Debug> SelectionModel<T> {
    /// Store a new selection and notify observers.
    pub fn set(&mut self, value: T) -> SelectionChange<T> {
        let previous = std::mem::replace(&mut self.value, value);
        self.generation += 1;

        let change = SelectionChange {
            previous,
            current: self.value.clone(),
            generation: self.generation,
        };
        log::debug!(
            "Selection {:?} -> {:?} (generation {})",
            change.previous,
            change.current,
            change.generation
        );

        for (_, observer) in &mut self.observers {
            observer(&change);
        }
        change
    }
}

impl<T: Default> Default for SelectionModel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectionModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("value", &self.value)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        A,
        C,
    }

    #[test]
    fn test_set_replaces_value() {
        let mut model = SelectionModel::new(Tab::A);
        let change = model.set(Tab::C);
        assert_eq!(model.get(), &Tab::C);
        assert_eq!(change.previous, Tab::A);
        assert_eq!(change.current, Tab::C);
        assert!(!change.is_noop());
    }

    #[test]
    fn test_repeated_set_is_idempotent_but_counted() {
        let mut model = SelectionModel::new(Tab::A);
        model.set(Tab::C);
        let change = model.set(Tab::C);
        assert_eq!(model.get(), &Tab::C);
        assert!(change.is_noop());
        assert_eq!(model.generation(), 2);
    }

    #[test]
    fn test_observers_notified_on_every_set() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut model = SelectionModel::new(Tab::A);
        let sink = seen.clone();
        model.subscribe(move |change: &SelectionChange<Tab>| {
            sink.borrow_mut().push((change.current, change.generation));
        });

        model.set(Tab::C);
        model.set(Tab::C);
        model.set(Tab::A);

        assert_eq!(
            *seen.borrow(),
            vec![(Tab::C, 1), (Tab::C, 2), (Tab::A, 3)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut model = SelectionModel::new(Tab::A);
        let sink = count.clone();
        let id = model.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(model.observer_count(), 1);

        model.set(Tab::C);
        assert!(model.unsubscribe(id));
        assert!(!model.unsubscribe(id));
        model.set(Tab::A);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_observers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut model = SelectionModel::new(Tab::A);
        for tag in ["first", "second"] {
            let sink = order.clone();
            model.subscribe(move |_| sink.borrow_mut().push(tag));
        }
        model.set(Tab::C);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
