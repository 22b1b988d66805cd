//! Listener registry
//!
//! Callbacks are kept in registration order and invoked synchronously.

/// Handle returned by `subscribe`, used to detach the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct ListenerRegistry<F: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<F>)>,
}

impl<F: ?Sized> Default for ListenerRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> ListenerRegistry<F> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<F>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.entries.iter_mut().map(|(_, listener)| listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Callback = dyn FnMut(&str);

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry: ListenerRegistry<Callback> = ListenerRegistry::new();

        let first = Rc::clone(&log);
        registry.subscribe(Box::new(move |msg: &str| first.borrow_mut().push(format!("a:{}", msg))));
        let second = Rc::clone(&log);
        registry.subscribe(Box::new(move |msg: &str| second.borrow_mut().push(format!("b:{}", msg))));

        for listener in registry.iter_mut() {
            listener("x");
        }
        assert_eq!(*log.borrow(), vec!["a:x".to_string(), "b:x".to_string()]);
    }

    #[test]
    fn unsubscribe_detaches_only_that_listener() {
        let hits = Rc::new(RefCell::new(0));
        let mut registry: ListenerRegistry<Callback> = ListenerRegistry::new();
        assert!(registry.is_empty());

        let h1 = Rc::clone(&hits);
        let id = registry.subscribe(Box::new(move |_: &str| *h1.borrow_mut() += 1));
        let h2 = Rc::clone(&hits);
        registry.subscribe(Box::new(move |_: &str| *h2.borrow_mut() += 10));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());

        for listener in registry.iter_mut() {
            listener("x");
        }
        assert_eq!(*hits.borrow(), 10);
    }
}
