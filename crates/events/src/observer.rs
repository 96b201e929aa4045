//! Synchronous observer registry.

use serde::{Deserialize, Serialize};

/// Handle returned by [`ObserverList::subscribe`], used to unsubscribe.
///
/// Ids are unique per list and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Callback<M> = Box<dyn Fn(&M)>;

/// Ordered list of callbacks observing messages of type `M`.
///
/// - No IO / no async
/// - Delivery happens inside [`ObserverList::notify`], before it returns
/// - Each live registration receives each message exactly once
///
/// The list owns the callbacks, not whatever they capture. A subscriber that
/// goes away should call [`ObserverList::unsubscribe`].
pub struct ObserverList<M: ?Sized> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Callback<M>)>,
}

impl<M: ?Sized> ObserverList<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Registrations are additive; registering the same
    /// closure twice delivers twice.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&M) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a registration. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Deliver `message` to every registered callback, in registration order.
    ///
    /// Returns the number of callbacks invoked.
    pub fn notify(&self, message: &M) -> usize {
        for (_, callback) in &self.observers {
            callback(message);
        }
        self.observers.len()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<M: ?Sized> Default for ObserverList<M> {
    fn default() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }
}

impl<M: ?Sized> core::fmt::Debug for ObserverList<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ids: Vec<SubscriptionId> = self.observers.iter().map(|(id, _)| *id).collect();
        f.debug_struct("ObserverList")
            .field("subscriptions", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&str)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::clone(&log);
        let make = move |tag: &str| -> Box<dyn Fn(&str)> {
            let log = Rc::clone(&shared);
            let tag = tag.to_string();
            Box::new(move |msg: &str| log.borrow_mut().push(format!("{tag}:{msg}")))
        };
        (log, make)
    }

    #[test]
    fn notify_without_subscribers_is_a_no_op() {
        let list: ObserverList<str> = ObserverList::new();
        assert!(list.is_empty());
        assert_eq!(list.notify("shipped"), 0);
    }

    #[test]
    fn delivers_in_registration_order_exactly_once() {
        let (log, make) = recorder();
        let mut list: ObserverList<str> = ObserverList::new();
        let a = make("a");
        let b = make("b");
        let c = make("c");
        list.subscribe(move |m| a(m));
        list.subscribe(move |m| b(m));
        list.subscribe(move |m| c(m));

        assert_eq!(list.notify("paid"), 3);
        assert_eq!(*log.borrow(), vec!["a:paid", "b:paid", "c:paid"]);
    }

    #[test]
    fn unsubscribed_callback_is_not_invoked() {
        let (log, make) = recorder();
        let mut list: ObserverList<str> = ObserverList::new();
        let a = make("a");
        let b = make("b");
        let first = list.subscribe(move |m| a(m));
        list.subscribe(move |m| b(m));

        assert!(list.unsubscribe(first));
        assert!(!list.unsubscribe(first));
        assert_eq!(list.len(), 1);

        list.notify("done");
        assert_eq!(*log.borrow(), vec!["b:done"]);
    }

    #[test]
    fn ids_are_not_reused_after_unsubscribe() {
        let mut list: ObserverList<str> = ObserverList::new();
        let first = list.subscribe(|_| {});
        list.unsubscribe(first);
        let second = list.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn debug_lists_subscription_ids() {
        let mut list: ObserverList<str> = ObserverList::new();
        list.subscribe(|_| {});
        assert_eq!(format!("{list:?}"), "ObserverList { subscriptions: [SubscriptionId(0)] }");
    }
}
