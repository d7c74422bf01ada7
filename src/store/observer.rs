use dioxus_logger::tracing;

/// Receives change notifications from a store
pub trait Observer<E> {
    fn notify(&self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(&E),
{
    fn notify(&self, event: &E) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of observers for a single event type.
///
/// Observers are notified in subscription order.
pub struct Subscribers<E> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn Observer<E>>)>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }
}

impl<E: std::fmt::Debug> Subscribers<E> {
    pub fn subscribe(&mut self, observer: impl Observer<E> + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn emit(&self, event: &E) {
        tracing::debug!(?event, observers = self.observers.len(), "notifying observers");

        for (_, observer) in &self.observers {
            observer.notify(event);
        }
    }
}

impl<E> std::fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("observers", &self.observers.len())
            .finish()
    }
}
