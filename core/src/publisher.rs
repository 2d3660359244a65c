use crate::GameState;

/// Handle returned by [`StatePublisher::attach`], used to detach later.
pub type ObserverId = u64;

/// Callback receiving every published snapshot. Observers get a borrow of a
/// publisher-owned copy, never the engine's live state.
pub type Observer = Box<dyn FnMut(&GameState)>;

/// Ordered fan-out of state snapshots with last-value replay: a newly
/// attached observer immediately receives the most recent snapshot, and
/// every publish reaches observers in attachment order.
pub struct StatePublisher {
    latest: GameState,
    observers: Vec<(ObserverId, Observer)>,
    next_id: ObserverId,
}

impl StatePublisher {
    pub fn new(initial: GameState) -> Self {
        Self {
            latest: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> &GameState {
        &self.latest
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, mut observer: Observer) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        observer(&self.latest);
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer; returns whether it was attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Stores a copy of `state` and delivers it to every observer.
    pub fn publish(&mut self, state: &GameState) {
        self.latest = state.clone();
        for (_, observer) in &mut self.observers {
            observer(&self.latest);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::GameStatus;

    fn recording() -> (Rc<RefCell<Vec<GameStatus>>>, Observer) {
        let seen: Rc<RefCell<Vec<GameStatus>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let observer: Observer = Box::new(move |state| sink.borrow_mut().push(state.status));
        (seen, observer)
    }

    #[test]
    fn attach_replays_the_latest_snapshot() {
        let mut publisher = StatePublisher::new(GameState::placeholder());
        let (seen, observer) = recording();

        publisher.attach(observer);

        assert_eq!(*seen.borrow(), vec![GameStatus::NotStarted]);
    }

    #[test]
    fn publishes_reach_observers_in_attachment_order() {
        let mut publisher = StatePublisher::new(GameState::placeholder());
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        for name in ["first", "second"] {
            let sink = Rc::clone(&order);
            publisher.attach(Box::new(move |_| sink.borrow_mut().push(name)));
        }
        order.borrow_mut().clear();

        publisher.publish(&GameState::placeholder());

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn detached_observers_stop_receiving() {
        let mut publisher = StatePublisher::new(GameState::placeholder());
        let (seen, observer) = recording();

        let id = publisher.attach(observer);
        assert!(publisher.detach(id));
        assert!(!publisher.detach(id));
        publisher.publish(&GameState::placeholder());

        // only the replay-of-one from attach
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(publisher.observer_count(), 0);
    }

    #[test]
    fn latest_tracks_the_last_publish() {
        let mut publisher = StatePublisher::new(GameState::placeholder());
        let mut state = GameState::placeholder();
        state.status = GameStatus::Playing;

        publisher.publish(&state);

        assert_eq!(publisher.latest().status, GameStatus::Playing);
    }
}
