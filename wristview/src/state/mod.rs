//! Reactive shared state.
//!
//! [`Entity<T>`] is a cheaply clonable handle to shared state. Updating it
//! notifies subscribers, which the application loop uses to redraw the
//! current view only when something actually changed.

use std::sync::{Arc, RwLock, Weak};
use tokio::sync::watch;

/// Handle to a piece of shared application state.
pub struct Entity<T: ?Sized + Send + Sync> {
    inner: Arc<RwLock<T>>,
    tx: watch::Sender<()>,
}

/// A weak handle to an entity, for tasks that must not keep it alive.
pub struct WeakEntity<T: ?Sized + Send + Sync> {
    inner: Weak<RwLock<T>>,
    tx: watch::Sender<()>,
}

impl<T: Send + Sync> Entity<T> {
    /// Create a new entity with the given initial value.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            inner: Arc::new(RwLock::new(value)),
            tx,
        }
    }
}

impl<T: ?Sized + Send + Sync> Entity<T> {
    /// Mutate the inner value and notify subscribers.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let res = f(&mut *guard);
        drop(guard);
        let _ = self.tx.send(());
        Ok(res)
    }

    /// Read the inner value.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }

    /// Downgrade to a weak handle.
    pub fn downgrade(&self) -> WeakEntity<T> {
        WeakEntity {
            inner: Arc::downgrade(&self.inner),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

impl<T: ?Sized + Send + Sync> WeakEntity<T> {
    /// Upgrade to a strong handle, if the entity is still alive.
    pub fn upgrade(&self) -> Option<Entity<T>> {
        self.inner.upgrade().map(|inner| Entity {
            inner,
            tx: watch::Sender::clone(&self.tx),
        })
    }

    /// Update the entity if it is still alive.
    pub fn update<F, R>(&self, f: F) -> Option<crate::Result<R>>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.upgrade().map(|entity| entity.update(f))
    }
}

impl<T: ?Sized + Send + Sync> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

impl<T: ?Sized + Send + Sync> Clone for WeakEntity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_notifies_subscribers() {
        let entity = Entity::new(0u32);
        let mut rx = entity.subscribe();

        entity.update(|n| *n += 1).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(entity.read(|n| *n).unwrap(), 1);
    }

    #[test]
    fn weak_handle_dies_with_the_entity() {
        let entity = Entity::new(String::from("alive"));
        let weak = entity.downgrade();
        assert!(weak.upgrade().is_some());

        drop(entity);
        assert!(weak.upgrade().is_none());
        assert!(weak.update(|s| s.clear()).is_none());
    }
}
