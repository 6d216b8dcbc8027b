//! Event registry: which callbacks this bridge has attached to the instance.

use std::collections::BTreeMap;

use bevy_mapbridge_engine::prelude::*;

/// Key of an attached callback.
///
/// The internal readiness handler lives under its own key, so an application
/// callback using the same event name never replaces it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistryKey {
    Internal(String),
    User(String),
}

impl RegistryKey {
    /// Engine event name the callback is attached under.
    pub fn event_name(&self) -> &str {
        match self {
            RegistryKey::Internal(name) | RegistryKey::User(name) => name,
        }
    }
}

/// One attach or detach against the instance's event subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum EventCall {
    Attach {
        key: RegistryKey,
        callback: EventCallback,
    },
    Detach {
        key: RegistryKey,
        callback: EventCallback,
    },
}

impl EventCall {
    pub fn apply(&self, events: &dyn MapEvents) {
        match self {
            EventCall::Attach { key, callback } => events.add(key.event_name(), callback),
            EventCall::Detach { key, callback } => events.remove(key.event_name(), callback),
        }
    }
}

/// Callbacks currently attached, one per key.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    attached: BTreeMap<RegistryKey, EventCallback>,
}

impl EventRegistry {
    /// Calls that turn the attached set into `desired`.
    ///
    /// Detaches come first so a replaced callback is never attached alongside
    /// its predecessor. Keys whose callback is unchanged produce no call.
    pub fn plan(&self, desired: &BTreeMap<RegistryKey, EventCallback>) -> Vec<EventCall> {
        let mut detaches = Vec::new();
        let mut attaches = Vec::new();

        for (key, callback) in &self.attached {
            if desired.get(key) != Some(callback) {
                detaches.push(EventCall::Detach {
                    key: key.clone(),
                    callback: callback.clone(),
                });
            }
        }

        for (key, callback) in desired {
            if self.attached.get(key) != Some(callback) {
                attaches.push(EventCall::Attach {
                    key: key.clone(),
                    callback: callback.clone(),
                });
            }
        }

        detaches.extend(attaches);
        detaches
    }

    /// Calls that detach everything.
    pub fn plan_detach_all(&self) -> Vec<EventCall> {
        self.plan(&BTreeMap::new())
    }

    /// Record an issued call.
    pub fn commit(&mut self, call: &EventCall) {
        match call {
            EventCall::Attach { key, callback } => {
                self.attached.insert(key.clone(), callback.clone());
            }
            EventCall::Detach { key, callback } => {
                if self.attached.get(key) == Some(callback) {
                    self.attached.remove(key);
                }
            }
        }
    }

    pub fn get(&self, key: &RegistryKey) -> Option<&EventCallback> {
        self.attached.get(key)
    }

    pub fn contains(&self, key: &RegistryKey) -> bool {
        self.attached.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RegistryKey> {
        self.attached.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> RegistryKey {
        RegistryKey::User(name.to_string())
    }

    fn commit_all(registry: &mut EventRegistry, calls: &[EventCall]) {
        for call in calls {
            registry.commit(call);
        }
    }

    #[test]
    fn test_identical_pairs_are_not_reattached() {
        let mut registry = EventRegistry::default();
        let on_click = EventCallback::new(|_| {});
        let desired = BTreeMap::from([(user("click"), on_click)]);

        let calls = registry.plan(&desired);
        commit_all(&mut registry, &calls);

        assert_eq!(calls.len(), 1);
        assert!(registry.plan(&desired).is_empty());
    }

    #[test]
    fn test_replaced_callback_detaches_before_attach() {
        let mut registry = EventRegistry::default();
        let old = EventCallback::new(|_| {});
        let new = EventCallback::new(|_| {});
        let calls = registry.plan(&BTreeMap::from([(user("data"), old.clone())]));
        commit_all(&mut registry, &calls);

        let calls = registry.plan(&BTreeMap::from([(user("data"), new.clone())]));

        assert_eq!(
            calls,
            vec![
                EventCall::Detach {
                    key: user("data"),
                    callback: old,
                },
                EventCall::Attach {
                    key: user("data"),
                    callback: new,
                },
            ]
        );
    }

    #[test]
    fn test_internal_and_user_keys_coexist() {
        let mut registry = EventRegistry::default();
        let internal = EventCallback::new(|_| {});
        let from_app = EventCallback::new(|_| {});
        let desired = BTreeMap::from([
            (RegistryKey::Internal("ready".to_string()), internal),
            (user("ready"), from_app),
        ]);

        let calls = registry.plan(&desired);
        commit_all(&mut registry, &calls);

        assert_eq!(registry.len(), 2);
        assert!(registry.keys().all(|key| key.event_name() == "ready"));
    }

    #[test]
    fn test_detach_all_empties_registry() {
        let mut registry = EventRegistry::default();
        let desired = BTreeMap::from([
            (user("click"), EventCallback::new(|_| {})),
            (user("data"), EventCallback::new(|_| {})),
        ]);
        let calls = registry.plan(&desired);
        commit_all(&mut registry, &calls);

        let calls = registry.plan_detach_all();
        commit_all(&mut registry, &calls);

        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| matches!(c, EventCall::Detach { .. })));
        assert!(registry.is_empty());
    }
}
