use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

use crate::common::Message;
use crate::error::{ChatError, Result};

type SubscriberId = u64;

struct Subscriber {
    id: SubscriberId,
    sender: mpsc::UnboundedSender<Vec<u8>>,
}

#[derive(Default)]
struct Registry {
    next_id: SubscriberId,
    topics: HashMap<String, Vec<Subscriber>>,
}

/// In-process, best-effort publish/subscribe bus keyed by topic name.
///
/// Nothing is retained: a payload reaches the handles open on its topic at
/// the moment of publishing and is then gone. Cloning the bus shares the
/// same registry.
#[derive(Clone, Default)]
pub struct BroadcastBus {
    registry: Arc<Mutex<Registry>>,
}

impl BroadcastBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new handle on `topic`. Every call yields a distinct member.
    pub fn subscribe(&self, topic: &str) -> ChannelHandle {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut registry = self.registry();
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .topics
            .entry(topic.to_string())
            .or_default()
            .push(Subscriber { id, sender });

        log::debug!("Subscriber {id} opened on `{topic}`");

        ChannelHandle {
            bus: self.clone(),
            topic: topic.to_string(),
            id,
            receiver,
            closed: false,
        }
    }

    /// Number of open handles on `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry().topics.get(topic).map_or(0, Vec::len)
    }

    pub fn topic_count(&self) -> usize {
        self.registry().topics.len()
    }

    fn publish(&self, topic: &str, from: SubscriberId, payload: &[u8]) -> usize {
        let mut registry = self.registry();
        let Some(subscribers) = registry.topics.get_mut(topic) else {
            return 0;
        };

        let mut delivered = 0;
        subscribers.retain(|subscriber| {
            if subscriber.id == from {
                return true;
            }
            match subscriber.sender.send(payload.to_vec()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => {
                    log::debug!("Pruning dead subscriber {} on `{topic}`", subscriber.id);
                    false
                }
            }
        });

        if subscribers.is_empty() {
            registry.topics.remove(topic);
        }
        delivered
    }

    fn unsubscribe(&self, topic: &str, id: SubscriberId) {
        let mut registry = self.registry();
        if let Some(subscribers) = registry.topics.get_mut(topic) {
            subscribers.retain(|subscriber| subscriber.id != id);
            if subscribers.is_empty() {
                registry.topics.remove(topic);
            }
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // The registry holds no invariant a panicking holder could break.
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// One tab's membership on a named channel.
///
/// Published messages go to every other open handle on the same topic, never
/// back to this one. Dropping the handle closes it.
pub struct ChannelHandle {
    bus: BroadcastBus,
    topic: String,
    id: SubscriberId,
    receiver: mpsc::UnboundedReceiver<Vec<u8>>,
    closed: bool,
}

impl ChannelHandle {
    pub fn name(&self) -> &str {
        &self.topic
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Serializes `message` and fans it out. Returns how many other handles
    /// it reached.
    pub fn post(&self, message: &Message) -> Result<usize> {
        if self.closed {
            return Err(ChatError::ChannelClosed(self.topic.clone()));
        }
        let payload = serde_json::to_vec(message)?;
        let delivered = self.bus.publish(&self.topic, self.id, &payload);
        log::debug!(
            "Published {} on `{}` to {delivered} receiver(s)",
            message.id,
            self.topic
        );
        Ok(delivered)
    }

    /// Next pending message, if any. Never blocks.
    pub fn try_recv(&mut self) -> Option<Message> {
        if self.closed {
            return None;
        }
        while let Ok(payload) = self.receiver.try_recv() {
            if let Some(message) = self.decode(&payload) {
                return Some(message);
            }
        }
        None
    }

    /// Waits for the next message. Resolves to `None` once the handle is
    /// closed.
    pub async fn recv(&mut self) -> Option<Message> {
        while !self.closed {
            let payload = self.receiver.recv().await?;
            if let Some(message) = self.decode(&payload) {
                return Some(message);
            }
        }
        None
    }

    /// Leaves the topic. Pending payloads are discarded. Closing twice is a
    /// no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.bus.unsubscribe(&self.topic, self.id);
        self.receiver.close();
        while self.receiver.try_recv().is_ok() {}
        log::debug!("Subscriber {} closed on `{}`", self.id, self.topic);
    }

    fn decode(&self, payload: &[u8]) -> Option<Message> {
        match serde_json::from_slice::<Message>(payload) {
            Ok(message) => Some(message),
            Err(err) => {
                log::warn!("Dropping malformed payload on `{}`: {err}", self.topic);
                None
            }
        }
    }
}

impl Drop for ChannelHandle {
    fn drop(&mut self) {
        self.close();
    }
}
