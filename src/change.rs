//! Notifications sent whenever the stored appointments change
//!
//! UI layers subscribe to these instead of sharing mutable collections with the store.

use std::fmt::{Display, Error, Formatter};

use crate::item::ItemId;

/// How many notifications a slow subscriber may lag behind before it starts missing some
const CHANNEL_CAPACITY: usize = 64;

/// A change that happened to a single appointment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Added(ItemId),
    Removed(ItemId),
    /// Either the appointment itself or its properties have been modified
    Updated(ItemId),
}

impl Change {
    pub fn id(&self) -> &ItemId {
        match self {
            Change::Added(id) | Change::Removed(id) | Change::Updated(id) => id,
        }
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Change::Added(id) => write!(f, "added {}", id),
            Change::Removed(id) => write!(f, "removed {}", id),
            Change::Updated(id) => write!(f, "updated {}", id),
        }
    }
}


/// See [`change_channel`]
pub type ChangeSender = tokio::sync::broadcast::Sender<Change>;
/// See [`change_channel`]
pub type ChangeReceiver = tokio::sync::broadcast::Receiver<Change>;

/// Create a channel that carries [`Change`]s to any number of subscribers.
/// Sending never blocks, and does not require an async runtime
pub fn change_channel() -> (ChangeSender, ChangeReceiver) {
    tokio::sync::broadcast::channel(CHANNEL_CAPACITY)
}

/// Sends notifications, if anyone is listening
#[derive(Debug)]
pub struct ChangeNotifier {
    sender: ChangeSender,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, _) = change_channel();
        Self { sender }
    }

    pub fn subscribe(&self) -> ChangeReceiver {
        self.sender.subscribe()
    }

    pub fn notify(&self, change: Change) {
        log::trace!("Change: {}", change);
        // Having no subscriber is not an error
        let _ = self.sender.send(change);
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
