use log::info;

use crate::storage::{SlotStore, StorageResult};

/// The login switch in front of the app.
///
/// It only remembers whether the clinician pressed "enter" or "leave"; there
/// are no credentials and it protects nothing. The flag is stored as the text
/// `true`/`false`.
pub struct SessionService {
    slots: SlotStore,
    key: String,
    authenticated: bool,
}

impl SessionService {
    pub fn load(slots: SlotStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let authenticated = slots.load_value::<bool>(&key).unwrap_or(false);
        Self {
            slots,
            key,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) -> StorageResult<()> {
        info!("Session opened");
        self.set(true)
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        info!("Session closed");
        self.set(false)
    }

    fn set(&mut self, authenticated: bool) -> StorageResult<()> {
        self.authenticated = authenticated;
        self.slots.save_value(&self.key, &authenticated)
    }
}
