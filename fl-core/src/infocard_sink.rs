use fl_domain::{Infocard, InfocardKey};
#[cfg(test)]
use mockall::automock;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Receives infocards resolved while building the catalog, for rendering elsewhere.
#[cfg_attr(test, automock)]
pub trait InfocardSink {
    fn register(&self, key: InfocardKey, infocard: Infocard);
}

#[derive(Debug, Default)]
pub struct InMemoryInfocards {
    infocards: RefCell<BTreeMap<InfocardKey, Infocard>>,
}

impl InMemoryInfocards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &InfocardKey) -> Option<Infocard> {
        self.infocards.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.infocards.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.infocards.borrow().is_empty()
    }

    pub fn entries(&self) -> BTreeMap<InfocardKey, Infocard> {
        self.infocards.borrow().clone()
    }
}

impl InfocardSink for InMemoryInfocards {
    fn register(&self, key: InfocardKey, infocard: Infocard) {
        self.infocards.borrow_mut().insert(key, infocard);
    }
}
