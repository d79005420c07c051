//! Keyboard polling
//!
//! Browser key events arrive asynchronously; they are queued here and
//! drained once per frame by the animation loop.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Keys the animation responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "Escape" | "Esc" => Some(Key::Escape),
            " " | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the animation loop
    Exit,
    /// Start the life cycle over from a fresh seed
    Restart,
}

impl Command {
    pub fn from_key(key: Key) -> Command {
        match key {
            Key::Escape => Command::Exit,
            Key::Space => Command::Restart,
        }
    }
}

/// Shared FIFO of pressed keys; clones refer to the same queue
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    pending: Rc<RefCell<VecDeque<Key>>>,
    closed: Rc<Cell<bool>>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, key: Key) {
        if !self.is_closed() {
            self.pending.borrow_mut().push_back(key);
        }
    }

    /// Queue a raw DOM key name. Returns false if the key is not bound
    /// or the queue has been closed.
    pub fn push_dom_key(&self, key: &str) -> bool {
        if self.is_closed() {
            return false;
        }
        match Key::from_dom(key) {
            Some(key) => {
                self.push(key);
                true
            }
            None => false,
        }
    }

    /// Stop accepting keys once the animation has exited
    pub fn close(&self) {
        self.closed.set(true);
        self.pending.borrow_mut().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    /// Take every queued key as commands, oldest first
    pub fn poll(&self) -> Vec<Command> {
        self.pending
            .borrow_mut()
            .drain(..)
            .map(Command::from_key)
            .collect()
    }
}
