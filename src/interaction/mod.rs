mod keyboard;

pub use keyboard::{Command, Key, KeyQueue};
