//! Confirmer Implementations

mod terminal;

pub use terminal::TerminalConfirmer;
