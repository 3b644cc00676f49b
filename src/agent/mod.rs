//! Decision-making seats: the [`Agent`] trait and its human, scripted and
//! random implementations.

mod agent;
mod human;
mod random;
mod scripted;

pub use agent::{validate_snapshot, Agent, PlaceholderAgent};
pub use human::HumanAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
