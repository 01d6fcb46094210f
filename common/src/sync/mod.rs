//! Mutation → reload sequencing.
//!
//! A user action becomes an [`Action`]. The [`Controller`] decides whether it
//! may be sent (confirmation, in-flight guard), [`execute`] performs the
//! request and the reloads its [`ActionKind`] invalidates, and the resulting
//! [`Completion`] is folded back into the store on the UI thread.
//!
//! `begin` and `complete` are synchronous and `execute` borrows only the API,
//! so a UI framework can hold the controller in component state and run the
//! future detached.

mod action;
mod controller;
mod detail;
mod execute;
mod guard;
mod notice;

pub use action::{Action, ActionKey, ActionKind, Collection, Target, View, fetch_plan};
pub use controller::{Controller, Dispatch};
pub use detail::{Detail, DetailRequest, fetch_detail};
pub use execute::{Completion, Reload, execute};
pub use guard::InFlight;
pub use notice::{Notice, NoticeLevel};
