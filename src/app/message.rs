// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feedback;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang pt-BR`).
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Feedback(feedback::Message),
    Navbar(navbar::Message),
    Notification(notifications::Message),
}
