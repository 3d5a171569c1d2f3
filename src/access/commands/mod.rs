//! Voice commands - mapping spoken phrases to actions
//!
//! The table is filled from three places:
//! - the fixed navigation and reading vocabulary registered at start-up
//! - "click <label>" commands derived from the controls visible on the page
//! - anything the host registers explicitly
//!
//! Example phrases:
//! - "go to dashboard" -> navigate to `/`
//! - "start reading" -> read the current page aloud
//! - "click submit answer" -> invoke the Submit Answer control

mod builtin;
mod table;

pub use builtin::{
    BUILTIN_COMMANDS, BuiltinCommand, CommandCategory, CommandContext, builtin_actions,
    commands_by_category,
};
pub use table::{CommandMatch, CommandOrigin, CommandTable, MatchKind, normalize_phrase};
