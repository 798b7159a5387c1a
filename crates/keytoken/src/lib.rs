//! keytoken: normalized key names for chord matching.
//!
//! - `KeyToken`: a lowercase key name such as `ctrl`, `shift`, `p`, `space`, `esc`.
//! - `ChordSpec`: a parsed `ctrl+shift+k` style specification.
//! - `KeyEvent`: a raw key event as delivered by the host.
//!
//! Raw host key names are normalized through a small fixed table (see
//! [`KeyToken::from_raw`]); no whitelist of known keys is applied, so any
//! token the host produces can be tracked.

mod chord;
mod error;
mod event;
mod token;

pub use chord::ChordSpec;
pub use error::KeyTokenError;
pub use event::KeyEvent;
pub use token::KeyToken;
