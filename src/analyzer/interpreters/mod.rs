//! Reference interpreters for the markdown subset.
//!
//! | Interpreter            | Starts at                          | Priority |
//! |------------------------|------------------------------------|----------|
//! | [`HeadingInterpreter`] | `#`-run followed by a space        | 100      |
//! | [`ListInterpreter`]    | `*` or `-` followed by a space     | 100      |
//! | [`BoldInterpreter`]    | `**` with a closing `**` ahead     | 50       |
//! | [`TextInterpreter`]    | any allow-listed token             | 0        |

mod bold;
mod heading;
mod list;
mod text;

pub use bold::BoldInterpreter;
pub use heading::HeadingInterpreter;
pub use list::ListInterpreter;
pub use text::TextInterpreter;

use super::core::Interpreter;

pub const HEADING_PRIORITY: i32 = 100;
pub const LIST_PRIORITY: i32 = 100;
pub const BOLD_PRIORITY: i32 = 50;
pub const TEXT_PRIORITY: i32 = 0;

/// One instance of each reference interpreter, boxed for registration.
pub fn markdown() -> Vec<Box<dyn Interpreter>> {
    vec![
        Box::new(HeadingInterpreter),
        Box::new(ListInterpreter),
        Box::new(BoldInterpreter),
        Box::new(TextInterpreter::default()),
    ]
}
