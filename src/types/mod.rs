/*! Line and token types

Every input line is classified into an [InputLine], carrying either a [Token] or a [MalformedRecord].
!*/
mod line;
mod token;

pub use line::{InputLine, MalformedRecord, MARKUP_PREFIX, MIN_FIELDS};
pub use token::Token;
