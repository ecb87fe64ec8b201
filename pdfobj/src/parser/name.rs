use nom::{IResult, Parser as _, bytes::complete::take_while};

use crate::{
    parser::{Parser, whitespace::valid_name_char},
    types::Name,
};

/// Takes the bytes of a name token, up to the first delimiter or whitespace.
///
/// `#xx` escapes are left as they are.
pub fn name_token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while(valid_name_char).parse(input)
}

impl Parser<'_> {
    /// Reads a name token starting right after its `/`.
    ///
    /// The terminating delimiter or whitespace is not consumed. An empty token
    /// yields the empty name.
    pub fn get_name_token(&mut self) -> Name {
        self.lex(name_token).map(Name::from).unwrap_or_default()
    }
}
