mod dictionary;
mod indirect_object;
mod name;
mod numeric;
mod object;
mod stream;
mod string;

pub use dictionary::Dictionary;
pub use indirect_object::{IndirectObject, IndirectReference};
pub use name::Name;
pub use numeric::{Numeric, format_real};
pub use object::Object;
pub use stream::{Filter, Stream};
pub use string::PdfString;
