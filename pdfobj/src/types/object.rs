use std::io::Write;

use crate::{
    error::{Error, Result},
    types::{Dictionary, IndirectReference, Name, PdfString, Stream, format_real},
};

/// Represents all fundamental object types of PDF syntax.
///
/// PDF documents are built from a hierarchy of objects that can be:
/// - Simple atomic values (boolean, integer, real, string, name, null)
/// - Complex structures (array, dictionary, stream)
/// - Indirect references to objects defined elsewhere
///
/// Composite variants own their children; two objects are equal only when
/// they are the same variant with equal payloads.
///
/// # Examples
/// true                       // Boolean
/// 42                         // Integer
/// 3.14                       // Real
/// (Hello World)              // String
/// /Type                      // Name
/// null                       // Null
/// [1 2 3]                    // Array
/// << /Key /Value >>          // Dictionary
/// << /Length 10 >> stream ... endstream // Stream
/// 1 0 R                      // Indirect Reference
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    /// Null object represented by the 'null' literal
    Null,
    /// A boolean value (true/false literal)
    Boolean(bool),
    /// A 64-bit signed integer
    Integer(i64),
    /// A real number, compared exactly
    Real(f64),
    /// Literal string contents between the outer parentheses
    String(PdfString),
    /// Name bytes following the '/'
    Name(Name),
    /// Array object, contains 0 or more Objects
    Array(Vec<Object>),
    /// Dictionary object, contains key-value pairs
    Dictionary(Dictionary),
    /// Stream object, contains key-value pairs and byte data
    Stream(Stream),
    /// Indirect reference to an object, used to reference objects defined elsewhere in the PDF
    Reference(IndirectReference),
}

impl Object {
    /// Short human-readable name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(_) => "String",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream(_) => "Stream",
            Object::Reference(_) => "Indirect reference",
        }
    }

    /// Checks if the object is a null object.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        Error::UnexpectedObjectType {
            expected,
            got: self.type_name(),
        }
    }

    /// Attempts to convert the object to a boolean value.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedObjectType` if the object is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Object::Boolean(data) => Ok(*data),
            _ => Err(self.unexpected("Boolean")),
        }
    }

    /// Attempts to convert the object to an integer.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedObjectType` if the object is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Object::Integer(data) => Ok(*data),
            _ => Err(self.unexpected("Integer")),
        }
    }

    /// Attempts to convert the object to a floating-point number.
    ///
    /// Succeeds for both `Object::Real` and `Object::Integer`.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedObjectType` if the object is not numeric.
    pub fn as_real(&self) -> Result<f64> {
        match self {
            Object::Integer(data) => Ok(*data as f64),
            Object::Real(data) => Ok(*data),
            _ => Err(self.unexpected("Real")),
        }
    }

    pub fn as_name(&self) -> Result<&Name> {
        match self {
            Object::Name(name) => Ok(name),
            _ => Err(self.unexpected("Name")),
        }
    }

    pub fn as_string(&self) -> Result<&PdfString> {
        match self {
            Object::String(data) => Ok(data),
            _ => Err(self.unexpected("String")),
        }
    }

    pub fn as_array(&self) -> Result<&[Object]> {
        match self {
            Object::Array(data) => Ok(data),
            _ => Err(self.unexpected("Array")),
        }
    }

    /// Attempts to convert the object to a dictionary.
    ///
    /// A stream yields its dictionary.
    pub fn as_dictionary(&self) -> Result<&Dictionary> {
        match self {
            Object::Dictionary(data) => Ok(data),
            Object::Stream(stream) => Ok(&stream.dictionary),
            _ => Err(self.unexpected("Dictionary")),
        }
    }

    pub fn as_stream(&self) -> Result<&Stream> {
        match self {
            Object::Stream(stream) => Ok(stream),
            _ => Err(self.unexpected("Stream")),
        }
    }

    pub fn as_reference(&self) -> Result<&IndirectReference> {
        match self {
            Object::Reference(id) => Ok(id),
            _ => Err(self.unexpected("Indirect reference")),
        }
    }

    /// Serializes the object back to PDF syntax.
    ///
    /// The output parses back to an equal object for everything but streams,
    /// whose data is written decoded while the dictionary still names the filter.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match self {
            Object::Null => w.write_all(b"null"),
            Object::Boolean(true) => w.write_all(b"true"),
            Object::Boolean(false) => w.write_all(b"false"),
            Object::Integer(data) => write!(w, "{data}"),
            Object::Real(data) => w.write_all(format_real(*data).as_bytes()),
            Object::String(data) => data.write(w),
            Object::Name(name) => name.write(w),
            Object::Array(items) => {
                w.write_all(b"[ ")?;
                for item in items {
                    item.write(w)?;
                    w.write_all(b" ")?;
                }
                w.write_all(b"]")
            }
            Object::Dictionary(dictionary) => dictionary.write(w),
            Object::Stream(stream) => stream.write(w),
            Object::Reference(reference) => write!(w, "{reference}"),
        }
    }
}
