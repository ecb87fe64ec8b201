use std::{fmt::Display, io::Write, ops::Deref};

use crate::types::object::Object;

/// Represents a parsed PDF indirect object.
///
/// PDF indirect objects consist of:
/// - An object number
/// - A generation number
/// - The `obj` keyword
/// - The object content
/// - The `endobj` keyword
#[derive(Debug, PartialEq, Clone)]
pub struct IndirectObject {
    pub id: i64,
    pub gen_id: i64,
    object: Object,
}

/// Represents a PDF indirect object reference.
///
/// PDF references consist of:
/// - An object number
/// - A generation number
/// - The `R` keyword
///
/// A reference is plain data; it is never resolved to the object it names.
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Default, Copy)]
pub struct IndirectReference {
    pub id: i64,
    pub gen_id: i64,
}

impl IndirectObject {
    pub fn new(id: i64, gen_id: i64, object: Object) -> Self {
        Self { id, gen_id, object }
    }

    pub fn get_object(&self) -> &Object {
        &self.object
    }

    pub fn into_object(self) -> Object {
        self.object
    }

    /// The reference other objects would use to point at this one.
    pub fn reference(&self) -> IndirectReference {
        IndirectReference::new(self.id, self.gen_id)
    }

    /// Writes the object as `N G obj\n<value>\nendobj\n`.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{} {} obj", self.id, self.gen_id)?;
        self.object.write(w)?;
        w.write_all(b"\nendobj\n")
    }
}

impl Deref for IndirectObject {
    type Target = Object;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl IndirectReference {
    pub fn new(id: i64, gen_id: i64) -> Self {
        Self { id, gen_id }
    }
}

impl Display for IndirectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen_id)
    }
}
