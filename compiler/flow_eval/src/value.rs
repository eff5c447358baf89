//! Runtime values and the type helper.
//!
//! Type names are derived from the value itself; there is no separate static
//! type. `ParsedType` annotations are checked against [`Value::matches`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use flow_ir::ParsedType;

use crate::scope::ScopeId;

/// Instance scopes whose last handle was dropped, waiting to be freed by the
/// symbol table.
pub(crate) type ReleaseQueue = Rc<RefCell<Vec<ScopeId>>>;

/// Shared by every handle to one instance. Dropping the last handle queues
/// the instance scope for release.
#[derive(Debug)]
struct InstanceToken {
    scope: ScopeId,
    releases: Weak<RefCell<Vec<ScopeId>>>,
}

impl Drop for InstanceToken {
    fn drop(&mut self) {
        if let Some(queue) = self.releases.upgrade() {
            if let Ok(mut queue) = queue.try_borrow_mut() {
                queue.push(self.scope);
            }
        }
    }
}

/// A class instance: its class name plus the scope holding its fields and
/// method table.
///
/// Handles are reference counted; the instance scope lives as long as any
/// clone of the handle does.
#[derive(Clone, Debug)]
pub struct ObjectHandle {
    pub class: String,
    pub scope: ScopeId,
    token: Rc<InstanceToken>,
}

impl ObjectHandle {
    pub(crate) fn tracked(class: &str, scope: ScopeId, releases: &ReleaseQueue) -> Self {
        ObjectHandle {
            class: class.to_string(),
            scope,
            token: Rc::new(InstanceToken {
                scope,
                releases: Rc::downgrade(releases),
            }),
        }
    }

    /// A handle no symbol table tracks; dropping it frees nothing.
    pub fn detached(class: impl Into<String>, scope: ScopeId) -> Self {
        ObjectHandle {
            class: class.into(),
            scope,
            token: Rc::new(InstanceToken {
                scope,
                releases: Weak::new(),
            }),
        }
    }

    /// Number of live handles to this instance.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.token)
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope && self.class == other.class
    }
}

impl Eq for ObjectHandle {}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Double(f64),
    Bool(bool),
    Char(char),
    Str(String),
    /// Absence of a value: `print()`'s argument, a bare `return;`, an
    /// uninitialized object variable.
    Unit,
    Object(ObjectHandle),
}

impl Value {
    /// User-facing type name, matching `ParsedType::name`.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "Int",
            Value::Double(_) => "Double",
            Value::Bool(_) => "Boolean",
            Value::Char(_) => "Char",
            Value::Str(_) => "String",
            Value::Unit => "Unit",
            Value::Object(handle) => &handle.class,
        }
    }

    /// Declared type for a symbol initialized from this value without an
    /// annotation.
    pub fn parsed_type(&self) -> ParsedType {
        match self {
            Value::Int(_) => ParsedType::Int,
            Value::Double(_) => ParsedType::Double,
            Value::Bool(_) => ParsedType::Boolean,
            Value::Char(_) => ParsedType::Char,
            Value::Str(_) => ParsedType::String,
            Value::Unit => ParsedType::Unit,
            Value::Object(handle) => ParsedType::Class(handle.class.clone()),
        }
    }

    /// Whether this value may be stored under declared type `ty`.
    #[inline]
    pub fn matches(&self, ty: &ParsedType) -> bool {
        self.type_name() == ty.name()
    }

    /// Value of an uninitialized symbol of type `ty`.
    pub fn default_for(ty: &ParsedType) -> Value {
        match ty {
            ParsedType::Int => Value::Int(0),
            ParsedType::Double => Value::Double(0.0),
            ParsedType::Boolean => Value::Bool(false),
            ParsedType::Char => Value::Char('\0'),
            ParsedType::String => Value::Str(String::new()),
            ParsedType::Unit | ParsedType::Class(_) => Value::Unit,
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// The instance handle, if this is an object.
    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Value::Object(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Value equality; objects compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (Value::Object(a), Value::Object(b)) => a.scope == b.scope,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => fmt_double(*d, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Unit => Ok(()),
            Value::Object(handle) => write!(f, "<{} object>", handle.class),
        }
    }
}

/// Shortest round-trip form, keeping a `.0` on integral values.
fn fmt_double(d: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if d.is_nan() {
        f.write_str("NaN")
    } else if d.is_infinite() {
        f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" })
    } else if d.fract() == 0.0 {
        write!(f, "{d:.1}")
    } else {
        write!(f, "{d}")
    }
}
