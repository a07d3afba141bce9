//! Dynamic values that the classifiers inspect.
//!
//! A [`Value`] is the host-neutral shape of "anything a caller might hand
//! to a validator": scalars, ordered arrays, objects carrying a runtime
//! class name, and opaque native resources.
//!
//! # Examples
//!
//! ```rust,ignore
//! use datatype_validator::value::Object;
//! use datatype_validator::{array, list};
//!
//! let user = array! {
//!     "name" => "Cheyenne",
//!     "age" => 22,
//!     "lucky" => list![7, 2, 1],
//!     "sayHi" => Object::closure(),
//! };
//! assert_eq!(user.len(), 4);
//! ```

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Separator between namespace segments of a class name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Class name given to invocable objects built by [`Object::closure`].
pub const CLOSURE_CLASS: &str = "Closure";

/// Longest display form of a non-scalar value, in characters.
const DISPLAY_WIDTH: usize = 15;

// ============================================================================
// KEY
// ============================================================================

/// An array key: either an integer index or a string name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

// ============================================================================
// ARRAY
// ============================================================================

/// Ordered map from [`Key`] to [`Value`].
///
/// Lists and keyed maps share this representation; iteration always
/// follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    entries: IndexMap<Key, Value>,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list with keys `0..n`.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v.into()))
            .collect()
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends a value under the next integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self
            .entries
            .keys()
            .filter_map(|k| match k {
                Key::Int(i) => Some(i.saturating_add(1)),
                Key::Str(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.entries.insert(Key::Int(next), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up a string key without building a [`Key`] first.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries.get(&Key::Str(key.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns true if the keys are exactly `0, 1, .., n - 1` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| *k == Key::Int(i as i64))
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Array {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// An object with a runtime class and optional capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: Cow<'static, str>,
    properties: Array,
    array_access: bool,
    invocable: bool,
}

impl Object {
    /// Creates an object of the given fully-qualified class.
    ///
    /// ```rust,ignore
    /// let when = Object::named("chrono::DateTime");
    /// assert_eq!(when.short_name(), "DateTime");
    /// ```
    pub fn named(class: impl Into<Cow<'static, str>>) -> Self {
        Self {
            class: class.into(),
            properties: Array::new(),
            array_access: false,
            invocable: false,
        }
    }

    /// Creates an object whose class is the Rust type `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Creates an invocable object, which is both an object and a callable.
    #[must_use]
    pub fn closure() -> Self {
        Self::named(CLOSURE_CLASS).invocable()
    }

    /// Marks the object as supporting index access.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_array_access(mut self) -> Self {
        self.array_access = true;
        self
    }

    /// Marks the object as invocable.
    #[must_use = "builder methods must be chained or built"]
    pub fn invocable(mut self) -> Self {
        self.invocable = true;
        self
    }

    /// Sets a public property.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Fully-qualified class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Class name without its namespace and generic arguments.
    #[must_use]
    pub fn short_name(&self) -> &str {
        let base = self.class.split('<').next().unwrap_or(&self.class);
        base.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(base)
    }

    #[must_use]
    pub fn properties(&self) -> &Array {
        &self.properties
    }

    #[must_use]
    pub fn has_array_access(&self) -> bool {
        self.array_access
    }

    #[must_use]
    pub fn is_invocable(&self) -> bool {
        self.invocable
    }
}

// ============================================================================
// RESOURCE
// ============================================================================

/// An opaque native handle, such as an open stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    id: u64,
    kind: Cow<'static, str>,
}

impl Resource {
    pub fn new(id: u64, kind: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// A stream handle, the most common resource kind.
    #[must_use]
    pub fn stream(id: u64) -> Self {
        Self::new(id, "stream")
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// Any value a validator can be asked about.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
    Object(Object),
    Resource(Resource),
}

impl Value {
    /// Builds a list value from anything convertible to values.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Array::list(values))
    }

    /// Builds an object value typed after `T`.
    #[must_use]
    pub fn object_of<T: ?Sized>() -> Self {
        Value::Object(Object::of::<T>())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Name of the runtime kind, as a type-introspection call would report it.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Resource(_) => "resource",
        }
    }

    /// Iterates the entries of an array-like value.
    ///
    /// Arrays yield their entries; objects with array access yield their
    /// properties. Every other value yields `None`.
    #[must_use]
    pub fn elements(&self) -> Option<indexmap::map::Iter<'_, Key, Value>> {
        match self {
            Value::Array(a) => Some(a.iter()),
            Value::Object(o) if o.has_array_access() => Some(o.properties().iter()),
            _ => None,
        }
    }

    /// Encodes the value as JSON.
    ///
    /// Returns `None` for values a JSON encoder rejects: resources and
    /// non-finite floats, at any depth.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        use serde_json::Value as Json;

        Some(match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::from(*i),
            Value::Float(f) => Json::Number(serde_json::Number::from_f64(*f)?),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(a) => array_to_json(a)?,
            Value::Object(o) => {
                let mut map = serde_json::Map::new();
                for (k, v) in o.properties() {
                    map.insert(k.to_string(), v.to_json()?);
                }
                Json::Object(map)
            }
            Value::Resource(_) => return None,
        })
    }

    /// The form used when quoting a value in an error message.
    ///
    /// Strings, ints and floats use their natural form; anything else is
    /// rendered as compact JSON cut to 15 characters.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            other => other
                .to_json()
                .map(|json| json.to_string().chars().take(DISPLAY_WIDTH).collect())
                .unwrap_or_default(),
        }
    }
}

fn array_to_json(array: &Array) -> Option<serde_json::Value> {
    if array.is_list() {
        let items = array
            .iter()
            .map(|(_, v)| v.to_json())
            .collect::<Option<Vec<_>>>()?;
        return Some(serde_json::Value::Array(items));
    }

    let mut map = serde_json::Map::new();
    for (k, v) in array {
        map.insert(k.to_string(), v.to_json()?);
    }
    Some(serde_json::Value::Object(map))
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Resource> for Value {
    fn from(r: Resource) -> Self {
        Value::Resource(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::list(values)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::list(items),
            Json::Object(map) => Value::Array(map.into_iter().collect()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
