//! Call arguments accepted by the logger methods
//!
//! A log call takes a slice of [`LogValue`]s. Scalars convert through `From`,
//! structured values borrow anything `Serialize + Debug`, and errors keep a
//! reference to the error so the serializer can walk its source chain.

use serde::Serialize;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A value that can be JSON encoded, with a `Debug` fallback
pub trait Structured: fmt::Debug {
    fn to_json(&self) -> serde_json::Result<String>;
}

impl<T: Serialize + fmt::Debug + ?Sized> Structured for T {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One argument of a log call
#[derive(Debug, Clone)]
pub enum LogValue<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Owned JSON; objects and arrays are encoded, scalars are coerced
    Json(serde_json::Value),
    /// Borrowed serializable value, converted at format time like `Json`
    Object(&'a dyn Structured),
    Error(ErrorValue<'a>),
}

impl<'a> LogValue<'a> {
    /// Borrow a serializable value for JSON encoding
    pub fn json<T: Serialize + fmt::Debug>(value: &'a T) -> Self {
        LogValue::Object(value)
    }

    /// Borrow an error; its kind is the error's type name
    pub fn error<E: StdError>(error: &'a E) -> Self {
        LogValue::Error(ErrorValue {
            kind: short_type_name::<E>(),
            error,
            backtrace: None,
        })
    }

    /// Borrow an error together with a backtrace captured alongside it
    pub fn error_with_backtrace<E: StdError>(error: &'a E, backtrace: &'a Backtrace) -> Self {
        LogValue::Error(ErrorValue {
            kind: short_type_name::<E>(),
            error,
            backtrace: Some(backtrace),
        })
    }

    /// Borrow a type-erased error under an explicit kind name
    pub fn error_named(kind: &'a str, error: &'a (dyn StdError + 'a)) -> Self {
        LogValue::Error(ErrorValue {
            kind,
            error,
            backtrace: None,
        })
    }
}

/// Borrowed error argument
#[derive(Debug, Clone, Copy)]
pub struct ErrorValue<'a> {
    kind: &'a str,
    error: &'a (dyn StdError + 'a),
    backtrace: Option<&'a Backtrace>,
}

impl<'a> ErrorValue<'a> {
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    pub fn error(&self) -> &'a (dyn StdError + 'a) {
        self.error
    }

    pub fn backtrace(&self) -> Option<&'a Backtrace> {
        self.backtrace
    }
}

/// Last path segment of a type name, without generic parameters
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(s: &'a str) -> Self {
        LogValue::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(s: &'a String) -> Self {
        LogValue::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for LogValue<'_> {
    fn from(s: String) -> Self {
        LogValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for LogValue<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        LogValue::Text(s)
    }
}

impl From<char> for LogValue<'_> {
    fn from(c: char) -> Self {
        LogValue::Text(Cow::Owned(c.to_string()))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogValue<'_> {
            fn from(i: $ty) -> Self {
                LogValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogValue<'_> {
            fn from(i: $ty) -> Self {
                LogValue::UInt(i as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogValue<'_> {
    fn from(f: f32) -> Self {
        // Widen through the shortest f32 text so 0.1f32 stays "0.1"
        LogValue::Float(f.to_string().parse().unwrap_or_else(|_| f64::from(f)))
    }
}

impl From<f64> for LogValue<'_> {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue<'_> {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<()> for LogValue<'_> {
    fn from(_: ()) -> Self {
        LogValue::Null
    }
}

impl From<serde_json::Value> for LogValue<'_> {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Json(value)
    }
}

impl<'a, T> From<Option<T>> for LogValue<'a>
where
    T: Into<LogValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(LogValue::Null, Into::into)
    }
}
