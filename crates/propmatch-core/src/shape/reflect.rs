//! Conversion of host values into the engine's [`Value`] model.

use super::{Composite, Members, Scalar, Value};
use chrono::{DateTime, Utc};
use std::rc::Rc;

/// Anything the comparison engine can look at.
pub trait Reflect {
    fn reflect(&self) -> Value;
}

impl Reflect for Value {
    fn reflect(&self) -> Value {
        self.clone()
    }
}

impl Reflect for Scalar {
    fn reflect(&self) -> Value {
        Value::Scalar(self.clone())
    }
}

impl Reflect for Composite {
    fn reflect(&self) -> Value {
        Value::Composite(self.clone())
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

macro_rules! reflect_scalar {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value {
                    Value::Scalar(Scalar::$variant(*self as $target))
                }
            }
        )*
    };
}

reflect_scalar!(Int as i64: i8, i16, i32, i64, isize);
reflect_scalar!(UInt as u64: u8, u16, u32, u64, usize);
reflect_scalar!(Float as f64: f32, f64);

impl Reflect for bool {
    fn reflect(&self) -> Value {
        Value::Scalar(Scalar::Bool(*self))
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value {
        Value::Scalar(Scalar::Char(*self))
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value {
        Value::text(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value {
        Value::text(self.as_str())
    }
}

impl Reflect for DateTime<Utc> {
    fn reflect(&self) -> Value {
        Value::Scalar(Scalar::Timestamp(*self))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value {
        match self {
            Some(v) => v.reflect(),
            None => Value::Null,
        }
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value {
        Value::sequence(self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value {
        self.as_slice().reflect()
    }
}

/// Shared composites keep their identity, so cycles built from `Rc`s are
/// visible to the cycle guard.
impl<T: Members + 'static> Reflect for Rc<T> {
    fn reflect(&self) -> Value {
        Value::Composite(Composite::new(Rc::clone(self)))
    }
}

/// A JSON object seen as a composite whose members are its keys.
#[derive(Debug)]
pub struct JsonObject(serde_json::Map<String, serde_json::Value>);

impl Members for JsonObject {
    fn type_name(&self) -> &str {
        "object"
    }

    fn member_names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    fn member(&self, name: &str) -> Option<Value> {
        self.0.get(name).map(Reflect::reflect)
    }
}

impl Reflect for serde_json::Value {
    fn reflect(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Scalar(Scalar::UInt(u))
                } else {
                    Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::text(s.as_str()),
            serde_json::Value::Array(items) => items.as_slice().reflect(),
            serde_json::Value::Object(map) => Value::composite(Rc::new(JsonObject(map.clone()))),
        }
    }
}

/// Implement [`Members`] and [`Reflect`] for a plain struct.
///
/// The struct must be `Clone + 'static`; reflecting it snapshots the value
/// into a fresh shared composite. Listed fields must themselves implement
/// `Reflect`.
///
/// ```
/// use propmatch_core::reflect_members;
/// use propmatch_core::shape::{Reflect, Value};
///
/// #[derive(Clone)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// reflect_members!(Point { x, y });
///
/// match (Point { x: 1, y: 2 }).reflect() {
///     Value::Composite(c) => assert_eq!(c.member_names(), vec!["x", "y"]),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[macro_export]
macro_rules! reflect_members {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::shape::Members for $ty {
            fn type_name(&self) -> &str {
                stringify!($ty)
            }

            fn member_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![$(::std::string::String::from(stringify!($field))),*]
            }

            fn member(&self, name: &str) -> ::std::option::Option<$crate::shape::Value> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some($crate::shape::Reflect::reflect(&self.$field));
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }
        }

        impl $crate::shape::Reflect for $ty {
            fn reflect(&self) -> $crate::shape::Value {
                $crate::shape::Value::composite(::std::rc::Rc::new(::std::clone::Clone::clone(self)))
            }
        }
    };
}

/// Implement [`Reflect`] for a fieldless enum as the `Text` of its variant
/// name, so enum members compare like any other primitive.
///
/// ```
/// use propmatch_core::reflect_variants;
/// use propmatch_core::shape::{Reflect, Value};
///
/// enum Color {
///     Red,
///     Green,
/// }
///
/// reflect_variants!(Color { Red, Green });
///
/// assert_eq!(Color::Green.reflect().describe(), "\"Green\"");
/// ```
#[macro_export]
macro_rules! reflect_variants {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::shape::Reflect for $ty {
            fn reflect(&self) -> $crate::shape::Value {
                match self {
                    $($ty::$variant => $crate::shape::Value::text(stringify!($variant)),)*
                }
            }
        }
    };
}
