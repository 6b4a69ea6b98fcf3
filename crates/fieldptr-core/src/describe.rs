//! `Described` impls for standard library types.
//!
//! Scalars are opaque. Sequences and keyed maps become array nodes over
//! their element (or value) type. Smart pointers and `Option` are
//! transparent.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use fieldptr_contracts::TypeSchema;

use crate::traits::Described;

macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Described for $ty {
                fn type_schema() -> TypeSchema {
                    TypeSchema::Opaque
                }
            }
        )*
    };
}

opaque!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, serde_json::Value,
);

impl<T: Described + ?Sized> Described for &T {
    fn type_schema() -> TypeSchema {
        T::type_schema()
    }
}

impl<T: Described + ?Sized> Described for Box<T> {
    fn type_schema() -> TypeSchema {
        T::type_schema()
    }
}

impl<T: Described + ?Sized> Described for Rc<T> {
    fn type_schema() -> TypeSchema {
        T::type_schema()
    }
}

impl<T: Described + ?Sized> Described for Arc<T> {
    fn type_schema() -> TypeSchema {
        T::type_schema()
    }
}

impl<T: Described> Described for Option<T> {
    fn type_schema() -> TypeSchema {
        T::type_schema()
    }
}

impl<T: Described> Described for [T] {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(T::type_schema())
    }
}

impl<T: Described, const N: usize> Described for [T; N] {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(T::type_schema())
    }
}

impl<T: Described> Described for Vec<T> {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(T::type_schema())
    }
}

impl<T: Described> Described for VecDeque<T> {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(T::type_schema())
    }
}

impl<K, V: Described, S> Described for HashMap<K, V, S> {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(V::type_schema())
    }
}

impl<K, V: Described> Described for BTreeMap<K, V> {
    fn type_schema() -> TypeSchema {
        TypeSchema::array_of(V::type_schema())
    }
}
