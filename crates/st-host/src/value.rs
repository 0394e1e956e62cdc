//! Dynamically typed values crossing the host boundary.

use glam::Vec3;

use crate::object::{HostObject, ObjectRef};

/// A value read from or written to a host object member. The host schema
/// is not ours, so readers go through the `as_*` accessors and treat a
/// type mismatch the same as an absent member.
#[derive(Clone)]
pub enum HostValue {
    Nil,
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    Vec3(Vec3),
    Obj(ObjectRef),
}

impl HostValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, HostValue::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            HostValue::Num(n) => Some(*n),
            HostValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            HostValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<ObjectRef> {
        match self {
            HostValue::Obj(o) => Some(o.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for HostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostValue::Nil => write!(f, "Nil"),
            HostValue::Bool(b) => write!(f, "Bool({b})"),
            HostValue::Int(i) => write!(f, "Int({i})"),
            HostValue::Num(n) => write!(f, "Num({n})"),
            HostValue::Str(s) => write!(f, "Str({s:?})"),
            HostValue::Vec3(v) => write!(f, "Vec3({v})"),
            HostValue::Obj(o) => write!(f, "Obj({})", o.id()),
        }
    }
}
