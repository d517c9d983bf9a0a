//! Addressing leaves of a form tree.
//!
//! A form is held as a `serde_json::Value` tree mirroring the entity shape
//! (`documents.aadharCard.frontImage`, `bankDetails.ifscCode`, ...).
//! [`FieldPath`] is a parsed dotted path, [`Field`] is a typed path constant
//! declared next to the entity it belongs to, and [`set_path`] produces a new
//! tree with exactly one leaf replaced.

use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("field path is empty")]
    Empty,
    #[error("field path `{0}` contains an empty segment")]
    EmptySegment(String),
}

/// Parsed dotted path into a form tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, FieldPathError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FieldPathError::Empty);
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(FieldPathError::EmptySegment(raw.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Result<Self, FieldPathError> {
        if segments.is_empty() {
            return Err(FieldPathError::Empty);
        }
        let segments: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(FieldPathError::EmptySegment(segments.join(".")));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted form, also used as the DOM `id`/`name` of the bound input.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// True if `self` addresses `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        self.segments.len() <= other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

// ============================================================================
// Typed field constants
// ============================================================================

/// Typed path constant: `V` fixes how the leaf is read and written.
///
/// ```
/// use contracts::shared::field_path::Field;
/// pub const IFSC: Field<String> = Field::new(&["bankDetails", "ifscCode"]);
/// assert_eq!(IFSC.path().dotted(), "bankDetails.ifscCode");
/// ```
pub struct Field<V> {
    segments: &'static [&'static str],
    _value: PhantomData<fn() -> V>,
}

impl<V> Field<V> {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self {
            segments,
            _value: PhantomData,
        }
    }

    pub fn segments(&self) -> &'static [&'static str] {
        self.segments
    }

    pub fn path(&self) -> FieldPath {
        FieldPath {
            segments: self.segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl<V> Clone for Field<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Field<V> {}

impl<V> fmt::Debug for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({})", self.segments.join("."))
    }
}

impl<V> From<Field<V>> for FieldPath {
    fn from(field: Field<V>) -> Self {
        field.path()
    }
}

impl<V> From<&Field<V>> for FieldPath {
    fn from(field: &Field<V>) -> Self {
        field.path()
    }
}

// ============================================================================
// Tree access
// ============================================================================

pub fn get_path<'a>(tree: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments
        .iter()
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Returns a new tree where the leaf at `path` is `value`; `tree` is untouched.
pub fn set_path(tree: &Value, path: &FieldPath, value: Value) -> Value {
    let mut next = tree.clone();
    set_path_mut(&mut next, path, value);
    next
}

/// In-place variant of [`set_path`].
///
/// Missing intermediates, and intermediates that are not objects, become
/// empty objects. A non-object root is replaced by an object as well.
pub fn set_path_mut(tree: &mut Value, path: &FieldPath, value: Value) {
    let (leaf, parents) = match path.segments.split_last() {
        Some(split) => split,
        None => return,
    };

    let mut node = tree;
    for segment in parents {
        node = ensure_object(node)
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(leaf.clone(), value);
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced by an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn p(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert_eq!(FieldPath::parse(""), Err(FieldPathError::Empty));
        assert!(matches!(
            FieldPath::parse("bankDetails..ifscCode"),
            Err(FieldPathError::EmptySegment(_))
        ));
        assert_eq!(p("a.b.c").segments().len(), 3);
    }

    #[test]
    fn set_replaces_leaf_and_keeps_siblings() {
        let tree = json!({
            "name": "Ravi",
            "bankDetails": { "ifscCode": "OLD0001", "bankName": "SBI" }
        });
        let next = set_path(&tree, &p("bankDetails.ifscCode"), json!("HDFC0001"));

        assert_eq!(next["bankDetails"]["ifscCode"], "HDFC0001");
        assert_eq!(next["bankDetails"]["bankName"], "SBI");
        assert_eq!(next["name"], "Ravi");
        // the input tree is left as it was
        assert_eq!(tree["bankDetails"]["ifscCode"], "OLD0001");
    }

    #[test]
    fn set_creates_missing_intermediates() {
        let tree = json!({ "name": "Driver" });
        let next = set_path(&tree, &p("documents.aadharCard.frontImage"), json!("a.png"));
        assert_eq!(next["documents"]["aadharCard"]["frontImage"], "a.png");
        assert_eq!(next["name"], "Driver");
    }

    #[test]
    fn set_replaces_scalar_intermediate_with_object() {
        let tree = json!({ "address": "unknown" });
        let next = set_path(&tree, &p("address.currentAddress.pinCode"), json!("560001"));
        assert_eq!(next["address"]["currentAddress"]["pinCode"], "560001");
    }

    #[test]
    fn typed_field_renders_dotted_path() {
        const FRONT: Field<String> = Field::new(&["documents", "aadharCard", "frontImage"]);
        assert_eq!(FRONT.path(), p("documents.aadharCard.frontImage"));
        assert_eq!(format!("{FRONT:?}"), "Field(documents.aadharCard.frontImage)");
    }

    #[test]
    fn get_path_walks_objects_only() {
        let tree = json!({ "a": { "b": [1, 2] } });
        assert_eq!(get_path(&tree, &p("a.b")), Some(&json!([1, 2])));
        assert_eq!(get_path(&tree, &p("a.b.c")), None);
        assert_eq!(get_path(&tree, &p("x")), None);
    }

    // ------------------------------------------------------------------------
    // Isolation: writing at `p` never changes the value at a disjoint `q`.
    // ------------------------------------------------------------------------

    const KEYS: &[&str] = &["a", "b", "c", "d"];

    fn arb_path() -> impl Strategy<Value = FieldPath> {
        prop::collection::vec(prop::sample::select(KEYS), 1..=4)
            .prop_map(|segments| FieldPath::from_segments(&segments).unwrap())
    }

    fn arb_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z0-9]{0,6}".prop_map(Value::String),
        ]
    }

    fn arb_tree() -> impl Strategy<Value = Value> {
        arb_leaf().prop_recursive(4, 32, 4, |inner| {
            prop::collection::btree_map(prop::sample::select(KEYS), inner, 0..4).prop_map(
                |entries| {
                    Value::Object(
                        entries
                            .into_iter()
                            .map(|(k, v)| (k.to_string(), v))
                            .collect(),
                    )
                },
            )
        })
    }

    proptest! {
        #[test]
        fn write_at_one_path_leaves_disjoint_paths_alone(
            tree in arb_tree(),
            target in arb_path(),
            probe in arb_path(),
            value in arb_leaf(),
        ) {
            // Disjoint: neither path addresses the other or its ancestors.
            prop_assume!(!target.is_prefix_of(&probe) && !probe.is_prefix_of(&target));
            // Writing may turn a scalar ancestor of `target` into an object; a probe
            // that passes through that same scalar could not have held a value anyway.
            let before = get_path(&tree, &probe).cloned();
            let next = set_path(&tree, &target, value.clone());

            prop_assert_eq!(get_path(&next, &target), Some(&value));
            if before.is_some() {
                prop_assert_eq!(get_path(&next, &probe).cloned(), before);
            }
            prop_assert_eq!(set_path(&tree, &target, value.clone()), next);
        }
    }
}
