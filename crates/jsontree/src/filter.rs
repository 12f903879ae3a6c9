use crate::{
    path::Path,
    value::{JsonObject, JsonValue},
};

/// A filtered composite survives in its parent only when something in it was
/// kept.
fn has_entries(value: &JsonValue) -> bool {
    match value {
        JsonValue::Array(elements) => !elements.is_empty(),
        JsonValue::Object(object) => !object.is_empty(),
        _ => false,
    }
}

impl JsonValue {
    /// Keeps the entries whose values satisfy `predicate`, preserving the
    /// hierarchy above every match.
    ///
    /// Each entry of an object or element of an array is tested in source
    /// order: a match is kept unchanged (a matching composite keeps its whole
    /// subtree); a non-matching composite is filtered recursively and kept
    /// only if the filtered result is non-empty; a non-matching scalar is
    /// dropped. A branch therefore survives when it matches directly or any
    /// of its descendants does. Scalars have no entries and are returned
    /// unchanged, and the root itself is never tested: filtering everything
    /// out of a composite yields an empty composite of the same variant.
    ///
    /// The operation is idempotent: `x.filter(p).filter(p) == x.filter(p)`.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let document = JsonValue::object([
    ///     ("a", JsonValue::from(1)),
    ///     ("b", JsonValue::object([("c", 2), ("d", 3)])),
    /// ]);
    /// let filtered = document.filter(|value| {
    ///     value.as_number().is_some_and(|number| number.as_f64() > 2.0)
    /// });
    /// assert_eq!(filtered, JsonValue::object([("b", JsonValue::object([("d", 3)]))]));
    /// ```
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&JsonValue) -> bool) -> JsonValue {
        self.filter_impl(&mut predicate)
    }

    fn filter_impl(&self, predicate: &mut impl FnMut(&JsonValue) -> bool) -> JsonValue {
        match self {
            JsonValue::Object(object) => {
                let mut kept = JsonObject::default();
                for (key, value) in object {
                    if predicate(value) {
                        kept.insert(key.clone(), value.clone());
                    } else if value.is_composite() {
                        let filtered = value.filter_impl(predicate);
                        if has_entries(&filtered) {
                            kept.insert(key.clone(), filtered);
                        }
                    }
                }
                JsonValue::Object(kept)
            }
            JsonValue::Array(elements) => {
                let mut kept = Vec::new();
                for element in elements {
                    if predicate(element) {
                        kept.push(element.clone());
                    } else if element.is_composite() {
                        let filtered = element.filter_impl(predicate);
                        if has_entries(&filtered) {
                            kept.push(filtered);
                        }
                    }
                }
                JsonValue::Array(kept)
            }
            scalar => scalar.clone(),
        }
    }

    /// Keeps the entries whose full [`Path`] from the root satisfies
    /// `predicate`, preserving the hierarchy above every match.
    ///
    /// The predicate receives each entry's path (object keys as string
    /// tokens, array positions as decimal indexes) together with the value
    /// at that path. Two conditions are evaluated independently per entry:
    /// the direct match, and (for composites) the recursive filter of the
    /// subtree. Each source entry yields at most one output entry, for
    /// objects and arrays alike: a non-empty recursive result supersedes the
    /// directly matched raw value, a direct match alone keeps the value
    /// unchanged, and an entry with neither is dropped. Kept entries stay at
    /// their source position and keep their source key.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let document = JsonValue::object([
    ///     ("a", JsonValue::array([10, 20])),
    ///     ("b", JsonValue::from(30)),
    /// ]);
    /// let filtered = document.filter_with_path(|path, _value| path.to_string() == "/a/1");
    /// assert_eq!(filtered, JsonValue::object([("a", JsonValue::array([20]))]));
    /// ```
    #[must_use]
    pub fn filter_with_path(
        &self,
        mut predicate: impl FnMut(&Path<'_>, &JsonValue) -> bool,
    ) -> JsonValue {
        self.filter_with_path_impl(&Path::root(), &mut predicate)
    }

    fn filter_with_path_impl(
        &self,
        path: &Path<'_>,
        predicate: &mut impl FnMut(&Path<'_>, &JsonValue) -> bool,
    ) -> JsonValue {
        match self {
            JsonValue::Object(object) => {
                let mut kept = JsonObject::default();
                for (key, value) in object {
                    let child = path.push(key.as_str());
                    let matched = predicate(&child, value);
                    if let Some(filtered) = filter_subtree(value, &child, predicate) {
                        kept.insert(key.clone(), filtered);
                    } else if matched {
                        kept.insert(key.clone(), value.clone());
                    }
                }
                JsonValue::Object(kept)
            }
            JsonValue::Array(elements) => {
                let mut kept = Vec::new();
                for (index, element) in elements.iter().enumerate() {
                    let child = path.push(index);
                    let matched = predicate(&child, element);
                    if let Some(filtered) = filter_subtree(element, &child, predicate) {
                        kept.push(filtered);
                    } else if matched {
                        kept.push(element.clone());
                    }
                }
                JsonValue::Array(kept)
            }
            scalar => scalar.clone(),
        }
    }
}

/// Recursively path-filters a composite entry, yielding the result only when
/// it kept something. Scalars have no subtree to filter.
fn filter_subtree(
    value: &JsonValue,
    path: &Path<'_>,
    predicate: &mut impl FnMut(&Path<'_>, &JsonValue) -> bool,
) -> Option<JsonValue> {
    if value.is_composite() {
        let filtered = value.filter_with_path_impl(path, predicate);
        has_entries(&filtered).then_some(filtered)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{JsonArray, JsonValue, Segment};

    fn number_above(threshold: f64) -> impl FnMut(&JsonValue) -> bool {
        move |value| {
            value
                .as_number()
                .is_some_and(|number| number.as_f64() > threshold)
        }
    }

    #[test]
    fn object_branches_survive_through_matching_descendants() {
        let document = JsonValue::object([
            ("a", JsonValue::from(1)),
            ("b", JsonValue::object([("c", 2), ("d", 3)])),
        ]);
        assert_eq!(
            document.filter(number_above(2.0)),
            JsonValue::object([("b", JsonValue::object([("d", 3)]))]),
        );
    }

    #[test]
    fn array_branches_survive_through_matching_descendants() {
        let document = JsonValue::array([
            JsonValue::from(1),
            JsonValue::array([2, 3]),
            JsonValue::from(4),
        ]);
        assert_eq!(
            document.filter(number_above(2.0)),
            JsonValue::array([JsonValue::array([3]), JsonValue::from(4)]),
        );
    }

    #[test]
    fn matching_composites_keep_their_whole_subtree() {
        let document = JsonValue::object([("items", JsonValue::array([1, 2]))]);
        let filtered = document.filter(JsonValue::is_composite);
        assert_eq!(filtered, document);
    }

    #[test]
    fn branches_without_matches_disappear() {
        let document = JsonValue::object([
            ("empty", JsonValue::object([("x", 1)])),
            ("kept", JsonValue::from(10)),
        ]);
        assert_eq!(
            document.filter(number_above(5.0)),
            JsonValue::object([("kept", JsonValue::from(10))]),
        );
    }

    #[test]
    fn filtering_everything_yields_an_empty_composite() {
        let document = JsonValue::array([1, 2]);
        assert_eq!(document.filter(|_| false), JsonValue::Array(JsonArray::new()));

        let document = JsonValue::object([("a", 1)]);
        assert_eq!(
            document.filter(|_| false),
            JsonValue::Object(crate::JsonObject::default()),
        );
    }

    #[test]
    fn scalars_are_returned_unchanged() {
        assert_eq!(JsonValue::from(1).filter(|_| false), JsonValue::from(1));
        assert_eq!(JsonValue::Null.filter(|_| false), JsonValue::Null);
    }

    #[test]
    fn kept_entries_mirror_source_order() {
        let document = JsonValue::object([("z", 9), ("a", 1), ("m", 8)]);
        assert_eq!(
            document.filter(number_above(2.0)).stringify(),
            r#"{"z" : 9,"m" : 8}"#,
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let document = JsonValue::object([
            ("a", JsonValue::from(1)),
            ("b", JsonValue::object([("c", 2), ("d", 3)])),
            ("e", JsonValue::array([JsonValue::from(5), JsonValue::array([1])])),
        ]);
        let once = document.filter(number_above(2.0));
        let twice = once.filter(number_above(2.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn path_predicate_sees_keys_and_decimal_indexes() {
        let document = JsonValue::object([("a", JsonValue::array([10, 20]))]);
        let mut seen = Vec::new();
        let _ = document.filter_with_path(|path, _| {
            seen.push(path.to_string());
            false
        });
        assert_eq!(seen, ["/a", "/a/0", "/a/1"]);
    }

    #[test]
    fn path_tokens_match_display_form() {
        let document = JsonValue::object([("a", JsonValue::array([JsonValue::object([("b", 1)])]))]);
        let mut deepest = Vec::new();
        let _ = document.filter_with_path(|path, value| {
            if value.as_number().is_some() {
                deepest = path.tokens();
            }
            false
        });
        assert_eq!(deepest, ["a", "0", "b"]);
    }

    #[test]
    fn path_filter_keeps_directly_matched_entries() {
        let document = JsonValue::object([("a", 1), ("b", 2)]);
        let filtered = document.filter_with_path(|path, _| path.to_string() == "/b");
        assert_eq!(filtered, JsonValue::object([("b", 2)]));
    }

    #[test]
    fn recursive_match_supersedes_direct_match_in_objects() {
        // "b" matches directly and contains a matching descendant: only the
        // recursively filtered subtree is stored under "b".
        let document = JsonValue::object([(
            "b",
            JsonValue::object([("keep", 1), ("drop", 2)]),
        )]);
        let filtered = document.filter_with_path(|path, _| {
            matches!(path.last(), Some(Segment::Key("b" | "keep")))
        });
        assert_eq!(
            filtered,
            JsonValue::object([("b", JsonValue::object([("keep", 1)]))]),
        );
    }

    #[test]
    fn recursive_match_supersedes_direct_match_in_arrays() {
        // The inner array matches directly and holds one matching element;
        // the source entry still yields exactly one output entry.
        let document = JsonValue::array([JsonValue::array([10, 20])]);
        let filtered = document.filter_with_path(|path, _| {
            let rendered = path.to_string();
            rendered == "/0" || rendered == "/0/1"
        });
        assert_eq!(filtered, JsonValue::array([JsonValue::array([20])]));
    }

    #[test]
    fn directly_matched_composite_without_matching_descendants_stays_whole() {
        let document = JsonValue::object([("b", JsonValue::object([("x", 1), ("y", 2)]))]);
        let filtered = document.filter_with_path(|path, _| path.to_string() == "/b");
        assert_eq!(filtered, document);
    }

    #[test]
    fn path_filter_preserves_entry_positions() {
        let document = JsonValue::array([
            JsonValue::from(1),
            JsonValue::array([2, 3]),
            JsonValue::from(4),
        ]);
        let filtered = document.filter_with_path(|_, value| {
            value.as_number().is_some_and(|number| number.as_f64() > 2.0)
        });
        assert_eq!(
            filtered,
            JsonValue::array([JsonValue::array([3]), JsonValue::from(4)]),
        );
    }

    #[test]
    fn path_filter_on_scalar_root_is_identity() {
        assert_eq!(
            JsonValue::from("text").filter_with_path(|_, _| false),
            JsonValue::from("text"),
        );
    }
}
