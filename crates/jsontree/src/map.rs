use crate::value::JsonValue;

impl JsonValue {
    /// Applies `transform` to each direct child, producing a new composite of
    /// the same variant with the same keys and order.
    ///
    /// The mapping is shallow: grandchildren are untouched unless `transform`
    /// rebuilds them itself. Scalars have no children and are returned
    /// unchanged. `x.map(Clone::clone)` equals `x`.
    #[must_use]
    pub fn map(&self, mut transform: impl FnMut(&JsonValue) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Array(elements) => {
                JsonValue::Array(elements.iter().map(&mut transform).collect())
            }
            JsonValue::Object(object) => JsonValue::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), transform(value)))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    /// Array-only variant of [`map`](JsonValue::map) that also supplies each
    /// element's position. Values that are not arrays are returned unchanged.
    #[must_use]
    pub fn map_indexed(
        &self,
        mut transform: impl FnMut(usize, &JsonValue) -> JsonValue,
    ) -> JsonValue {
        match self {
            JsonValue::Array(elements) => JsonValue::Array(
                elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| transform(index, element))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Applies `transform` to every child top-down, following the transformed
    /// shape.
    ///
    /// Each direct child is transformed first; when the **result** is a
    /// composite, its children are processed the same way, so a scalar that
    /// `transform` turns into a composite has the freshly produced children
    /// passed through `transform` again, while a scalar result ends that
    /// branch. Recursion depth is bounded by the output shape of each call:
    /// a transform that keeps deepening structures will not terminate, which
    /// is the caller's responsibility to avoid.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let document = JsonValue::array([
    ///     JsonValue::object([("value", 1)]),
    ///     JsonValue::object([("value", 2)]),
    /// ]);
    /// let scaled = document.deep_map(|value| match value.as_number() {
    ///     Some(number) => JsonValue::from(number.as_u64().unwrap() * 10),
    ///     None => value.clone(),
    /// });
    /// assert_eq!(
    ///     scaled,
    ///     JsonValue::array([
    ///         JsonValue::object([("value", 10)]),
    ///         JsonValue::object([("value", 20)]),
    ///     ]),
    /// );
    /// ```
    #[must_use]
    pub fn deep_map(&self, mut transform: impl FnMut(&JsonValue) -> JsonValue) -> JsonValue {
        self.deep_map_impl(&mut transform)
    }

    fn deep_map_impl(&self, transform: &mut impl FnMut(&JsonValue) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Array(elements) => JsonValue::Array(
                elements
                    .iter()
                    .map(|element| deep_map_child(element, transform))
                    .collect(),
            ),
            JsonValue::Object(object) => JsonValue::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), deep_map_child(value, transform)))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }
}

fn deep_map_child(
    child: &JsonValue,
    transform: &mut impl FnMut(&JsonValue) -> JsonValue,
) -> JsonValue {
    let transformed = transform(child);
    if transformed.is_composite() {
        transformed.deep_map_impl(transform)
    } else {
        transformed
    }
}
