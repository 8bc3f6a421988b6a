//! Named field access for row types.

use crate::value::Value;

/// Row types whose fields can be looked up by name.
///
/// Implementing this trait lets column helpers build descriptors from an
/// accessor key alone, the same way a column definition names the field it
/// reads.
///
/// ```
/// use rollbook_seeker::{Seekable, Value, Number};
///
/// struct Employee {
///     first_name: String,
///     daily_rate: f64,
/// }
///
/// impl Seekable for Employee {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "first_name" => Value::String(&self.first_name),
///             "daily_rate" => Value::Number(Number::F64(self.daily_rate)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let e = Employee { first_name: "John".into(), daily_rate: 250.0 };
/// assert_eq!(e.seeker_field_value("first_name"), Value::String("John"));
/// assert_eq!(e.seeker_field_value("nickname"), Value::None);
/// ```
pub trait Seekable {
    /// Returns the raw value of a field, or [`Value::None`] if the field does
    /// not exist or is null.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Function-pointer form of [`Seekable::seeker_field_value`].
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Seekable for TestItem {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "count" => Value::Number(Number::I64(self.count as i64)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn seekable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.seeker_field_value("name"), Value::String("test"));
        assert_eq!(
            item.seeker_field_value("count"),
            Value::Number(Number::I64(42))
        );
        assert_eq!(TestItem::accessor(&item, "unknown"), Value::None);
    }
}
