//! Recursive removal of `null`, `{}` and `[]` from JSON values.
//!
//! Cleaning runs bottom-up, so a container that only held empty values
//! becomes empty itself and is removed by its parent.

use crate::domain::model::AggregateResponse;
use serde_json::Value;

/// Returns `value` with every null, empty object and empty array removed at
/// any depth. Scalars pass through untouched; surviving keys and elements
/// keep their order.
pub fn clean(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, value)| {
                    let value = clean(value);
                    (!is_empty_value(&value)).then_some((key, value))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(clean_items(items)),
        scalar => scalar,
    }
}

fn clean_items(items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .map(clean)
        .filter(|item| !is_empty_value(item))
        .collect()
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Cleans every part of the response envelope. `orders` itself always
/// stays in the envelope, even when nothing survives.
pub fn clean_response(response: AggregateResponse) -> AggregateResponse {
    AggregateResponse {
        orders: clean_items(response.orders),
        message: response.message,
        order: response
            .order
            .map(clean)
            .filter(|order| !is_empty_value(order)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            json!(null),
            json!(42),
            json!("Unshipped"),
            json!({}),
            json!([]),
            json!({"a": {"b": {}}, "c": [[], {}, null]}),
            json!([null, [null, {}], {"x": null}]),
            json!({
                "id": 17,
                "orderId": "A-100",
                "notes": null,
                "items": [{"sku": "X1", "tags": []}, {}, {"sku": "X2", "qty": 0}],
                "shipping": {"address": {"line2": null}, "method": ""},
                "flags": [false, null, true]
            }),
        ]
    }

    fn contains_empty(value: &Value) -> bool {
        match value {
            Value::Object(map) => map.values().any(|v| is_empty_value(v) || contains_empty(v)),
            Value::Array(items) => items.iter().any(|v| is_empty_value(v) || contains_empty(v)),
            _ => false,
        }
    }

    #[test]
    fn test_clean_removes_nulls_and_empty_containers() {
        let cleaned = clean(json!({
            "id": 17,
            "notes": null,
            "tags": [],
            "meta": {},
            "items": [{"sku": "X1", "tags": []}, {}, null, {"sku": "X2"}]
        }));

        assert_eq!(
            cleaned,
            json!({"id": 17, "items": [{"sku": "X1"}, {"sku": "X2"}]})
        );
    }

    #[test]
    fn test_clean_preserves_scalars() {
        assert_eq!(clean(json!(0)), json!(0));
        assert_eq!(clean(json!(false)), json!(false));
        assert_eq!(clean(json!("")), json!(""));
        assert_eq!(clean(json!(12.5)), json!(12.5));
        assert_eq!(clean(json!(null)), json!(null));
    }

    #[test]
    fn test_clean_keeps_falsy_scalars_inside_containers() {
        let cleaned = clean(json!({"qty": 0, "paid": false, "note": "", "list": [0, false, ""]}));
        assert_eq!(
            cleaned,
            json!({"qty": 0, "paid": false, "note": "", "list": [0, false, ""]})
        );
    }

    #[test]
    fn test_clean_preserves_key_and_element_order() {
        let cleaned = clean(json!({"z": 1, "gone": null, "a": 2, "m": [3, null, 1, 2]}));

        let keys: Vec<&String> = cleaned.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(cleaned["m"], json!([3, 1, 2]));
    }

    #[test]
    fn test_clean_collapses_nested_empties() {
        assert_eq!(clean(json!({"a": {"b": {"c": {}}}})), json!({}));
        assert_eq!(clean(json!([[[]], [{}], [null]])), json!([]));
    }

    #[test]
    fn test_clean_is_idempotent() {
        for sample in samples() {
            let once = clean(sample.clone());
            let twice = clean(once.clone());
            assert_eq!(once, twice, "not idempotent for {}", sample);
        }
    }

    #[test]
    fn test_clean_leaves_no_empty_values() {
        for sample in samples() {
            let cleaned = clean(sample.clone());
            assert!(!contains_empty(&cleaned), "empty value left in {}", cleaned);
        }
    }

    #[test]
    fn test_clean_response_keeps_orders_field() {
        let response = AggregateResponse {
            orders: vec![json!({}), json!({"id": 1, "channel": null})],
            message: None,
            order: Some(json!({"notes": null})),
        };

        let cleaned = clean_response(response);

        assert_eq!(cleaned.orders, vec![json!({"id": 1})]);
        assert_eq!(cleaned.order, None);
        assert_eq!(
            serde_json::to_value(&cleaned).unwrap(),
            json!({"orders": [{"id": 1}]})
        );
    }
}
