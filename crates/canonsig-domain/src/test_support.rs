use canonsig_types::{Number, Value};

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

pub fn sym(s: &str) -> Value {
    Value::from_symbol(s)
}

pub fn num<N: Into<Number>>(n: N) -> Value {
    Value::Number(n.into())
}

pub fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::List(items.into())
}

pub fn set<const N: usize>(items: [Value; N]) -> Value {
    Value::from_set(items)
}

pub fn map<const N: usize>(pairs: [(Value, Value); N]) -> Value {
    Value::mapping(pairs)
}

/// Reorder every list and mapping in the tree, deterministically per `salt`.
pub fn permute(value: &Value, salt: u64) -> Value {
    match value {
        Value::List(items) => {
            let items: Vec<Value> = items.iter().map(|v| permute(v, salt.rotate_left(7))).collect();
            Value::List(reorder(items, salt))
        }
        Value::Mapping(pairs) => {
            let pairs: Vec<(Value, Value)> = pairs
                .iter()
                .map(|(k, v)| (permute(k, salt.rotate_left(11)), permute(v, salt.rotate_left(13))))
                .collect();
            Value::Mapping(reorder(pairs, salt))
        }
        other => other.clone(),
    }
}

fn reorder<T>(mut items: Vec<T>, salt: u64) -> Vec<T> {
    if items.len() < 2 {
        return items;
    }
    let shift = (salt % items.len() as u64) as usize;
    items.rotate_left(shift);
    if salt & 1 == 1 {
        items.reverse();
    }
    if salt & 2 == 2 {
        let last = items.len() - 1;
        items.swap(0, last / 2);
    }
    items
}
