//! Dot-path resolution over nested JSON objects.

use serde_json::{Map, Value};

/// Resolve a dot-separated path against a top-level object.
///
/// Walks one segment at a time; `None` as soon as any segment is absent or
/// an intermediate value is not an object. `None` is the missing sentinel,
/// distinct from a present `Value::Null`.
pub fn resolve<'a>(path: &str, data: &'a Map<String, Value>) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = data.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
