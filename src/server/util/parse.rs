/// Parses a record id taken from a route parameter.
///
/// Ids are positive integers assigned by the database. Anything else cannot name an
/// existing record, so callers treat `None` exactly like a missing row.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Some(i32)` - Well-formed id
/// - `None` - Not a positive integer
pub fn parse_record_id(value: &str) -> Option<i32> {
    value.parse::<i32>().ok().filter(|id| *id > 0)
}
