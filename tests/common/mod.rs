use range_facade::{Cursor, View};

/// Drive a view by hand through its cursor contract, the way a `for` loop would.
pub fn drain<V: View>(view: &V) -> Vec<<V::Cursor as Cursor>::Item> {
    let end = view.end_cursor();
    let mut cursor = view.begin_cursor();
    let mut values = Vec::new();
    while !cursor.equal(&end) {
        values.push(cursor.read());
        cursor.next();
    }
    values
}

/// Expected output for a bound
pub fn expected(bound: i64) -> Vec<i64> {
    (0..bound.max(0)).collect()
}
