// src/process/split.rs

/// Split one raw log line into positional values.
///
/// Plain `,` split: no quoting, no escaping, no trimming. A comma inside a
/// value shifts every later column.
pub fn split_record(input: &str) -> Vec<String> {
    input.split(',').map(str::to_owned).collect()
}
