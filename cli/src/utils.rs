use std::io::{self, Read};

use crate::error::Result;

/// Read the value to work on from the command line or stdin
///
/// If `value` is `Some`, it is used as is.
/// If `value` is `None`, stdin is read and trailing line breaks are dropped.
pub(crate) fn read_value(value: Option<&str>) -> Result<String> {
    match value {
        Some(value) => Ok(value.to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let value = buffer.trim_end_matches(&['\r', '\n'][..]);
            if value.is_empty() {
                return Err("no value given on the command line or stdin".into());
            }
            Ok(value.to_string())
        }
    }
}
