//! Character stripping for hostnames and checkpoint lists.

/// Remove every character of `charset` from `text`
///
/// Unlike `str::trim_matches` this is not edge trimming: characters in
/// the set are dropped wherever they occur.
///
/// # Example
/// ```
/// use ckpt_discover::parser::strip_all;
/// assert_eq!(strip_all(" a b \n", " \n"), "ab");
/// ```
pub fn strip_all(text: &str, charset: &str) -> String {
    text.chars().filter(|c| !charset.contains(*c)).collect()
}
