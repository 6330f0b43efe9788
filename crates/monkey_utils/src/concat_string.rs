/// Concatenates string-like values with a single allocation sized up front.
///
/// ```ignore
/// let s = concat_string!("// @", key, " ", value);
/// ```
#[macro_export]
macro_rules! concat_string {
  () => { String::new() };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0usize;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let key = String::from("name");
  assert_eq!(concat_string!("// @", key, " ", "demo"), "// @name demo");
  assert_eq!(concat_string!(), "");
}
