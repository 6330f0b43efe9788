/// Keeps ascii alphanumerics, `-`, `_` and `.`; everything else becomes `_`.
/// Used to derive the default userscript file name from its display name.
pub fn sanitize_file_name(str: &str) -> String {
  let mut sanitized = String::with_capacity(str.len());
  for char in str.trim().chars() {
    if char.is_ascii_alphanumeric() || matches!(char, '-' | '_' | '.') {
      sanitized.push(char);
    } else {
      sanitized.push('_');
    }
  }
  sanitized
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name(" My Script "), "My_Script");
  assert_eq!(sanitize_file_name("v1.2"), "v1.2");
}
