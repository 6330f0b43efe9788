use serde::Serialize;

const CSS_INJECT_TEMPLATE: &str = r#"(({ css }) => {
  const style = document.createElement('style');
  style.dataset.source = 'monkey';
  style.textContent = css;
  (document.head || document.documentElement).append(style);
})(__ARGS__);"#;

#[derive(Serialize)]
struct CssInjectArgs<'a> {
  css: &'a str,
}

/// A script that appends `css` to the page in a `<style>` element.
pub fn render_css_inject(css: &str) -> anyhow::Result<String> {
  let args = serde_json::to_string(&CssInjectArgs { css })?;
  Ok(CSS_INJECT_TEMPLATE.replacen("__ARGS__", &args, 1))
}

#[test]
fn test_render_css_inject() {
  let code = render_css_inject("a{content:\"x\"}").unwrap();
  assert!(code.ends_with(r#"})({"css":"a{content:\"x\"}"});"#));
  assert!(!code.contains("__ARGS__"));
}
