use arcstr::ArcStr;
use monkey_utils::indexmap::FxIndexMap;

#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub filename: ArcStr,
  pub code: String,
  pub is_entry: bool,
}

#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: ArcStr,
  pub source: String,
}

#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.filename,
      Self::Asset(asset) => &asset.filename,
    }
  }

  pub fn content_as_str(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.code,
      Self::Asset(asset) => &asset.source,
    }
  }

  pub fn as_chunk(&self) -> Option<&OutputChunk> {
    match self {
      Self::Chunk(chunk) => Some(&**chunk),
      Self::Asset(_) => None,
    }
  }

  pub fn as_asset(&self) -> Option<&OutputAsset> {
    match self {
      Self::Asset(asset) => Some(&**asset),
      Self::Chunk(_) => None,
    }
  }
}

impl From<OutputChunk> for Output {
  fn from(chunk: OutputChunk) -> Self {
    Self::Chunk(Box::new(chunk))
  }
}

impl From<OutputAsset> for Output {
  fn from(asset: OutputAsset) -> Self {
    Self::Asset(Box::new(asset))
  }
}

/// Everything the host produced for one build, keyed by file name in emission order.
#[derive(Debug, Clone, Default)]
pub struct OutputBundle {
  outputs: FxIndexMap<ArcStr, Output>,
}

impl OutputBundle {
  pub fn new(outputs: impl IntoIterator<Item = Output>) -> Self {
    let mut bundle = Self::default();
    outputs.into_iter().for_each(|output| {
      bundle.insert(output);
    });
    bundle
  }

  /// Adds `output` under its own file name, replacing any previous entry of that name.
  pub fn insert(&mut self, output: Output) -> Option<Output> {
    let filename = ArcStr::from(output.filename());
    self.outputs.insert(filename, output)
  }

  pub fn emit_asset(&mut self, filename: impl Into<ArcStr>, source: String) -> Option<Output> {
    self.insert(OutputAsset { filename: filename.into(), source }.into())
  }

  /// Removes an entry and keeps the order of the remaining ones.
  pub fn remove(&mut self, filename: &str) -> Option<Output> {
    self.outputs.shift_remove(filename)
  }

  pub fn get(&self, filename: &str) -> Option<&Output> {
    self.outputs.get(filename)
  }

  pub fn get_mut(&mut self, filename: &str) -> Option<&mut Output> {
    self.outputs.get_mut(filename)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Output> {
    self.outputs.values()
  }

  pub fn filenames(&self) -> impl Iterator<Item = &str> {
    self.outputs.keys().map(ArcStr::as_str)
  }

  pub fn len(&self) -> usize {
    self.outputs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.outputs.is_empty()
  }
}

#[test]
fn test_output_bundle_order() {
  let mut bundle = OutputBundle::new([
    OutputAsset { filename: "a.css".into(), source: "a{}".to_string() }.into(),
    OutputChunk { filename: "index.js".into(), code: "1".to_string(), is_entry: true }.into(),
    OutputAsset { filename: "b.css".into(), source: "b{}".to_string() }.into(),
  ]);

  assert!(bundle.remove("a.css").is_some());
  bundle.emit_asset("index.meta.js", String::new());

  assert_eq!(bundle.filenames().collect::<Vec<_>>(), ["index.js", "b.css", "index.meta.js"]);
  assert_eq!(bundle.get("b.css").map(Output::content_as_str), Some("b{}"));
  assert!(bundle.get("index.js").and_then(Output::as_chunk).is_some_and(|c| c.is_entry));
}
