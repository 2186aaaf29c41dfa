use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One analyzable unit: a function, method or class.
///
/// `module` is not part of the analyzer's block JSON; it is filled in from
/// the result-set key when the set is ingested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexityBlock {
    #[serde(default)]
    pub module: String,
    pub name: String,
    pub lineno: u32,
    pub complexity: u32,
}

impl ComplexityBlock {
    pub fn new(module: impl Into<String>, name: impl Into<String>, lineno: u32, complexity: u32) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            lineno,
            complexity,
        }
    }
}

/// Analyzer outcome for a single module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleResult {
    Blocks(Vec<ComplexityBlock>),
    ParseError(ParseFailure),
}

/// Error marker the analyzer emits in place of a block list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub error: String,
}

impl ModuleResult {
    pub fn parse_error(error: impl Into<String>) -> Self {
        ModuleResult::ParseError(ParseFailure {
            error: error.into(),
        })
    }
}

/// Module identifier to analyzer outcome, in analyzer output order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(IndexMap<String, ModuleResult>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the analyzer's JSON output and stamp each block with its module.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut set: ResultSet = serde_json::from_str(json)?;
        set.attach_modules();
        Ok(set)
    }

    pub fn insert(&mut self, module: impl Into<String>, result: ModuleResult) {
        self.0.insert(module.into(), result);
    }

    pub fn with_blocks(mut self, module: &str, blocks: Vec<(&str, u32, u32)>) -> Self {
        let blocks = blocks
            .into_iter()
            .map(|(name, lineno, complexity)| ComplexityBlock::new(module, name, lineno, complexity))
            .collect();
        self.insert(module, ModuleResult::Blocks(blocks));
        self
    }

    pub fn with_error(mut self, module: &str, error: &str) -> Self {
        self.insert(module, ModuleResult::parse_error(error));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleResult)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn attach_modules(&mut self) {
        for (module, result) in self.0.iter_mut() {
            if let ModuleResult::Blocks(blocks) = result {
                for block in blocks.iter_mut() {
                    block.module.clone_from(module);
                }
            }
        }
    }
}

impl FromIterator<(String, ModuleResult)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (String, ModuleResult)>>(iter: I) -> Self {
        let mut set = ResultSet(iter.into_iter().collect());
        set.attach_modules();
        set
    }
}
