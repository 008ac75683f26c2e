//! Operation chains
//!
//! An [`EditChain`] applies several editors to one text in order. Each editor
//! sees the complete output of the one before it and nothing else; editors
//! share no state.

use log::debug;

use crate::config::EditSpec;
use crate::editor::Editor;
use crate::error::Result;

/// An ordered sequence of compiled edits.
#[derive(Debug, Clone, Default)]
pub struct EditChain {
    editors: Vec<Editor>,
}

impl EditChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every spec up front, so a bad edit anywhere in the chain is
    /// reported before any text is processed.
    pub fn from_specs(specs: impl IntoIterator<Item = EditSpec>) -> Result<Self> {
        let editors = specs
            .into_iter()
            .map(Editor::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { editors })
    }

    pub fn push(&mut self, editor: Editor) {
        self.editors.push(editor);
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn editors(&self) -> &[Editor] {
        &self.editors
    }

    /// Run every editor in order, feeding each one the previous output.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (step, editor) in self.editors.iter().enumerate() {
            debug!("chain step {}: {}", step + 1, editor.form().name());
            current = editor.edit_text(&current);
        }
        current
    }
}

impl From<Editor> for EditChain {
    fn from(editor: Editor) -> Self {
        Self {
            editors: vec![editor],
        }
    }
}

impl FromIterator<Editor> for EditChain {
    fn from_iter<I: IntoIterator<Item = Editor>>(iter: I) -> Self {
        Self {
            editors: iter.into_iter().collect(),
        }
    }
}
