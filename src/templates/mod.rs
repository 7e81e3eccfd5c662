//! Canned petition sections
//!
//! Each template is fixed Portuguese boilerplate. The text is written so the
//! renderer picks up its structure: upper-case section headings, numbered
//! paragraphs, lettered requests and the closing/signature lines.

use crate::error::EditorError;
use crate::text::{char_len, char_to_byte, EditResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FACTS: &str = "\n\nDOS FATOS\n\n\
1. [Descreva o primeiro fato relevante para a demanda.]\n\n\
2. [Descreva o segundo fato, indicando datas e documentos.]\n\n\
3. [Descreva o terceiro fato e suas consequências para o autor.]\n";

const LAW: &str = "\n\nDO DIREITO\n\n\
[Exponha os fundamentos jurídicos do pedido.]\n\n\
Nos termos do Art. [número] da Lei nº [número], [transcreva o dispositivo aplicável].\n\n\
[Cite a doutrina e a jurisprudência que amparam a pretensão.]\n";

const REQUESTS: &str = "\n\nDOS PEDIDOS\n\n\
Diante do exposto, requer a Vossa Excelência:\n\n\
a) A citação do requerido para, querendo, apresentar contestação;\n\
b) A procedência total dos pedidos formulados;\n\
c) A condenação do requerido ao pagamento das custas e honorários advocatícios;\n\
d) A produção de todas as provas em direito admitidas.\n";

const CLOSURE: &str = "\n\nNestes termos,\n\
Pede deferimento.\n\n\
[Cidade], [dia] de [mês] de [ano].\n\n\
[Nome do Advogado]\n\
OAB/[UF] nº [número]\n";

/// Section template offered by the editor toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Facts,
    Law,
    Requests,
    Closure,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Facts,
        TemplateKind::Law,
        TemplateKind::Requests,
        TemplateKind::Closure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Facts => "facts",
            TemplateKind::Law => "law",
            TemplateKind::Requests => "requests",
            TemplateKind::Closure => "closure",
        }
    }

    /// Boilerplate inserted for this template
    pub fn text(&self) -> &'static str {
        match self {
            TemplateKind::Facts => FACTS,
            TemplateKind::Law => LAW,
            TemplateKind::Requests => REQUESTS,
            TemplateKind::Closure => CLOSURE,
        }
    }
}

impl FromStr for TemplateKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EditorError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Insert the template text at `cursor`; the cursor moves past it
pub fn insert_template(content: &str, cursor: usize, kind: TemplateKind) -> EditResult {
    let cursor = cursor.min(char_len(content));
    let at = char_to_byte(content, cursor);
    let text = kind.text();

    log::debug!("insert_template: {} at {}", kind, cursor);

    let mut result = String::with_capacity(content.len() + text.len());
    result.push_str(&content[..at]);
    result.push_str(text);
    result.push_str(&content[at..]);

    EditResult::new(result, cursor + char_len(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_contains_closing_phrases() {
        let result = insert_template("", 0, TemplateKind::Closure);
        assert!(result.content.contains("Nestes termos,"));
        assert!(result.content.contains("Pede deferimento."));
        assert_eq!(result.cursor, char_len(&result.content));
    }

    #[test]
    fn test_insert_in_the_middle() {
        let content = "inicio|fim";
        let result = insert_template(content, 6, TemplateKind::Facts);
        assert!(result.content.starts_with("inicio\n\nDOS FATOS"));
        assert!(result.content.ends_with("|fim"));
        assert_eq!(result.cursor, 6 + char_len(FACTS));
    }

    #[test]
    fn test_cursor_clamped_to_end() {
        let result = insert_template("ação", 99, TemplateKind::Law);
        assert!(result.content.starts_with("ação\n\nDO DIREITO"));
        assert_eq!(result.cursor, 4 + char_len(LAW));
    }

    #[test]
    fn test_repeated_insertion() {
        let once = insert_template("", 0, TemplateKind::Requests);
        let twice = insert_template(&once.content, once.cursor, TemplateKind::Requests);
        assert_eq!(twice.content.matches("DOS PEDIDOS").count(), 2);
    }

    #[test]
    fn test_template_names() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.name().parse::<TemplateKind>(), Ok(kind));
        }
        assert_eq!(
            "preamble".parse::<TemplateKind>(),
            Err(EditorError::UnknownTemplate("preamble".to_string()))
        );
    }
}
