//! Line classification cascade
//!
//! Each line is tested against `RULES` top to bottom and the first match
//! decides its block kind. The order is part of the behavior: several
//! predicates overlap (a long upper-case `DA ... VARA` line satisfies both
//! the caption and the section rule) and only position resolves them.
//!
//! Predicates look at the trimmed raw line, markup included. Display text
//! is cleaned afterwards by the caller.

use super::{clean_display, BlockKind};
use crate::markup::{find_alignment, Alignment};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines from the end of the document still considered for signatures
const SIGNATURE_TAIL: usize = 5;
/// Lines from the start still considered for the action title
const TITLE_HEAD: usize = 5;

const SECTION_KEYWORDS: [&str; 5] = [
    "QUALIFICAÇÃO",
    "DOS FATOS",
    "DO DIREITO",
    "DOS PEDIDOS",
    "VALOR DA CAUSA",
];
const SECTION_PREFIXES: [&str; 3] = ["DOS ", "DA ", "DO "];

static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.)\s(.*)$").expect("valid numbered regex"));

static LETTERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]\))\s(.*)$").expect("valid lettered regex"));

// "Brasília, 15 de março de 2024" / "São Paulo, 1º de abril de 2024"
static PLACE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}[\p{L}\s'.-]*,\s*\d{1,2}º?\s+de\s+\p{L}+\s+de\s+\d{4}")
        .expect("valid place/date regex")
});

// "Curitiba/PR, ..."
static PLACE_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}[\p{L}\s'.-]*/\p{Lu}{2},").expect("valid place/state regex")
});

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.*\]$").expect("valid bracketed regex"));

/// One line as seen by the rules
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Zero-based line index
    pub index: usize,
    /// Number of lines in the document
    pub total: usize,
    pub raw: &'a str,
    pub trimmed: &'a str,
    len: usize,
}

impl<'a> LineContext<'a> {
    pub fn new(index: usize, total: usize, raw: &'a str) -> Self {
        let trimmed = raw.trim();
        Self {
            index,
            total,
            raw,
            trimmed,
            len: trimmed.chars().count(),
        }
    }

    /// Length of the trimmed line in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    fn contains(&self, needle: &str) -> bool {
        self.trimmed.contains(needle)
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.trimmed.contains(n))
    }

    /// Upper-casing the line leaves it unchanged
    fn is_upper(&self) -> bool {
        self.trimmed.to_uppercase() == self.trimmed
    }

    fn near_end(&self) -> bool {
        self.index >= self.total.saturating_sub(SIGNATURE_TAIL)
    }
}

/// A classification rule: predicate plus block builder
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&LineContext<'_>) -> bool,
    pub build: fn(&LineContext<'_>) -> BlockKind,
}

/// Classification cascade, evaluated in order; the last rule always matches
pub static RULES: [Rule; 12] = [
    Rule { name: "blank", matches: is_blank, build: |_| BlockKind::Spacer },
    Rule { name: "caption", matches: is_caption, build: |_| BlockKind::Caption },
    Rule { name: "action_title", matches: is_action_title, build: |_| BlockKind::ActionTitle },
    Rule { name: "section_heading", matches: is_section_heading, build: |_| BlockKind::SectionHeading },
    Rule { name: "party_qualification", matches: is_party, build: build_party },
    Rule { name: "numbered_paragraph", matches: is_numbered, build: build_numbered },
    Rule { name: "lettered_item", matches: is_lettered, build: build_lettered },
    Rule { name: "closing_phrase", matches: is_closing, build: |_| BlockKind::ClosingPhrase },
    Rule { name: "place_date", matches: is_place_date, build: |_| BlockKind::PlaceDate },
    Rule { name: "signature", matches: is_signature, build: |_| BlockKind::Signature },
    Rule { name: "inline_alignment", matches: is_aligned, build: build_aligned },
    Rule { name: "paragraph", matches: |_| true, build: build_paragraph },
];

/// First rule that accepts the line
pub fn matching_rule(ctx: &LineContext<'_>) -> &'static Rule {
    let rule = RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .unwrap_or(&RULES[RULES.len() - 1]);
    log::trace!("line {} -> {}", ctx.index, rule.name);
    rule
}

/// Classify one line
pub fn classify_line(ctx: &LineContext<'_>) -> BlockKind {
    (matching_rule(ctx).build)(ctx)
}

fn is_blank(ctx: &LineContext<'_>) -> bool {
    ctx.is_blank()
}

fn is_caption(ctx: &LineContext<'_>) -> bool {
    ctx.contains("EXCELENTÍSSIMO")
        || ctx.contains("JUIZ DE DIREITO")
        || (ctx.is_upper() && ctx.len() > 30 && (ctx.contains("VARA") || ctx.contains("COMARCA")))
}

fn is_action_title(ctx: &LineContext<'_>) -> bool {
    ctx.index < TITLE_HEAD
        && ctx.len() > 10
        && ctx.len() < 100
        && !ctx.contains("EXCELENTÍSSIMO")
        && !ctx.contains("QUALIFICAÇÃO")
}

fn is_section_heading(ctx: &LineContext<'_>) -> bool {
    ctx.is_upper()
        && (ctx.contains_any(&SECTION_KEYWORDS)
            || SECTION_PREFIXES.iter().any(|p| ctx.trimmed.starts_with(p)))
}

fn is_party(ctx: &LineContext<'_>) -> bool {
    (ctx.contains("REQUERENTE:") || ctx.contains("REQUERIDO:")) && ctx.trimmed.split(':').count() >= 2
}

fn build_party(ctx: &LineContext<'_>) -> BlockKind {
    let (label, value) = ctx.trimmed.split_once(':').unwrap_or((ctx.trimmed, ""));
    BlockKind::PartyQualification {
        label: format!("{}:", clean_display(label.trim())),
        value: clean_display(value.trim()),
    }
}

fn is_numbered(ctx: &LineContext<'_>) -> bool {
    NUMBERED.is_match(ctx.trimmed)
}

fn build_numbered(ctx: &LineContext<'_>) -> BlockKind {
    let (number, body) = split_token(&NUMBERED, ctx.trimmed);
    BlockKind::NumberedParagraph { number, body }
}

fn is_lettered(ctx: &LineContext<'_>) -> bool {
    LETTERED.is_match(ctx.trimmed)
}

fn build_lettered(ctx: &LineContext<'_>) -> BlockKind {
    let (letter, body) = split_token(&LETTERED, ctx.trimmed);
    BlockKind::LetteredItem { letter, body }
}

/// Leading token and cleaned body of a numbered/lettered line
fn split_token(re: &Regex, line: &str) -> (String, String) {
    match re.captures(line) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).to_string(),
            clean_display(caps.get(2).map_or("", |m| m.as_str()).trim()),
        ),
        None => (String::new(), clean_display(line)),
    }
}

fn is_closing(ctx: &LineContext<'_>) -> bool {
    let lower = ctx.trimmed.to_lowercase();
    lower.contains("nestes termos") || lower.contains("pede deferimento")
}

fn is_place_date(ctx: &LineContext<'_>) -> bool {
    PLACE_DATE.is_match(ctx.trimmed) || PLACE_STATE.is_match(ctx.trimmed)
}

fn is_signature(ctx: &LineContext<'_>) -> bool {
    ctx.contains("OAB") || BRACKETED.is_match(ctx.trimmed) || (ctx.len() < 50 && ctx.near_end())
}

fn is_aligned(ctx: &LineContext<'_>) -> bool {
    find_alignment(ctx.trimmed).is_some()
}

fn build_aligned(ctx: &LineContext<'_>) -> BlockKind {
    BlockKind::Aligned {
        align: find_alignment(ctx.trimmed).unwrap_or(Alignment::Left),
    }
}

fn build_paragraph(ctx: &LineContext<'_>) -> BlockKind {
    let indented = ctx.len() > 100 && !ctx.contains_any(&[":", "Art.", "§", "OAB"]);
    BlockKind::Paragraph { indented }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rule name for a line in the middle of a long document
    fn rule_for(line: &str) -> &'static str {
        matching_rule(&LineContext::new(10, 40, line)).name
    }

    #[test]
    fn test_rules_are_ordered_and_total() {
        assert_eq!(RULES.len(), 12);
        assert_eq!(RULES[0].name, "blank");
        assert_eq!(RULES[11].name, "paragraph");
        assert_eq!(rule_for("qualquer texto"), "paragraph");
    }

    #[test]
    fn test_caption_wins_over_section_heading() {
        let line = "DA VARA CÍVEL DA COMARCA DE SÃO PAULO";
        assert!(line.chars().count() > 30);
        let ctx = LineContext::new(10, 40, line);
        assert!(is_section_heading(&ctx));
        assert_eq!(matching_rule(&ctx).name, "caption");
    }

    #[test]
    fn test_caption_keywords_ignore_case_rule() {
        assert_eq!(rule_for("Excelentíssimo Senhor EXCELENTÍSSIMO"), "caption");
        assert_eq!(rule_for("ao juiz JUIZ DE DIREITO da vara"), "caption");
        // Too short for the upper-case VARA/COMARCA branch
        assert_eq!(rule_for("DA VARA"), "section_heading");
    }

    #[test]
    fn test_action_title_only_near_top() {
        let line = "AÇÃO DE INDENIZAÇÃO POR DANOS MORAIS";
        assert_eq!(matching_rule(&LineContext::new(2, 40, line)).name, "action_title");
        assert_eq!(matching_rule(&LineContext::new(6, 40, line)).name, "paragraph");

        // Length bounds are strict
        let ten = "abcdefghij";
        assert_eq!(matching_rule(&LineContext::new(0, 40, ten)).name, "paragraph");
        assert_eq!(matching_rule(&LineContext::new(0, 40, "abcdefghijk")).name, "action_title");
    }

    #[test]
    fn test_action_title_excludes_qualification() {
        let ctx = LineContext::new(1, 40, "QUALIFICAÇÃO DAS PARTES");
        assert_eq!(matching_rule(&ctx).name, "section_heading");
    }

    #[test]
    fn test_section_prefixes_require_upper_case() {
        assert_eq!(rule_for("DOS DANOS MORAIS"), "section_heading");
        assert_eq!(rule_for("VALOR DA CAUSA"), "section_heading");
        assert_eq!(rule_for("Dos danos morais e materiais sofridos"), "paragraph");
    }

    #[test]
    fn test_party_qualification_split() {
        let ctx = LineContext::new(10, 40, "REQUERENTE: **João da Silva**, CPF: 123");
        assert_eq!(
            classify_line(&ctx),
            BlockKind::PartyQualification {
                label: "REQUERENTE:".to_string(),
                value: "João da Silva, CPF: 123".to_string(),
            }
        );
    }

    #[test]
    fn test_numbered_and_lettered_extraction() {
        let ctx = LineContext::new(10, 40, "1. O autor requer...");
        assert_eq!(
            classify_line(&ctx),
            BlockKind::NumberedParagraph { number: "1.".to_string(), body: "O autor requer...".to_string() }
        );

        let ctx = LineContext::new(10, 40, "  a) Conceder a liminar;");
        assert_eq!(
            classify_line(&ctx),
            BlockKind::LetteredItem { letter: "a)".to_string(), body: "Conceder a liminar;".to_string() }
        );

        // No space after the token: not a numbered paragraph
        assert_eq!(rule_for("1.5 milhões de reais foram pagos ao requerido"), "paragraph");
    }

    #[test]
    fn test_closing_phrase_case_insensitive() {
        assert_eq!(rule_for("NESTES TERMOS,"), "closing_phrase");
        assert_eq!(rule_for("Pede deferimento."), "closing_phrase");
    }

    #[test]
    fn test_place_date_patterns() {
        assert_eq!(rule_for("Brasília, 15 de março de 2024."), "place_date");
        assert_eq!(rule_for("São Paulo, 1º de abril de 2024"), "place_date");
        assert_eq!(rule_for("Curitiba/PR, data do protocolo eletrônico."), "place_date");
        assert_eq!(rule_for("brasília, 15 de março de 2024 foi a data da audiência"), "paragraph");
    }

    #[test]
    fn test_signature_heuristics() {
        assert_eq!(rule_for("Advogado inscrito na OAB/SP sob o número 123.456 desde 2001"), "signature");
        assert_eq!(rule_for("[Nome do Advogado]"), "signature");

        // Short line near the end of the document
        let ctx = LineContext::new(36, 40, "Maria Souza");
        assert_eq!(matching_rule(&ctx).name, "signature");
        // First index inside the window
        let ctx = LineContext::new(35, 40, "Maria Souza");
        assert_eq!(matching_rule(&ctx).name, "signature");
        let ctx = LineContext::new(34, 40, "Maria Souza");
        assert_eq!(matching_rule(&ctx).name, "paragraph");
    }

    #[test]
    fn test_inline_alignment() {
        let ctx = LineContext::new(10, 40, r#"<div style="text-align: right">Texto alinhado à direita do documento</div>"#);
        assert_eq!(classify_line(&ctx), BlockKind::Aligned { align: Alignment::Right });

        let ctx = LineContext::new(10, 40, r#"<div style="font-weight: bold">Texto com estilo sem alinhamento definido</div>"#);
        assert_eq!(classify_line(&ctx), BlockKind::Aligned { align: Alignment::Left });
    }

    #[test]
    fn test_paragraph_indent() {
        let long = "O requerente celebrou contrato de prestação de serviços com a requerida, que deixou de cumprir as obrigações assumidas";
        assert!(long.chars().count() > 100);
        assert_eq!(classify_line(&LineContext::new(10, 40, long)), BlockKind::Paragraph { indented: true });

        let with_article = format!("{long} conforme Art. 186");
        assert_eq!(
            classify_line(&LineContext::new(10, 40, &with_article)),
            BlockKind::Paragraph { indented: false }
        );
    }
}
