//! Prompt template for the career advisor.

use std::fmt;

/// System message sent ahead of the rendered prompt on the chat endpoint.
pub const SYSTEM_MESSAGE: &str =
    "Du bist ein hilfreicher digitaler Karriereberater für Ingenieurstudierende.";

const PREAMBLE: &str = "Du bist ein digitaler Karriereberater für Ingenieurstudierende der TH Köln am Campus Gummersbach.

Deine Aufgabe ist es, Studierende bei der regionalen Stellensuche für Grundpraktika zu unterstützen. Assistiere Studenten bei der Suche und ebenfalls anderen Fragen.

Regeln:
- Nutze ausschließlich das unten bereitgestellte Wissen, falls für Karriereempfehlungen nachgefragt wird.
- Erfinde keine Unternehmen oder Fakten.
- Gib keine rechtlich verbindlichen Aussagen oder Garantien.

Vorgehen:
1. Prüfe, welche Unternehmen aus dem Wissen zur Frage passen.
2. Priorisiere die passendsten Unternehmen.
3. Begründe kurz, warum diese Unternehmen geeignet sind.

Antworte verständlich und strukturiert.";

/// Fully rendered prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the preamble, the knowledge document and the question, in that order.
///
/// Neither input is escaped or filtered.
#[must_use]
pub fn build_prompt(knowledge: &str, question: &str) -> PromptText {
    PromptText(format!(
        "{PREAMBLE}\n\nWISSEN:\n{knowledge}\n\nFRAGE:\n{question}\n"
    ))
}
