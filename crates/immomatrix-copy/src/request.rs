//! Campaign facts and the instruction prompt built from them.

use serde::{Deserialize, Serialize};

/// Structured facts about a property marketing campaign.
///
/// Free text; nothing is validated or escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraftRequest {
    /// Kind of project, e.g. "Neubau Eigentumswohnungen".
    pub project_type: String,
    /// Location, e.g. "Zürich Oerlikon".
    pub location: String,
    /// Unique selling points.
    pub usp: String,
    /// Target audience.
    pub target_audience: String,
}

impl Default for CampaignDraftRequest {
    fn default() -> Self {
        Self {
            project_type: "Neubau Eigentumswohnungen".to_string(),
            location: "Zürich Oerlikon".to_string(),
            usp: "Rooftop-Terrasse, Smart Home Standard, Erstbezug".to_string(),
            target_audience: "Young Professionals, Expats".to_string(),
        }
    }
}

impl CampaignDraftRequest {
    /// Render the German instruction prompt.
    ///
    /// All four fields are embedded verbatim.
    #[must_use]
    pub fn render_prompt(&self) -> String {
        format!(
            "Du bist ein Experte für digitale Immobilienvermarktung in der Schweiz.\n\
             Erstelle basierend auf den folgenden Daten kurze, performance-orientierte Marketing-Texte.\n\
             \n\
             Projektdaten:\n\
             - Typ: {project_type}\n\
             - Ort: {location}\n\
             - USP: {usp}\n\
             - Zielgruppe: {target_audience}\n\
             \n\
             Bitte generiere folgenden Output im Markdown-Format:\n\
             1. **Google Search Headline** (Max 30 Zeichen)\n\
             2. **Google Search Description** (Max 90 Zeichen)\n\
             3. **LinkedIn Ad Text** (Professionell, B2B-Fokus, Max 100 Wörter)\n\
             4. **Meta/Instagram Ad Text** (Emotional, Visualisierend, Max 100 Wörter)\n\
             \n\
             Sprache: Deutsch (Schweiz). Tonalität: Hochwertig, Exklusiv, Dringlich.\n",
            project_type = self.project_type,
            location = self.location,
            usp = self.usp,
            target_audience = self.target_audience,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_all_fields() {
        let request = CampaignDraftRequest {
            project_type: "Gewerbefläche".into(),
            location: "Bern Zentrum".into(),
            usp: "Seesicht {mit} Klammern".into(),
            target_audience: "KMU".into(),
        };
        let prompt = request.render_prompt();
        assert!(prompt.contains("- Typ: Gewerbefläche\n"));
        assert!(prompt.contains("- Ort: Bern Zentrum\n"));
        assert!(prompt.contains("- USP: Seesicht {mit} Klammern\n"));
        assert!(prompt.contains("- Zielgruppe: KMU\n"));
    }

    #[test]
    fn prompt_carries_language_and_tone() {
        let prompt = CampaignDraftRequest::default().render_prompt();
        assert!(prompt.contains("Sprache: Deutsch (Schweiz)."));
        assert!(prompt.contains("Tonalität: Hochwertig, Exklusiv, Dringlich."));
        assert!(prompt.contains("Google Search Headline"));
        assert!(prompt.contains("Meta/Instagram Ad Text"));
    }

    #[test]
    fn empty_fields_still_render() {
        let request = CampaignDraftRequest {
            project_type: String::new(),
            location: String::new(),
            usp: String::new(),
            target_audience: String::new(),
        };
        assert!(request.render_prompt().contains("- Typ: \n"));
    }

    #[test]
    fn default_sample() {
        let request = CampaignDraftRequest::default();
        assert_eq!(request.location, "Zürich Oerlikon");
    }
}
