//! Prompt rendering for the specialist recommender.

use crate::models::PatientContext;

const ROLE: &str =
    "You are an AI assistant specialized in recommending relevant medical specialities to patients.";

const INSTRUCTIONS: &str = "Based on the patient's described symptoms, location, and past consultation history, identify the most appropriate medical specialities for their needs.\nExplain the reasoning behind each recommendation.";

const CLOSING: &str = "Consider the location to find specialities that would be most helpful in that region. Pay special attention to the symptoms, as those are most important.\nReturn the list of specialities in JSON format. Make sure it is a valid JSON array.";

pub fn render(context: &PatientContext) -> String {
    format!(
        "{ROLE}\n\n{INSTRUCTIONS}\n\nSymptoms: {}\nLocation: {}\nPast Consultation History: {}\n\n{CLOSING}\n",
        context.symptoms,
        context.location,
        context.past_consultation_history.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_patient_lines() {
        let prompt = render(&PatientContext {
            symptoms: "Itchy rash on both arms".into(),
            location: "Kochi".into(),
            past_consultation_history: Some("Eczema in 2019".into()),
        });

        assert!(prompt.starts_with(ROLE));
        assert!(prompt.contains("Symptoms: Itchy rash on both arms\n"));
        assert!(prompt.contains("Location: Kochi\n"));
        assert!(prompt.contains("Past Consultation History: Eczema in 2019\n"));
        assert!(prompt.contains("valid JSON array"));
    }

    #[test]
    fn missing_history_renders_empty() {
        let prompt = render(&PatientContext {
            symptoms: "Itchy rash on both arms".into(),
            location: "Kochi".into(),
            past_consultation_history: None,
        });
        assert!(prompt.contains("Past Consultation History: \n"));
    }
}
