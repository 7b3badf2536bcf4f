/// Prompt templates sent to the travel agent, parameterised by the country
/// the assistant covers.
#[derive(Debug, Clone)]
pub struct PromptBook {
    country: String,
}

impl PromptBook {
    pub fn new(country: impl Into<String>) -> Self {
        Self { country: country.into() }
    }

    pub fn system_prompt(&self) -> String {
        format!(
            r#"You help users plan trips to {country}. Give detailed, personalised recommendations covering places to visit,
dining, accommodation and practical travel tips such as how long to stay in each area and the best time to visit.

## Tools

You can call the tools listed with this request to look up cities, landmarks, hotels and restaurants, to book flights,
buses, hotels and restaurants, and to summarize the reservations made so far. Use them whenever they help answer the user.

## Output Format

Always answer in Spanish. While working, use:

Thought: what you need to do next.
Action: the tool name, if you are calling one.
Action Input: the tool arguments as a JSON object, e.g. {{"city": "La Paz", "date": "2024-10-20"}}

Each tool call is answered with:

Observation: tool response

Repeat until you can answer, then finish with:

Thought: I can answer now without further tool assistance.
Answer: your answer in the user's language

or, if the tools cannot help:

Thought: I am unable to answer with the tools available.
Answer: your answer in the user's language
"#,
            country = self.country
        )
    }

    pub fn cities(&self, preferences: &[String]) -> String {
        format!(
            "Suggest {} cities to visit based on the following preferences: {}",
            self.demonym(),
            format_preferences(preferences)
        )
    }

    pub fn places(&self, city: &str, preferences: &[String]) -> String {
        if preferences.is_empty() {
            format!(
                "Suggest places to explore in {}, {}, excluding restaurants, hotels, or activities.",
                city, self.country
            )
        } else {
            format!(
                "Suggest places to explore in {}, {}, considering these preferences: {}. Focus only on tourist attractions, excluding restaurants, hotels, or activities.",
                city,
                self.country,
                format_preferences(preferences)
            )
        }
    }

    pub fn hotels(&self, city: &str, preferences: &[String]) -> String {
        if preferences.is_empty() {
            format!("Recommend hotels to stay in {}, {}.", city, self.country)
        } else {
            format!(
                "Recommend hotels in {}, {}, based on these preferences: {}",
                city,
                self.country,
                format_preferences(preferences)
            )
        }
    }

    pub fn activities(&self, city: &str, preferences: &[String]) -> String {
        if preferences.is_empty() {
            format!("Suggest activities to do in {}, {}.", city, self.country)
        } else {
            format!(
                "Suggest activities to do in {}, {}, taking into account these preferences: {}",
                city,
                self.country,
                format_preferences(preferences)
            )
        }
    }

    pub fn trip_summary(&self) -> String {
        "Generate a trip summary using the `trip_summary` tool. Afterward, provide a detailed report that includes:\n\
         1. Main highlights of the trip.\n\
         2. Potential issues or recommendations.\n\
         3. Additional insights based on the summary.\n\n\
         Please ensure the summary and the detailed report are in Spanish and provide them both as the final response."
            .to_string()
    }

    // Only the default country has a hand-written adjective form
    fn demonym(&self) -> &str {
        match self.country.as_str() {
            "Bolivia" => "Bolivian",
            other => other,
        }
    }
}

fn format_preferences(preferences: &[String]) -> String {
    preferences
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
