use serde::Deserialize;

/// Job posting supplied by the caller alongside the resume upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Job {
    pub title: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub company: Option<String>,
    /// Raw job description text. Skills are matched from the explicit lists only.
    #[allow(dead_code)]
    pub jd_text: String,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub nice_skills: Option<Vec<String>>,
    #[serde(default)]
    pub min_years: Option<i64>,
    #[serde(default)]
    pub max_years: Option<i64>,
}

impl Job {
    pub fn required_skills(&self) -> &[String] {
        self.required_skills.as_deref().unwrap_or_default()
    }

    pub fn nice_skills(&self) -> &[String] {
        self.nice_skills.as_deref().unwrap_or_default()
    }
}
