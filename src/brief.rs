//! TOML briefs describing who the email is for and what it sells.
//!
//! Each table renders to a block of `Label: value` lines, which becomes one
//! of the free-text profiles in an [`OutreachRequest`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::generator::{OutreachRequest, Tone};

#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    #[error("Failed to read brief {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid brief: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Brief {
    #[serde(default)]
    pub tone: Option<Tone>,
    pub company: CompanyProfile,
    pub persona: PersonaProfile,
    pub product: ProductProfile,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub pain_points: Option<String>,
    pub recent_news: Option<String>,
    pub tech_stack: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PersonaProfile {
    pub name: String,
    pub role: Option<String>,
    pub seniority: Option<String>,
    pub responsibilities: Option<String>,
    pub kpis: Option<String>,
    pub challenges: Option<String>,
    pub cares_about: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ProductProfile {
    pub name: String,
    pub summary: Option<String>,
    pub value_props: Option<String>,
    pub features: Option<String>,
    pub target_users: Option<String>,
    pub benefits: Option<String>,
    pub risks_eliminated: Option<String>,
}

impl Brief {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BriefError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BriefError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let brief = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded brief for {} / {} from {}",
            brief.company.name,
            brief.persona.name,
            path.display()
        );
        Ok(brief)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, BriefError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the request for this brief. An explicit `tone` wins over the
    /// one in the brief.
    pub fn to_request(&self, tone: Option<Tone>) -> OutreachRequest {
        OutreachRequest::new(
            self.company.render(),
            self.persona.render(),
            self.product.render(),
            tone.or(self.tone).unwrap_or_default(),
        )
    }
}

impl CompanyProfile {
    pub fn render(&self) -> String {
        render_fields(&[
            ("Company", Some(self.name.as_str())),
            ("Industry", self.industry.as_deref()),
            ("Size", self.size.as_deref()),
            ("Location", self.location.as_deref()),
            ("Website", self.website.as_deref()),
            ("Pain Points", self.pain_points.as_deref()),
            ("Recent News", self.recent_news.as_deref()),
            ("Tech Stack", self.tech_stack.as_deref()),
        ])
    }
}

impl PersonaProfile {
    pub fn render(&self) -> String {
        render_fields(&[
            ("Name", Some(self.name.as_str())),
            ("Role", self.role.as_deref()),
            ("Seniority", self.seniority.as_deref()),
            ("Responsibilities", self.responsibilities.as_deref()),
            ("KPIs", self.kpis.as_deref()),
            ("Challenges", self.challenges.as_deref()),
            ("What they care about", self.cares_about.as_deref()),
        ])
    }
}

impl ProductProfile {
    pub fn render(&self) -> String {
        render_fields(&[
            ("Product", Some(self.name.as_str())),
            ("Short Summary", self.summary.as_deref()),
            ("Core Value Props", self.value_props.as_deref()),
            ("Features", self.features.as_deref()),
            ("Target Users", self.target_users.as_deref()),
            ("Main Benefits", self.benefits.as_deref()),
            ("Risks it Eliminates", self.risks_eliminated.as_deref()),
        ])
    }
}

fn render_fields(fields: &[(&str, Option<&str>)]) -> String {
    fields
        .iter()
        .filter_map(|&(label, value)| {
            let value = value?.trim();
            (!value.is_empty()).then(|| format!("{}: {}", label, value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
