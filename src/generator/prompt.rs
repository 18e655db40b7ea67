use super::{OutreachRequest, Shape};

pub const PREAMBLE: &str = "You are an expert AI Outreach Generator.";

pub const REQUIREMENTS: &str = r#"- Highly personalized email
- Include exactly 1 strong call-to-action
- Explain why the prospect is a strong match in exactly 3 bullet points"#;

pub const STRUCTURED_FORMAT: &str = r#"- Return only a single JSON object in the format below, with no other text before or after it

JSON FORMAT:
{
  "email": "<personalized outreach email>",
  "why_this_match_works": ["Reason 1", "Reason 2", "Reason 3"]
}"#;

pub const DELIMITED_FORMAT: &str = r#"- Return the output in exactly the layout below, with no other text before or after it
- Put the EMAIL: and REASONS: markers on their own lines and start every reason with "- "

OUTPUT FORMAT:
EMAIL:
<personalized outreach email>
REASONS:
- Reason 1
- Reason 2
- Reason 3"#;

pub fn format_directive(shape: Shape) -> &'static str {
    match shape {
        Shape::Structured => STRUCTURED_FORMAT,
        Shape::Delimited => DELIMITED_FORMAT,
    }
}

pub fn build_prompt(request: &OutreachRequest, shape: Shape) -> String {
    format!(
        "{preamble}

### COMPANY PROFILE:
{company}

### PERSONA PROFILE:
{persona}

### PRODUCT DESCRIPTION:
{product}

### REQUIREMENTS:
- Tone: {tone} (Formal / Friendly / Short / Long)
{requirements}
{format}
",
        preamble = PREAMBLE,
        company = request.company_profile,
        persona = request.persona_profile,
        product = request.product_description,
        tone = request.tone,
        requirements = REQUIREMENTS,
        format = format_directive(shape),
    )
}
