use outreach::generator::prompt::{build_prompt, DELIMITED_FORMAT, PREAMBLE, STRUCTURED_FORMAT};
use outreach::generator::{OutreachRequest, Shape, Tone};

fn request(tone: Tone) -> OutreachRequest {
    OutreachRequest::new(
        "Company: AcmeHR\nIndustry: HR Tech\nSize: 150 employees",
        "Name: Sarah Gomez\nRole: HR Director",
        "Product: AllOfTech AI HR Suite\nValue: reduces time-to-hire by 60%",
        tone,
    )
}

#[test]
fn build_prompt_is_deterministic() {
    let first = build_prompt(&request(Tone::Formal), Shape::Structured);
    let second = build_prompt(&request(Tone::Formal), Shape::Structured);

    assert_eq!(first, second);
}

#[test]
fn build_prompt_includes_profiles_and_tone_verbatim() {
    let req = request(Tone::Long);
    let output = build_prompt(&req, Shape::Structured);

    assert!(output.starts_with(PREAMBLE));
    assert!(output.contains(&req.company_profile));
    assert!(output.contains(&req.persona_profile));
    assert!(output.contains(&req.product_description));
    assert!(output.contains("- Tone: Long"));
}

#[test]
fn build_prompt_asks_for_one_cta_and_three_reasons() {
    let output = build_prompt(&request(Tone::Friendly), Shape::Delimited);

    assert!(output.contains("exactly 1 strong call-to-action"));
    assert!(output.contains("exactly 3 bullet points"));
}

#[test]
fn structured_prompt_requests_json_object() {
    let output = build_prompt(&request(Tone::Short), Shape::Structured);

    assert!(output.contains(STRUCTURED_FORMAT));
    assert!(output.contains("\"why_this_match_works\""));
    assert!(!output.contains("REASONS:"));
}

#[test]
fn delimited_prompt_requests_marker_lines() {
    let output = build_prompt(&request(Tone::Short), Shape::Delimited);

    assert!(output.contains(DELIMITED_FORMAT));
    assert!(output.contains("\nEMAIL:\n"));
    assert!(output.contains("\nREASONS:\n- Reason 1"));
    assert!(!output.contains("why_this_match_works"));
}

#[test]
fn tone_changes_only_the_tone_line() {
    let formal = build_prompt(&request(Tone::Formal), Shape::Structured);
    let friendly = build_prompt(&request(Tone::Friendly), Shape::Structured);

    assert_ne!(formal, friendly);
    assert_eq!(
        formal.replace("- Tone: Formal", "- Tone: Friendly"),
        friendly
    );
}
