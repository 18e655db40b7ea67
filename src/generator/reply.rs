use serde::Deserialize;

use super::{CompletionError, OutreachResult, Shape};

pub const EMAIL_MARKER: &str = "EMAIL:";
pub const REASONS_MARKER: &str = "REASONS:";
pub const MISSING_REASON: &str = "Reason not generated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    RequestFailed,
    InvalidJson,
    MissingMarkers,
}

/// Outcome of parsing a model reply. A fallback still carries a usable
/// result: the error message, or the raw reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    Parsed(OutreachResult),
    Fallback {
        result: OutreachResult,
        cause: FallbackCause,
    },
}

impl ParsedReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedReply::Fallback { .. })
    }

    pub fn into_result(self) -> OutreachResult {
        match self {
            ParsedReply::Parsed(result) => result,
            ParsedReply::Fallback { result, .. } => result,
        }
    }
}

#[derive(Deserialize, Debug)]
struct StructuredReply {
    email: String,
    #[serde(default)]
    why_this_match_works: Vec<String>,
}

pub fn parse_reply(raw: Result<String, CompletionError>, shape: Shape) -> ParsedReply {
    let raw = match raw {
        Ok(raw) => raw,
        Err(err) => {
            return ParsedReply::Fallback {
                result: OutreachResult::failure(err.to_string()),
                cause: FallbackCause::RequestFailed,
            }
        }
    };

    match shape {
        Shape::Structured => parse_structured(raw),
        Shape::Delimited => parse_delimited(raw),
    }
}

fn parse_structured(raw: String) -> ParsedReply {
    match serde_json::from_str::<StructuredReply>(&raw) {
        Ok(reply) => ParsedReply::Parsed(OutreachResult {
            email_text: reply.email,
            reasons: reply.why_this_match_works,
        }),
        Err(err) => {
            log::warn!("reply is not the expected JSON object ({}), using raw text", err);
            ParsedReply::Fallback {
                result: OutreachResult {
                    email_text: raw,
                    reasons: Vec::new(),
                },
                cause: FallbackCause::InvalidJson,
            }
        }
    }
}

fn parse_delimited(raw: String) -> ParsedReply {
    match split_delimited(&raw) {
        Some(result) => ParsedReply::Parsed(result),
        None => {
            log::warn!(
                "reply is missing the {} or {} marker, using raw text",
                EMAIL_MARKER,
                REASONS_MARKER
            );
            ParsedReply::Fallback {
                result: OutreachResult {
                    email_text: raw,
                    reasons: vec![MISSING_REASON.to_string()],
                },
                cause: FallbackCause::MissingMarkers,
            }
        }
    }
}

// Each block runs from its marker to the other marker, or to the end of the reply.
fn split_delimited(raw: &str) -> Option<OutreachResult> {
    let (_, after_email) = raw.split_once(EMAIL_MARKER)?;
    let (_, after_reasons) = raw.split_once(REASONS_MARKER)?;

    let email = after_email
        .split_once(REASONS_MARKER)
        .map_or(after_email, |(email, _)| email);
    let reasons = after_reasons
        .split_once(EMAIL_MARKER)
        .map_or(after_reasons, |(reasons, _)| reasons);

    let reasons = reasons
        .lines()
        .map(|line| line.trim_start_matches(['-', ' ']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Some(OutreachResult {
        email_text: email.trim().to_string(),
        reasons,
    })
}
