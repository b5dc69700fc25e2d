//! Scripted dialogues: `field,value` CSV rows replayed against a session.

use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{Field, UnknownField};
use super::session::UnderwritingSession;

/// One scripted turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptStep {
    Submit { field: Field, value: Option<String> },
    Summary,
    Reset,
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    field: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

pub fn parse_transcript<R: Read>(reader: R) -> Result<Vec<TranscriptStep>, TranscriptError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut steps = Vec::new();

    for (index, record) in csv_reader.deserialize::<TranscriptRow>().enumerate() {
        let row = record?;
        let step = match row.field.to_ascii_lowercase().as_str() {
            "summary" => TranscriptStep::Summary,
            "reset" => TranscriptStep::Reset,
            _ => {
                let field = row
                    .field
                    .parse::<Field>()
                    .map_err(|source| TranscriptError::UnknownField {
                        row: index + 1,
                        source,
                    })?;
                TranscriptStep::Submit {
                    field,
                    value: row.value,
                }
            }
        };
        steps.push(step);
    }

    Ok(steps)
}

pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Vec<TranscriptStep>, TranscriptError> {
    let file = std::fs::File::open(path)?;
    parse_transcript(file)
}

/// Play every step against `session`, collecting the messages a user would see.
pub fn replay(session: &mut UnderwritingSession, steps: &[TranscriptStep]) -> Vec<String> {
    let mut messages = Vec::new();

    for step in steps {
        match step {
            TranscriptStep::Submit { field, value } => {
                let outcome = session.submit(*field, value.as_deref());
                messages.push(outcome.message().to_string());
                if outcome.is_accepted() && matches!(field, Field::SalesPrice | Field::DownPayment)
                {
                    if let Some(prompt) = session.next_prompt() {
                        messages.push(prompt.to_string());
                    }
                }
            }
            TranscriptStep::Summary => messages.push(session.summary().text()),
            TranscriptStep::Reset => messages.push(session.reset().message.to_string()),
        }
    }

    messages
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|inner| !inner.trim().is_empty()))
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("unable to read transcript: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed transcript: {0}")]
    Csv(#[from] csv::Error),
    #[error("transcript row {row}: {source}")]
    UnknownField { row: usize, source: UnknownField },
}
