//! Headless presenter for the non-interactive modes.

use std::io::{self, Write};

use serde::Serialize;

use oersted_core::field::FieldSnapshot;
use oersted_core::questions::{MatchPolicy, QuestionBank, QuestionRecord};

use crate::output::{format_question, format_snapshot};

#[derive(Serialize)]
struct QuestionEntry<'a> {
    number: usize,
    #[serde(flatten)]
    record: &'a QuestionRecord,
    correct_options: Vec<&'static str>,
}

#[derive(Serialize)]
struct QuestionListing<'a> {
    policy: MatchPolicy,
    questions: Vec<QuestionEntry<'a>>,
}

/// Writes snapshots and question listings as text or JSON.
pub struct CliPresenter {
    json: bool,
    verbose: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(json: bool, verbose: bool) -> Self {
        Self { json, verbose }
    }

    /// Write a field snapshot.
    pub fn present_field(&self, snapshot: &FieldSnapshot, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(
            intensity = snapshot.intensity.percent(),
            json = self.json,
            "presenting field"
        );
        if self.json {
            serde_json::to_writer_pretty(&mut *out, snapshot)?;
            writeln!(out)
        } else {
            out.write_all(format_snapshot(snapshot, self.verbose).as_bytes())
        }
    }

    /// Write the question bank, marking the options `policy` accepts.
    pub fn present_questions(
        &self,
        bank: &QuestionBank,
        policy: MatchPolicy,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if self.json {
            let listing = QuestionListing {
                policy,
                questions: bank
                    .questions()
                    .iter()
                    .enumerate()
                    .map(|(i, record)| QuestionEntry {
                        number: i + 1,
                        record,
                        correct_options: record
                            .options
                            .iter()
                            .copied()
                            .filter(|o| policy.is_correct(o, record.correct_answer))
                            .collect(),
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            return writeln!(out);
        }
        for (i, question) in bank.questions().iter().enumerate() {
            out.write_all(format_question(i + 1, question, policy).as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oersted_core::field::Intensity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render_field(json: bool, intensity: i64) -> String {
        let snap = FieldSnapshot::generate(
            Intensity::clamped(intensity),
            &mut StdRng::seed_from_u64(2),
        );
        let mut buf = Vec::new();
        CliPresenter::new(json, false)
            .present_field(&snap, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn field_json_has_counts() {
        let text = render_field(true, 100);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["intensity"], 100);
        assert_eq!(value["rings"].as_array().unwrap().len(), 13);
        assert_eq!(value["filings"].as_array().unwrap().len(), 100);
    }

    #[test]
    fn field_text_at_zero() {
        let text = render_field(false, 0);
        assert!(text.contains("Rings: 5"));
        assert!(text.contains("Filings: 0"));
    }

    #[test]
    fn questions_json_lists_correct_options() {
        let bank = QuestionBank::builtin(MatchPolicy::Substring).unwrap();
        let mut buf = Vec::new();
        CliPresenter::new(true, false)
            .present_questions(&bank, MatchPolicy::Substring, &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["policy"], "substring");
        let questions = value["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0]["correct_answer"], "out");
        assert_eq!(questions[0]["current_direction"], "up");
        assert_eq!(questions[1]["correct_options"][0], "Out of the page");
    }

    #[test]
    fn questions_text_numbers_entries() {
        let bank = QuestionBank::builtin(MatchPolicy::Substring).unwrap();
        let mut buf = Vec::new();
        CliPresenter::new(false, false)
            .present_questions(&bank, MatchPolicy::Substring, &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1. Current flows upward."));
        assert!(text.contains("3. Current flows downward."));
    }
}
