//! Plain-text formatting of snapshots and questions.

use std::fmt::Write as _;

use oersted_core::field::FieldSnapshot;
use oersted_core::questions::{MatchPolicy, QuestionRecord};

/// Format an opacity as a percentage.
#[must_use]
pub fn format_opacity(opacity: f64) -> String {
    format!("{:.0}%", opacity * 100.0)
}

/// Format a point relative to the wire.
#[must_use]
pub fn format_point(x: f64, y: f64) -> String {
    format!("({x:+.1}, {y:+.1})")
}

/// Multi-line summary of a field snapshot.
#[must_use]
pub fn format_snapshot(snapshot: &FieldSnapshot, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Intensity: {}% (strength {:.2})",
        snapshot.intensity.percent(),
        snapshot.intensity.strength()
    );
    let _ = writeln!(out, "Rings: {}", snapshot.rings.len());
    for (i, ring) in snapshot.rings.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{i:<2} radius {:>6.1}  opacity {}",
            ring.radius,
            format_opacity(ring.opacity)
        );
    }
    let _ = writeln!(out, "Filings: {}", snapshot.filings.len());
    if verbose {
        for f in &snapshot.filings {
            let _ = writeln!(
                out,
                "  at {} rot {:>5.1}° len {:.1}",
                format_point(f.x, f.y),
                f.rotation,
                f.length
            );
        }
    }
    out
}

/// Multi-line listing of one question with its correct options starred.
#[must_use]
pub fn format_question(number: usize, question: &QuestionRecord, policy: MatchPolicy) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{number}. {} [current {}]",
        question.prompt,
        question.current_direction.arrow()
    );
    for (i, option) in question.options.iter().enumerate() {
        let marker = if policy.is_correct(option, question.correct_answer) {
            '*'
        } else {
            ' '
        };
        let letter = char::from(b'a' + u8::try_from(i % 26).unwrap_or(0));
        let _ = writeln!(out, "   {marker} {letter}) {option}");
    }
    out
}
