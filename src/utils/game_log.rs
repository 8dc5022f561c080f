//! Text log export for finished matches.
//!
//! Serializes a match to a PGN-style header block plus a numbered move
//! list. The movetext uses plain square-name pairs (`E2E4`) since full
//! algebraic notation is outside this engine's surface.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::utils::match_harness::{MatchOutcome, MatchResult};

/// Render a match as header tags plus numbered movetext.
pub fn write_game_log(result: &MatchResult) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Extinction Chess Match".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Utc::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Light".to_owned(), "Light".to_owned());
    headers.insert("Dark".to_owned(), "Dark".to_owned());
    headers.insert(
        "Result".to_owned(),
        result_tag(result.outcome).to_owned(),
    );

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let mut movetext_parts = Vec::with_capacity(result.played_moves.len() + 1);
    for (ply, name_pair) in result.played_moves.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, name_pair));
        } else {
            movetext_parts.push(name_pair.clone());
        }
    }
    movetext_parts.push(result_tag(result.outcome).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn result_tag(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::LightWin => "1-0",
        MatchOutcome::DarkWin => "0-1",
        MatchOutcome::NoLegalMoves | MatchOutcome::MaxPliesReached => "*",
    }
}
