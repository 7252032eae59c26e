//! Console rendering for the smoke check.
//!
//! Every line the program prints comes from here. The functions write into
//! any [`io::Write`] so the test suite can capture and inspect the output.

use std::io::{self, Write};

use crate::card::CardSearchResponse;
use crate::providers::{ApiReply, PokemonTcgProvider, ProviderError};

/// Search expression sent as the `q` parameter.
pub const SEARCH_QUERY: &str = "name:\"professor laventon\"";

/// Page size sent with the query.
pub const PAGE_SIZE: u32 = 10;

/// Longest body excerpt printed for a non-success reply.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Run the whole check: announce the target, send the single request,
/// report whatever came back. Never fails on the network path; the only
/// error surface left is the console writer itself.
pub fn run_smoke_check<W: Write>(provider: &PokemonTcgProvider, out: &mut W) -> io::Result<()> {
    writeln!(out, "[INFO] Test de l'API Pokemon TCG...")?;
    writeln!(out, "[INFO] URL: {}", PokemonTcgProvider::CARDS_URL)?;
    writeln!(out)?;
    writeln!(out, "[TEST 1] Recherche: {}", SEARCH_QUERY)?;

    match provider.search_cards(SEARCH_QUERY, PAGE_SIZE) {
        Ok(reply) => report_reply(&reply, out),
        Err(err) => report_failure(&err, out),
    }
}

/// Report one received reply, whatever its status.
pub fn report_reply<W: Write>(reply: &ApiReply, out: &mut W) -> io::Result<()> {
    writeln!(out, "[OK] Status Code: {}", reply.status)?;

    if reply.is_success() {
        match CardSearchResponse::from_json(&reply.body) {
            Ok(response) => report_cards(&response, out),
            Err(err) => report_failure(&ProviderError::Other(err.to_string()), out),
        }
    } else {
        writeln!(out, "[ERROR] Erreur HTTP: {}", reply.status)?;
        writeln!(
            out,
            "[ERROR] Message: {}",
            truncate_chars(&reply.body, MAX_ERROR_BODY_CHARS)
        )
    }
}

fn report_cards<W: Write>(response: &CardSearchResponse, out: &mut W) -> io::Result<()> {
    let count = response.card_count();
    writeln!(out, "[OK] Cartes trouvees: {}", count)?;

    if count == 0 {
        return writeln!(out, "[WARNING] Aucune carte trouvee");
    }

    for card in &response.data {
        writeln!(out)?;
        writeln!(out, "[CARTE] {} (#{})", card.name, card.number)?;
        writeln!(out, "  Extension: {} ({})", card.set.name, card.set.id)?;
        writeln!(out, "  Rarete: {}", card.rarity_label())?;
        writeln!(out, "  Artiste: {}", card.artist_label())?;
    }

    Ok(())
}

/// Print the message for a transport or parsing failure. Each error kind
/// gets a distinct line so the three cases can be told apart on sight.
pub fn report_failure<W: Write>(err: &ProviderError, out: &mut W) -> io::Result<()> {
    match err {
        ProviderError::Timeout => {
            writeln!(out, "[ERROR] Timeout - L'API ne repond pas (>10s)")
        }
        ProviderError::Connection(detail) => {
            writeln!(out, "[ERROR] Erreur de connexion: {}", detail)
        }
        ProviderError::Other(detail) => {
            writeln!(out, "[ERROR] Erreur inattendue: {}", detail)
        }
    }
}

/// Truncate to at most `limit` characters, never splitting a code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_is_untouched() {
        assert_eq!(truncate_chars("abc", 500), "abc");
        assert_eq!(truncate_chars("", 500), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // Multi-byte characters stay whole.
        let text = "ééééé";
        assert_eq!(truncate_chars(text, 3), "ééé");

        let long = "x".repeat(600);
        assert_eq!(truncate_chars(&long, 500).len(), 500);
    }

    #[test]
    fn test_failure_lines_are_distinct() {
        let mut timeout = Vec::new();
        report_failure(&ProviderError::Timeout, &mut timeout).unwrap();

        let mut connection = Vec::new();
        report_failure(
            &ProviderError::Connection("refused".to_string()),
            &mut connection,
        )
        .unwrap();

        let mut other = Vec::new();
        report_failure(&ProviderError::Other("bad json".to_string()), &mut other).unwrap();

        let timeout = String::from_utf8(timeout).unwrap();
        let connection = String::from_utf8(connection).unwrap();
        let other = String::from_utf8(other).unwrap();

        assert!(timeout.contains("Timeout"));
        assert!(connection.contains("Erreur de connexion: refused"));
        assert!(other.contains("Erreur inattendue: bad json"));
        assert_ne!(timeout, connection);
        assert_ne!(timeout, other);
        assert_ne!(connection, other);
    }
}
