//! Anki-style CSV export
//!
//! Semicolon-delimited, always-quoted rows of front/back/level/review
//! count, importable into Anki and spreadsheet tools.

use std::io::Write;

use crate::flashcards::Card;
use crate::storage::Result;

pub fn write_csv<W: Write>(cards: &[Card], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    writer.write_record(["Front", "Back", "Level", "ReviewCount"])?;
    for card in cards {
        let review_count = card.review_count.to_string();
        writer.write_record([
            card.front.as_str(),
            card.back.as_str(),
            card.level.as_str(),
            review_count.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
