//! Read-only text listing.

use std::path::Path;

use crate::error::Result;
use crate::model::NumberedText;
use crate::parser::{parse_triple, read_data_lines};

/// Load every text with its translation, numbered from 1 in file order.
///
/// Lines use the same `text;translation;source` layout as terms and must
/// split into exactly three fields.
pub fn load_texts(path: &Path) -> Result<Vec<NumberedText>> {
    read_data_lines(path)?
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let [text, translation, _source] = parse_triple(path, line.number, &line.text)?;
            Ok(NumberedText {
                index: i + 1,
                text: text.to_string(),
                translation: translation.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn loads_texts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("texts.csv");
        std::fs::write(
            &path,
            "text;translation;source\nGood morning;Доброе утро;db\nThank you;Спасибо;db",
        )
        .unwrap();

        let texts = load_texts(&path).unwrap();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].index, 1);
        assert_eq!(texts[0].text, "Good morning");
        assert_eq!(texts[1].translation, "Спасибо");
    }

    #[test]
    fn malformed_text_line_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("texts.csv");
        std::fs::write(&path, "text;translation;source\nonly;two\n").unwrap();
        assert!(matches!(
            load_texts(&path).unwrap_err(),
            StoreError::MalformedRecord { found: 2, .. }
        ));
    }
}
