use log::debug;
use std::io::{Read, Write};

use crate::error::Result;
use crate::quiz::question::{Question, DELIMITER};


/// Writes one `word|meaning` line per question, in order.
///
/// Fields are not escaped, so a question holding the delimiter or a line
/// break is refused instead of being written.
pub fn encode<W: Write>(questions: &[Question], writer: W) -> Result<()> {
    for question in questions {
        question.validate()?;
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for question in questions {
        csv_writer.serialize(question)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads questions back. Lines that do not hold exactly two fields, or
/// whose fields are not a valid question, are skipped.
pub fn decode<R: Read>(reader: R) -> Result<Vec<Question>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping unreadable quiz line: {}", e);
                continue;
            }
        };

        if record.len() != 2 {
            debug!("Skipping quiz line with {} fields", record.len());
            continue;
        }

        match record.deserialize::<Question>(None) {
            Ok(question) if question.validate().is_ok() => questions.push(question),
            _ => debug!("Skipping invalid quiz line: {:?}", record),
        }
    }

    Ok(questions)
}
