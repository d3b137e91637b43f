use crate::domain::model::{MalformedRowPolicy, Problem};
use crate::utils::error::{QuizError, Result};
use crate::utils::validation::validate_non_empty_string;
use csv::{ReaderBuilder, StringRecord};

/// Parses headerless `question,answer` rows, keeping file order.
///
/// Stray or unterminated quotes and rows whose field count differs from the
/// first complete row are fatal. Rows missing the answer column, or with an
/// empty question, are handled according to `policy`.
pub fn parse_problems(data: &[u8], policy: MalformedRowPolicy) -> Result<Vec<Problem>> {
    check_quotes(data)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut problems = Vec::new();
    let mut fields_per_record = None;

    for row in reader.records() {
        let record = row?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // 短列交給 policy 處理，其餘列的欄位數必須一致
        if record.len() >= 2 {
            let expected = *fields_per_record.get_or_insert(record.len());
            if record.len() != expected {
                return Err(QuizError::MalformedCsvError {
                    line,
                    reason: format!("expected {} fields, found {}", expected, record.len()),
                });
            }
        }

        match problem_from_record(&record) {
            Ok(problem) => {
                tracing::debug!("Loaded problem from line {}: {:?}", line, problem.question);
                problems.push(problem);
            }
            Err(reason) => match policy {
                MalformedRowPolicy::Error => {
                    return Err(QuizError::MalformedRowError { line, reason });
                }
                MalformedRowPolicy::Skip => {
                    tracing::warn!("Skipping line {}: {}", line, reason);
                }
            },
        }
    }

    Ok(problems)
}

/// Rejects a `"` inside an unquoted field, a quoted field followed by anything
/// but a delimiter, and a quoted field still open at end of input.
fn check_quotes(data: &[u8]) -> Result<()> {
    let mut line: u64 = 1;
    let mut quote_line = 1;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];

        if in_quotes {
            match byte {
                b'"' => match data.get(i + 1) {
                    Some(b'"') => i += 1,
                    None | Some(b',') | Some(b'\n') | Some(b'\r') => in_quotes = false,
                    Some(_) => {
                        return Err(QuizError::MalformedCsvError {
                            line,
                            reason: "extraneous or missing \" in quoted field".to_string(),
                        });
                    }
                },
                b'\n' => line += 1,
                _ => {}
            }
        } else {
            match byte {
                b'"' if field_start => {
                    in_quotes = true;
                    quote_line = line;
                    field_start = false;
                }
                b'"' => {
                    return Err(QuizError::MalformedCsvError {
                        line,
                        reason: "bare \" in non-quoted field".to_string(),
                    });
                }
                b',' => field_start = true,
                b'\n' => {
                    line += 1;
                    field_start = true;
                }
                _ => field_start = false,
            }
        }

        i += 1;
    }

    if in_quotes {
        return Err(QuizError::MalformedCsvError {
            line: quote_line,
            reason: "quoted field is never closed".to_string(),
        });
    }

    Ok(())
}

fn problem_from_record(record: &StringRecord) -> std::result::Result<Problem, String> {
    if record.len() < 2 {
        return Err(format!("expected 2 fields, found {}", record.len()));
    }

    if record.len() > 2 {
        tracing::debug!("Ignoring {} extra field(s)", record.len() - 2);
    }

    let question = &record[0];
    if validate_non_empty_string("question", question).is_err() {
        return Err("question is empty".to_string());
    }

    Ok(Problem::new(question, &record[1]))
}
