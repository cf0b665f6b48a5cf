use serde::Serialize;

/// A drafted email carried in an `email_report` fence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailReport {
    pub subject: Option<String>,
    /// The first payload line as written, kept when it carries the subject.
    pub subject_line: Option<String>,
    /// Plain text, shown preformatted. No markdown is interpreted.
    pub body: String,
}

const SUBJECT_PREFIX: &str = "subject:";

/// Splits a leading `Subject:` line (any case) off the payload.
pub fn parse(lines: &[String]) -> EmailReport {
    let subject = lines.first().and_then(|first| {
        let head = first.trim_start();
        head.get(..SUBJECT_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(SUBJECT_PREFIX))
            .map(|_| (head[SUBJECT_PREFIX.len()..].trim().to_string(), first.clone()))
    });
    match subject {
        Some((subject, subject_line)) => EmailReport {
            subject: Some(subject),
            subject_line: Some(subject_line),
            body: lines[1..].join("\n"),
        },
        None => EmailReport {
            subject: None,
            subject_line: None,
            body: lines.join("\n"),
        },
    }
}

impl EmailReport {
    /// The payload as it appeared in the fence, subject line included.
    pub fn to_plain_text(&self) -> String {
        match (&self.subject_line, &self.subject) {
            (Some(line), _) => format!("{line}\n{}", self.body),
            (None, Some(subject)) => format!("Subject: {subject}\n{}", self.body),
            (None, None) => self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn extracts_subject() {
        let report = parse(&lines("SUBJECT:  Weekly recap \nHi team,\n\n**Spend** is up."));
        assert_eq!(report.subject.as_deref(), Some("Weekly recap"));
        assert_eq!(report.subject_line.as_deref(), Some("SUBJECT:  Weekly recap "));
        assert_eq!(report.body, "Hi team,\n\n**Spend** is up.");
    }

    #[test]
    fn no_subject_keeps_all_lines() {
        let report = parse(&lines("Hi team,\nSubject: not first"));
        assert_eq!(report.subject, None);
        assert_eq!(report.body, "Hi team,\nSubject: not first");
    }

    #[test]
    fn empty_payload() {
        let report = parse(&[]);
        assert_eq!(report.subject, None);
        assert_eq!(report.body, "");
    }

    #[test]
    fn multibyte_first_line_is_not_a_subject() {
        let report = parse(&lines("Résumé of the week"));
        assert_eq!(report.subject, None);
    }

    #[test]
    fn plain_text_restores_subject_line() {
        let report = parse(&lines("Subject: Recap\nBody"));
        assert_eq!(report.to_plain_text(), "Subject: Recap\nBody");
    }

    #[test]
    fn plain_text_keeps_subject_line_verbatim() {
        let report = parse(&lines("  subject:Recap  \nBody"));
        assert_eq!(report.subject.as_deref(), Some("Recap"));
        assert_eq!(report.to_plain_text(), "  subject:Recap  \nBody");
    }
}
