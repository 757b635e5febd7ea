use mt_core::DocumentMeta;

use crate::dates;

/// Build the final text document out of the extracted metadata and the
/// already-normalized body.
///
/// The metadata block always carries a `Data:` line, even when no date
/// header was found. The other fields only appear when they exist.
pub fn assemble_document(meta: &DocumentMeta, body: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(title) = &meta.title {
        lines.push(title.to_uppercase());
        lines.push(String::new());
    }

    let date = meta.date.as_deref().unwrap_or_default();
    lines.push(format!("Data: {}", dates::format_date(date)));
    if let Some(from) = &meta.from {
        lines.push(format!("De: {}", from));
    }
    if let Some(to) = &meta.to {
        lines.push(format!("Para: {}", to));
    }
    if let Some(subject) = &meta.subject {
        lines.push(format!("Assunto: {}", subject));
    }

    lines.push(String::new());
    lines.push("---".to_owned());
    lines.push(String::new());

    lines.push(body.to_owned());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_meta() -> DocumentMeta {
        DocumentMeta {
            title: Some("Hello".to_owned()),
            date: Some("Thu, 06 Apr 2000 09:52:53 -0300".to_owned()),
            year: Some("2000".to_owned()),
            from: Some("a@x.com".to_owned()),
            to: Some("b@y.com".to_owned()),
            subject: Some("Hi".to_owned()),
        }
    }

    #[test]
    fn lays_out_every_field_in_order() {
        let text = assemble_document(&full_meta(), "Hello world!");
        assert_eq!(
            text,
            "HELLO\n\nData: 06/04/2000 09:52\nDe: a@x.com\nPara: b@y.com\n\
             Assunto: Hi\n\n---\n\nHello world!"
        );
    }

    #[test]
    fn omits_absent_fields() {
        let meta = DocumentMeta {
            date: Some("Thu, 06 Apr 2000 09:52:53 -0300".to_owned()),
            year: Some("2000".to_owned()),
            ..Default::default()
        };
        let text = assemble_document(&meta, "Body");
        assert_eq!(text, "Data: 06/04/2000 09:52\n\n---\n\nBody");
    }

    #[test]
    fn missing_date_leaves_the_data_line_empty() {
        let meta = DocumentMeta::default();
        let text = assemble_document(&meta, "");
        assert_eq!(text, "Data: \n\n---\n\n");
    }

    #[test]
    fn unparseable_date_is_written_raw() {
        let meta = DocumentMeta {
            date: Some("sometime in spring".to_owned()),
            ..Default::default()
        };
        let text = assemble_document(&meta, "Body");
        assert!(text.starts_with("Data: sometime in spring\n"));
    }
}
