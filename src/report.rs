//! Text rendering of call outputs.

use crate::types::CallOutput;

/// One compact JSON object per book, newline-joined.
pub fn render_output(output: &CallOutput) -> Result<String, serde_json::Error> {
    let lines = output
        .books()
        .into_iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// The question-plus-data input for a follow-up answer prompt.
pub fn answer_input(query: &str, output: &CallOutput) -> Result<String, serde_json::Error> {
    Ok(format!("Question: {}\n\nData: {}\n\n", query, render_output(output)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Book;

    #[test]
    fn renders_one_line_per_book() {
        let out = CallOutput::Many(vec![
            Book::new("a", "A", "g", "x"),
            Book::new("b", "B", "g", "y"),
        ]);
        assert_eq!(
            render_output(&out).unwrap(),
            "{\"id\":\"a\",\"name\":\"A\",\"genre\":\"g\",\"description\":\"x\"}\n\
             {\"id\":\"b\",\"name\":\"B\",\"genre\":\"g\",\"description\":\"y\"}"
        );
    }

    #[test]
    fn every_book_is_rendered() {
        let catalog = crate::catalog::Catalog::reference();
        let out = CallOutput::Many(catalog.books().to_vec());
        let text = render_output(&out).unwrap();

        assert_eq!(text.lines().count(), catalog.len());
        for (line, book) in text.lines().zip(catalog.books()) {
            assert_eq!(&serde_json::from_str::<Book>(line).unwrap(), book);
        }
    }

    #[test]
    fn missing_book_renders_empty() {
        assert_eq!(render_output(&CallOutput::One(None)).unwrap(), "");
        assert_eq!(
            answer_input("q", &CallOutput::One(None)).unwrap(),
            "Question: q\n\nData: \n\n"
        );
    }

    #[test]
    fn answer_input_embeds_query_and_data() {
        let out = CallOutput::One(Some(Book::new("a1", "T", "g", "18 million copies")));
        let input = answer_input("how widely read?", &out).unwrap();
        assert!(input.starts_with("Question: how widely read?\n\nData: {"));
        assert!(input.contains("18 million"));
        assert!(input.ends_with("\n\n"));
    }
}
