/// A finished output file for one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    pub extension: &'static str,
    pub body: String,
}

impl RenderedDocument {
    pub fn new(title: &str, extension: &'static str, body: String) -> Self {
        Self { title: title.to_string(), extension, body }
    }

    /// `<title>.<extension>`, with the title taken verbatim
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.title, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_keeps_title_verbatim() {
        let doc = RenderedDocument::new("Dune (Frank Herbert)", "html", String::new());
        assert_eq!(doc.file_name(), "Dune (Frank Herbert).html");
    }
}
