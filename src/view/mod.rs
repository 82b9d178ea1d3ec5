use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use ramhorns::Template;

pub mod composer_renderer;
pub mod curated_renderer;
pub mod feed_renderer;

/// Reads `name` from the template dir when there is one, falls back to the built-in source.
pub(crate) fn load_template(template_dir: Option<&Path>, name: &str, default_src: &'static str) -> io::Result<Template<'static>> {
    let template = match template_dir.map(|dir| dir.join(name)) {
        Some(path) if path.exists() => Template::new(fs::read_to_string(&path)?),
        _ => Template::new(default_src),
    };

    template.map_err(|e| io::Error::new(ErrorKind::InvalidInput, format!("Error parsing template {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[derive(ramhorns::Content)]
    struct Hello<'a> {
        name: &'a str,
    }

    #[test]
    fn test_builtin_template() {
        let template = load_template(None, "hello.tpl", "Hello {{name}}").unwrap();
        assert_eq!(template.render(&Hello { name: "world" }), "Hello world");
    }

    #[test]
    fn test_template_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("hello.tpl")).unwrap();
        write!(file, "Hi {{{{name}}}}!").unwrap();

        let template = load_template(Some(dir.path()), "hello.tpl", "Hello {{name}}").unwrap();
        assert_eq!(template.render(&Hello { name: "there" }), "Hi there!");

        let template = load_template(Some(dir.path()), "missing.tpl", "Hello {{name}}").unwrap();
        assert_eq!(template.render(&Hello { name: "there" }), "Hello there");
    }

    #[test]
    fn test_broken_template() {
        let err = load_template(None, "broken.tpl", "{{#open}} never closed").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
