/// Derive a URL slug from a title: lowercase ASCII alphanumerics, runs of
/// anything else collapsed to a single hyphen, no leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Druk Path Trek"), "druk-path-trek");
    }

    #[test]
    fn punctuation_and_spacing_collapse() {
        assert_eq!(
            slugify("  7 Days / 6 Nights: Paro & Thimphu!  "),
            "7-days-6-nights-paro-thimphu"
        );
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(slugify("Tshechu — Thimphu Festival"), "tshechu-thimphu-festival");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slugify("•••"), "");
    }
}
