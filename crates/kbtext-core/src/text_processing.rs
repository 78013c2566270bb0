/// Expand common typographic ligatures found in PDFs.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Concatenate page texts, terminating every page with a newline.
///
/// `["Hello", "", "World"]` becomes `"Hello\n\nWorld\n"`; no pages gives `""`.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let capacity = pages.iter().map(|p| p.as_ref().len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}
