use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// One display line of a lexicon page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageLine {
    /// Heading text without its hashes.
    Heading(String),
    CodeStart,
    CodeEnd,
    Code(String),
    Bullet(String),
    Text(String),
}

/// Block the pending text belongs to.
enum Pending {
    Text,
    Heading,
    Bullet(String),
}

fn flush(lines: &mut Vec<PageLine>, text: &mut String, pending: &mut Pending) {
    let content = std::mem::take(text);
    let content = content.trim();
    if content.is_empty() {
        return;
    }
    lines.push(match std::mem::replace(pending, Pending::Text) {
        Pending::Text => PageLine::Text(content.to_owned()),
        Pending::Heading => PageLine::Heading(content.to_owned()),
        Pending::Bullet(marker) => PageLine::Bullet(format!("{marker} {content}")),
    });
}

/// Flatten a reference page into display lines: headings, fenced code,
/// list items and plain paragraph lines. Code keeps its spacing; an
/// unterminated fence runs to the end of the page.
#[must_use]
pub fn parse_page(content: &str) -> Vec<PageLine> {
    let mut lines = Vec::new();
    let mut text = String::new();
    let mut pending = Pending::Text;
    let mut code: Option<String> = None;
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut text, &mut pending);
                code = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(body) = code.take() {
                    lines.push(PageLine::CodeStart);
                    lines.extend(body.lines().map(|line| PageLine::Code(line.to_owned())));
                    lines.push(PageLine::CodeEnd);
                }
            }
            Event::Text(chunk) | Event::Code(chunk) | Event::InlineHtml(chunk) => {
                match code.as_mut() {
                    Some(body) => body.push_str(&chunk),
                    None => text.push_str(&chunk),
                }
            }
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut lines, &mut text, &mut pending);
                pending = Pending::Heading;
            }
            Event::Start(Tag::List(first)) => {
                flush(&mut lines, &mut text, &mut pending);
                lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut text, &mut pending);
                let marker = match lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{number}.");
                        *number += 1;
                        marker
                    }
                    _ => "-".to_owned(),
                };
                pending = Pending::Bullet(marker);
            }
            Event::SoftBreak | Event::HardBreak => {
                if matches!(pending, Pending::Text) {
                    flush(&mut lines, &mut text, &mut pending);
                } else {
                    text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::Item) => {
                flush(&mut lines, &mut text, &mut pending);
            }
            _ => {}
        }
    }
    flush(&mut lines, &mut text, &mut pending);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_blocks() {
        let page = "## Branches\nIntro\n```\ngit branch -d <name>   # delete\n## not a heading\n```\n- tip";
        assert_eq!(
            parse_page(page),
            vec![
                PageLine::Heading("Branches".into()),
                PageLine::Text("Intro".into()),
                PageLine::CodeStart,
                PageLine::Code("git branch -d <name>   # delete".into()),
                PageLine::Code("## not a heading".into()),
                PageLine::CodeEnd,
                PageLine::Bullet("- tip".into()),
            ]
        );
    }

    #[test]
    fn unterminated_fence_is_closed() {
        let lines = parse_page("```\nls");
        assert_eq!(lines.last(), Some(&PageLine::CodeEnd));
    }

    #[test]
    fn lists_keep_their_markers() {
        let page = "Steps:\n\n1. Check the branch\n2. Back up\n\n- `git stash` first\n- then switch to <branch>\n";
        assert_eq!(
            parse_page(page),
            vec![
                PageLine::Text("Steps:".into()),
                PageLine::Bullet("1. Check the branch".into()),
                PageLine::Bullet("2. Back up".into()),
                PageLine::Bullet("- git stash first".into()),
                PageLine::Bullet("- then switch to <branch>".into()),
            ]
        );
    }

    #[test]
    fn paragraph_lines_stay_separate() {
        assert_eq!(
            parse_page("first line\nsecond line"),
            vec![
                PageLine::Text("first line".into()),
                PageLine::Text("second line".into()),
            ]
        );
    }
}
