//! Stateless renderers. Each writes one screen element to a [`Console`].

use std::io;

use services::MenuView;

use crate::console::Console;
use crate::style::LearnStyle;
use crate::vm::{PageLine, ScoreBreakdownVm, ScoreRowVm};

const MIN_HEADER_WIDTH: usize = 50;
const COMPARISON_COLUMN: usize = 40;
pub const SCREEN_WIDTH: usize = 80;

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

pub fn header(out: &mut dyn Console, text: &str) -> io::Result<()> {
    let width = (width_of(text) + 4).max(MIN_HEADER_WIDTH);
    let left = (width - width_of(text)) / 2;
    let right = width - left - width_of(text);
    let bar = "═".repeat(width);

    out.write_line(&format!("╔{bar}╗").as_str().heading().to_string())?;
    out.write_line(
        &format!("║{}{text}{}║", " ".repeat(left), " ".repeat(right))
            .as_str()
            .heading()
            .to_string(),
    )?;
    out.write_line(&format!("╚{bar}╝").as_str().heading().to_string())
}

pub fn narrator(out: &mut dyn Console, message: &str) -> io::Result<()> {
    out.write_line(&format!(">> {message}").as_str().narrator().to_string())
}

pub fn error(out: &mut dyn Console, message: &str) -> io::Result<()> {
    out.write_line(&format!("[ERROR] {message}").as_str().failure().to_string())
}

pub fn success(out: &mut dyn Console, message: &str) -> io::Result<()> {
    out.write_line(&format!("[OK] {message}").as_str().success().to_string())
}

pub fn info(out: &mut dyn Console, message: &str) -> io::Result<()> {
    out.write_line(&message.info().to_string())
}

pub fn blank(out: &mut dyn Console) -> io::Result<()> {
    out.write_line("")
}

/// Right-aligned running total shown above every menu.
pub fn score_corner(out: &mut dyn Console, total: u64) -> io::Result<()> {
    let text = format!("Score: {total}");
    let indent = SCREEN_WIDTH.saturating_sub(width_of(&text) + 2);
    out.write_line(&format!("{}{}", " ".repeat(indent), text.as_str().narrator()))
}

pub fn menu(out: &mut dyn Console, view: &MenuView) -> io::Result<()> {
    header(out, &view.title)?;
    if !view.path.is_empty() {
        out.write_line(&format!("  {}", view.path.as_str().muted()))?;
    }
    blank(out)?;
    for (i, label) in view.options.iter().enumerate() {
        out.write_line(&format!("  [{}] {}", i + 1, label.as_str().option()))?;
    }
    blank(out)?;
    out.write_line(&"─".repeat(29).as_str().muted().to_string())?;
    out.write_line(&format!("  [0] {}", view.sentinel).as_str().sentinel().to_string())?;
    blank(out)
}

/// Titled box around multi-line content. Blank lines are dropped.
pub fn boxed(out: &mut dyn Console, title: &str, content: &str) -> io::Result<()> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let inner = lines
        .iter()
        .map(|l| width_of(l))
        .chain(std::iter::once(width_of(title)))
        .max()
        .unwrap_or(0)
        + 4;

    out.write_line(&format!("╔{}╗", "═".repeat(inner)).as_str().narrator().to_string())?;
    out.write_line(&format!("║ {}║", pad(title, inner - 1)).as_str().narrator().to_string())?;
    out.write_line(&format!("╟{}╢", "─".repeat(inner)).as_str().narrator().to_string())?;
    for line in lines {
        out.write_line(&format!(
            "{}{}{}",
            "║ ".narrator(),
            pad(line, inner - 2).as_str().body(),
            "║".narrator()
        ))?;
    }
    out.write_line(&format!("╚{}╝", "═".repeat(inner)).as_str().narrator().to_string())
}

/// Two columns: what the player wrote next to the reference answer.
pub fn comparison(out: &mut dyn Console, left: (&str, &str), right: (&str, &str)) -> io::Result<()> {
    let (left_title, left_code) = left;
    let (right_title, right_code) = right;
    let left_lines: Vec<&str> = left_code.lines().filter(|l| !l.is_empty()).collect();
    let right_lines: Vec<&str> = right_code.lines().filter(|l| !l.is_empty()).collect();

    out.write_line(
        &format!(
            "{}═ {right_title}",
            pad(&format!("═ {left_title}"), COMPARISON_COLUMN)
        )
        .as_str()
        .muted()
        .to_string(),
    )?;
    for i in 0..left_lines.len().max(right_lines.len()) {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        out.write_line(&format!(
            "{}{}",
            pad(l, COMPARISON_COLUMN).as_str().failure(),
            r.success()
        ))?;
    }
    Ok(())
}

pub fn page(out: &mut dyn Console, lines: &[PageLine]) -> io::Result<()> {
    for line in lines {
        let rendered = match line {
            PageLine::Heading(text) => format!("► {text}").as_str().heading().to_string(),
            PageLine::CodeStart => "┌─ Code ─────────────────────".muted().to_string(),
            PageLine::CodeEnd => "└────────────────────────────".muted().to_string(),
            PageLine::Code(text) => format!("  {text}").as_str().code().to_string(),
            PageLine::Bullet(text) => format!("  {text}").as_str().body().to_string(),
            PageLine::Text(text) => text.as_str().body().to_string(),
        };
        out.write_line(&rendered)?;
    }
    Ok(())
}

pub fn scoreboard(out: &mut dyn Console, title: &str, rows: &[ScoreRowVm]) -> io::Result<()> {
    header(out, title)?;
    blank(out)?;
    if rows.is_empty() {
        out.write_line(&"  No scores recorded yet.".muted().to_string())?;
        return blank(out);
    }

    out.write_line(
        &format!("  {:<6}{:<20}{:<10}{:<20}", "Rank", "Player", "Score", "Date")
            .as_str()
            .info()
            .to_string(),
    )?;
    out.write_line(&format!("  {}", "-".repeat(54)).as_str().muted().to_string())?;
    for row in rows {
        let line = format!(
            "  {:<6}{:<20}{:<10}{}",
            row.rank, row.player, row.total, row.date
        );
        let styled = match row.rank.as_str() {
            "1st" | "2nd" | "3rd" => line.as_str().narrator(),
            _ => line.as_str().body(),
        };
        out.write_line(&styled.to_string())?;
    }
    blank(out)
}

pub fn session_summary(out: &mut dyn Console, summary: &ScoreBreakdownVm) -> io::Result<()> {
    header(out, "Session Summary")?;
    blank(out)?;
    out.write_line(&format!("  Player: {}", summary.player))?;
    blank(out)?;
    out.write_line(&"  Score Breakdown:".info().to_string())?;
    if summary.features.is_empty() {
        out.write_line("    No scores recorded this session.")?;
    } else {
        for (feature, points) in &summary.features {
            out.write_line(&format!("    {feature}: {points}"))?;
        }
    }
    blank(out)?;
    out.write_line(
        &format!("  Total Score: {}", summary.total)
            .as_str()
            .narrator()
            .to_string(),
    )?;
    blank(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::style::set_color_enabled;

    fn plain() -> ScriptedConsole {
        set_color_enabled(false);
        ScriptedConsole::default()
    }

    #[test]
    fn menu_lists_options_then_sentinel() {
        let mut out = plain();
        let view = MenuView {
            title: "Lexicon".into(),
            path: "Lexicon".into(),
            options: vec!["Git - Version control".into()],
            sentinel: "Back",
        };
        menu(&mut out, &view).unwrap();

        let text = out.output();
        let option = text.find("[1] Git - Version control").unwrap();
        let back = text.find("[0] Back").unwrap();
        assert!(option < back);
    }

    #[test]
    fn header_is_at_least_fifty_wide() {
        let mut out = plain();
        header(&mut out, "Hi").unwrap();
        let first = out.output().lines().next().unwrap();
        assert_eq!(first.chars().count(), MIN_HEADER_WIDTH + 2);
    }

    #[test]
    fn comparison_pads_shorter_side() {
        let mut out = plain();
        comparison(&mut out, ("Your Answer", "a\nb"), ("Correct Answer", "c")).unwrap();
        let lines: Vec<&str> = out.output().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('a'));
        assert!(lines[1].ends_with('c'));
        assert_eq!(lines[2].trim(), "b");
    }

    #[test]
    fn empty_scoreboard_says_so() {
        let mut out = plain();
        scoreboard(&mut out, "Leaderboard", &[]).unwrap();
        assert!(out.output().contains("No scores recorded yet."));
    }
}
