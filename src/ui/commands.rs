use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

/// Stand-in capture used by a bare `:attach`, shaped like the data URIs
/// the capture app stores.
const SAMPLE_RECEIPT: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAUA";

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Spendview", cmd_quit, r);
    register_command!("quit", "Quit Spendview", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("p", "Preview the attached receipt", cmd_preview, r);
    register_command!("preview", "Preview the attached receipt", cmd_preview, r);
    register_command!(
        "attach",
        "Attach a receipt image (e.g. :attach receipt.png; no args for a sample)",
        cmd_attach,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_preview(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_preview = true;
    if app.receipt_image.is_empty() {
        app.set_status("No receipt attached");
    }
    Ok(())
}

fn cmd_attach(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.receipt_image = SAMPLE_RECEIPT.to_string();
        app.set_status("Attached sample receipt (p to preview)");
    } else {
        app.receipt_image = args.to_string();
        app.set_status(format!("Attached receipt: {args}"));
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::sample::sample_budgets;

    #[test]
    fn test_attach_and_preview() {
        let mut app = App::new(sample_budgets());
        handle_command("attach receipt-042.png", &mut app).unwrap();
        assert_eq!(app.receipt_image, "receipt-042.png");
        handle_command("preview", &mut app).unwrap();
        assert!(app.show_preview);
    }

    #[test]
    fn test_attach_without_args_uses_sample() {
        let mut app = App::new(sample_budgets());
        handle_command("attach", &mut app).unwrap();
        assert!(app.receipt_image.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_screen_switching() {
        let mut app = App::new(sample_budgets());
        handle_command("budgets", &mut app).unwrap();
        assert_eq!(app.screen, Screen::Budgets);
        handle_command("o", &mut app).unwrap();
        assert_eq!(app.screen, Screen::Overview);
    }

    #[test]
    fn test_unknown_command_suggests_closest() {
        let mut app = App::new(sample_budgets());
        handle_command("previw", &mut app).unwrap();
        assert!(app.status_message.contains("Did you mean :preview?"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(sample_budgets());
        handle_command("q", &mut app).unwrap();
        assert!(!app.running);
    }
}
