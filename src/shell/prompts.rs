use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Text field, pre-filled with whatever was entered last time.
pub fn text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Hidden field. An empty entry keeps `current`, so re-prompting after a
/// failed submit does not wipe a password the user already typed.
pub fn secret(prompt: &str, current: &str) -> Result<String> {
    let prompt = if current.is_empty() {
        prompt.to_string()
    } else {
        format!("{} (Enter to keep)", prompt)
    };
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(keep_previous(value, current))
}

fn keep_previous(entered: String, current: &str) -> String {
    if entered.is_empty() {
        current.to_string()
    } else {
        entered
    }
}

/// Menu pick. `None` when the user dismisses the menu.
pub fn choose(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let picked = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(picked)
}

pub fn print_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}
