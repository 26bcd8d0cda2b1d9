//! Interactive shell for rolodex.
//!
//! Exposes the session's surface as a line-oriented REPL: four commands fill
//! the shared form fields, `save` submits it, and `change`/`delete` act on
//! stored contacts by email. The prompt shows which contact is being edited.

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};

use crate::error::Result;
use crate::session::{EditMode, Session, SubmitOutcome};

/// Prompt rendered at the start of every shell line.
///
/// Rebuilt each iteration so it tracks the session's edit mode.
struct ShellPrompt {
    left: String,
}

impl ShellPrompt {
    fn new(stem: &str, mode: &EditMode) -> Self {
        let left = match mode {
            EditMode::Idle => format!("{stem}> "),
            EditMode::Editing(email) => format!("{stem} (editing {email})> "),
        };
        Self { left }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.left)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        Cow::Borrowed("")
    }
}

const HELP: &str = "\
Commands:
  list                 show all contacts
  name <value>         set the name field
  surname <value>      set the surname field
  phone <value>        set the phone field
  email <value>        set the email field
  form                 show the form fields and mode
  save                 save the form (create or update)
  change <email>       load a contact into the form for editing
  delete <email>       delete a contact
  clear                delete every contact
  help                 show this help
  exit                 leave the shell";

/// The interactive shell.
#[derive(Debug)]
pub struct Shell {
    session: Session,
    prompt_stem: String,
}

impl Shell {
    /// Build a shell over a session.
    #[must_use]
    pub fn new(session: Session, prompt_stem: impl Into<String>) -> Self {
        Self {
            session,
            prompt_stem: prompt_stem.into(),
        }
    }

    /// Run the read-eval loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage write fails mid-session; terminal read
    /// failures are reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        let mut reader = Reedline::create();

        println!("rolodex interactive shell. Type 'help' for commands, 'exit' to quit.");

        loop {
            let prompt = ShellPrompt::new(&self.prompt_stem, self.session.mode());
            match reader.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if !self.dispatch(line)? {
                        break;
                    }
                }
                Ok(Signal::CtrlC | Signal::CtrlD) => {
                    println!();
                    break;
                }
                Err(err) => {
                    eprintln!("input error: {err}");
                }
            }
        }
        Ok(())
    }

    /// Execute one shell line. Returns `false` when the shell should exit.
    fn dispatch(&mut self, line: &str) -> Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "exit" | "quit" => return Ok(false),
            "help" => println!("{HELP}"),
            "list" => {
                if self.session.cards().is_empty() {
                    println!("(no contacts)");
                } else {
                    print!("{}", self.session.cards());
                }
            }
            "name" => self.session.form_mut().name = rest.to_string(),
            "surname" => self.session.form_mut().second_name = rest.to_string(),
            "phone" => self.session.form_mut().phone = rest.to_string(),
            "email" => self.session.form_mut().email = rest.to_string(),
            "form" => {
                let form = self.session.form();
                match self.session.mode() {
                    EditMode::Idle => println!("mode: new contact"),
                    EditMode::Editing(email) => println!("mode: editing {email}"),
                }
                println!("  name:    {}", form.name);
                println!("  surname: {}", form.second_name);
                println!("  phone:   {}", form.phone);
                println!("  email:   {}", form.email);
            }
            "save" => {
                let email = self.session.form().email.clone();
                match self.session.submit()? {
                    SubmitOutcome::Rejected => {
                        println!("nothing saved: every field is required");
                    }
                    SubmitOutcome::Created => println!("added {email}"),
                    SubmitOutcome::Updated => println!("updated {email}"),
                }
            }
            "change" => {
                if rest.is_empty() {
                    println!("usage: change <email>");
                } else if self.session.begin_edit(rest) {
                    println!("editing {rest}; adjust fields, then 'save'");
                } else {
                    println!("no contact stored under '{rest}'");
                }
            }
            "delete" => {
                if rest.is_empty() {
                    println!("usage: delete <email>");
                } else if self.session.delete(rest)? {
                    println!("deleted {rest}");
                } else {
                    println!("no contact stored under '{rest}'");
                }
            }
            "clear" => {
                self.session.clear()?;
                println!("all contacts deleted");
            }
            _ => println!("unknown command '{command}' (try 'help')"),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::storage::Storage;

    fn empty_shell() -> Shell {
        let storage = Storage::open_in_memory().unwrap();
        let session = Session::new(Directory::load(storage).unwrap());
        Shell::new(session, "rolodex")
    }

    fn run_lines(shell: &mut Shell, lines: &[&str]) {
        for line in lines {
            assert!(shell.dispatch(line).unwrap(), "'{line}' ended the shell");
        }
    }

    #[test]
    fn test_exit_ends_the_loop() {
        let mut shell = empty_shell();
        assert!(!shell.dispatch("exit").unwrap());
        assert!(!shell.dispatch("quit").unwrap());
    }

    #[test]
    fn test_unknown_command_keeps_running() {
        let mut shell = empty_shell();
        assert!(shell.dispatch("frobnicate").unwrap());
    }

    #[test]
    fn test_fill_and_save_creates_contact() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &[
                "name Ann",
                "surname Smith",
                "phone 555-0100",
                "email ann@example.com",
                "save",
            ],
        );

        assert_eq!(shell.session.directory().len(), 1);
        assert!(shell.session.directory().contains("ann@example.com"));
        // The form was reset by the save.
        assert!(shell.session.form().name.is_empty());
    }

    #[test]
    fn test_field_values_may_contain_spaces() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &[
                "name Anna Maria",
                "surname de la Cruz",
                "phone 555 01 00",
                "email anna@example.com",
                "save",
            ],
        );

        let stored = shell.session.directory().get("anna@example.com").unwrap();
        assert_eq!(stored.name, "Anna Maria");
        assert_eq!(stored.second_name, "de la Cruz");
        assert_eq!(stored.phone, "555 01 00");
    }

    #[test]
    fn test_save_with_missing_field_stores_nothing() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &["name Ann", "surname Smith", "email ann@example.com", "save"],
        );

        assert!(shell.session.directory().is_empty());
        assert!(shell.session.form().name.is_empty());
    }

    #[test]
    fn test_change_and_save_updates_contact() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &[
                "name Ann",
                "surname Smith",
                "phone 555-0100",
                "email ann@example.com",
                "save",
                "change ann@example.com",
                "phone 555-9999",
                "save",
            ],
        );

        assert_eq!(shell.session.directory().len(), 1);
        assert_eq!(
            shell.session.directory().get("ann@example.com").unwrap().phone,
            "555-9999"
        );
        assert_eq!(shell.session.mode(), &EditMode::Idle);
    }

    #[test]
    fn test_change_unknown_email_leaves_mode_idle() {
        let mut shell = empty_shell();
        run_lines(&mut shell, &["change nobody@example.com"]);
        assert_eq!(shell.session.mode(), &EditMode::Idle);
    }

    #[test]
    fn test_delete_removes_contact() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &[
                "name Ann",
                "surname Smith",
                "phone 555-0100",
                "email ann@example.com",
                "save",
                "delete ann@example.com",
            ],
        );

        assert!(shell.session.directory().is_empty());
        assert!(shell.session.cards().is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut shell = empty_shell();
        run_lines(
            &mut shell,
            &[
                "name Ann",
                "surname Smith",
                "phone 555-0100",
                "email ann@example.com",
                "save",
                "clear",
            ],
        );

        assert!(shell.session.directory().is_empty());
        assert!(shell.session.cards().is_empty());
    }

    #[test]
    fn test_prompt_reflects_edit_mode() {
        let idle = ShellPrompt::new("rolodex", &EditMode::Idle);
        assert_eq!(idle.render_prompt_left(), "rolodex> ");

        let editing = ShellPrompt::new(
            "rolodex",
            &EditMode::Editing("ann@example.com".to_string()),
        );
        assert!(editing
            .render_prompt_left()
            .contains("editing ann@example.com"));
    }
}
