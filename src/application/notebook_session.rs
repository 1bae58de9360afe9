//! Interactive notebook menu

use crate::application::prompt::Console;
use crate::cli::output::format_note_list;
use crate::domain::{NoteId, Notebook};
use crate::error::{MemomailError, Result};
use log::debug;
use std::io::{BufRead, Write};

const MENU: &str = "
Notebook Menu

1. Show all Notes
2. Search Notes
3. Add Note
4. Modify Note
5. Quit
";

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Menu-driven session over an in-memory notebook
pub struct NotebookSession<R, W> {
    notebook: Notebook,
    console: Console<R, W>,
    date_format: String,
}

impl<R: BufRead, W: Write> NotebookSession<R, W> {
    pub fn new(notebook: Notebook, input: R, output: W, date_format: impl Into<String>) -> Self {
        NotebookSession {
            notebook,
            console: Console::new(input, output),
            date_format: date_format.into(),
        }
    }

    /// Run the menu until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.print(MENU)?;
            let Some(choice) = self.console.ask("Enter an option: ")? else {
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.show_notes()?,
                "2" => self.search_notes()?,
                "3" => self.add_note()?,
                "4" => self.modify_note()?,
                "5" => {
                    self.console.say("Thank you for using your notebook today.")?;
                    Flow::Stop
                }
                other => {
                    self.console.say(&format!("{} is not a valid choice", other))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Consume the session, returning the notebook and the output sink
    pub fn finish(self) -> (Notebook, W) {
        (self.notebook, self.console.into_output())
    }

    fn show_notes(&mut self) -> Result<Flow> {
        let notes: Vec<_> = self.notebook.notes().iter().collect();
        let listing = format_note_list(&notes, &self.date_format);
        self.console.print(&listing)?;
        Ok(Flow::Continue)
    }

    fn search_notes(&mut self) -> Result<Flow> {
        let Some(filter) = self.console.ask("Search for: ")? else {
            return Ok(Flow::Stop);
        };
        let notes = self.notebook.search(&filter);
        debug!("search '{}' matched {} note(s)", filter, notes.len());
        let listing = format_note_list(&notes, &self.date_format);
        self.console.print(&listing)?;
        Ok(Flow::Continue)
    }

    fn add_note(&mut self) -> Result<Flow> {
        let Some(memo) = self.console.ask("Enter a memo: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(tags) = self.console.ask("Enter tags: ")? else {
            return Ok(Flow::Stop);
        };
        self.notebook.new_note(memo, tags);
        self.console.say("Your note has been added.")?;
        Ok(Flow::Continue)
    }

    fn modify_note(&mut self) -> Result<Flow> {
        let Some(raw_id) = self.console.ask("Enter a note id: ")? else {
            return Ok(Flow::Stop);
        };

        let id = match raw_id.parse::<NoteId>() {
            Ok(id) => id,
            Err(MemomailError::InvalidNoteId(input)) => {
                self.console.say(&format!("Invalid note id: {}", input))?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        if self.notebook.get(id).is_none() {
            self.console.say(&format!("Note {} not found", id))?;
            return Ok(Flow::Continue);
        }

        let Some(memo) = self.console.ask("Enter a memo: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(tags) = self.console.ask("Enter tags: ")? else {
            return Ok(Flow::Stop);
        };

        if !memo.is_empty() {
            self.notebook.modify_memo(id, memo);
        }
        if !tags.is_empty() {
            self.notebook.modify_tags(id, tags);
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Notebook, String) {
        let mut session = NotebookSession::new(Notebook::new(), script.as_bytes(), Vec::new(), "%d-%m-%Y");
        session.run().unwrap();
        let (notebook, output) = session.finish();
        (notebook, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_and_show() {
        let (notebook, output) = run_script("3\neat bread\nfood\n1\n5\n");
        assert_eq!(notebook.len(), 1);
        assert!(output.contains("Your note has been added."));
        assert!(output.contains("1: food"));
        assert!(output.contains("eat bread"));
        assert!(output.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn test_show_empty_notebook() {
        let (_, output) = run_script("1\n5\n");
        assert!(output.contains("No notes found"));
    }

    #[test]
    fn test_search_filters_notes() {
        let (_, output) = run_script("3\neat bread\nfood\n3\nclean house\nchore\n2\nfood\n5\n");
        let after_search = output.rsplit("Search for: ").next().unwrap();
        assert!(after_search.contains("eat bread"));
        assert!(!after_search.contains("clean house"));
    }

    #[test]
    fn test_modify_memo_and_tags() {
        let (notebook, _) = run_script("3\nold memo\nold\n4\n1\nnew memo\nnew tags\n5\n");
        let note = &notebook.notes()[0];
        assert_eq!(note.memo, "new memo");
        assert_eq!(note.tags, "new tags");
    }

    #[test]
    fn test_modify_blank_answers_keep_fields() {
        let (notebook, _) = run_script("3\nkeep memo\nkeep tags\n4\n1\n\nfresh\n5\n");
        let note = &notebook.notes()[0];
        assert_eq!(note.memo, "keep memo");
        assert_eq!(note.tags, "fresh");
    }

    #[test]
    fn test_modify_unknown_and_invalid_ids() {
        let (_, output) = run_script("4\n7\n4\nseven\n5\n");
        assert!(output.contains("Note 7 not found"));
        assert!(output.contains("Invalid note id: seven"));
    }

    #[test]
    fn test_modify_rejects_non_canonical_ids() {
        let (notebook, output) = run_script("3
original
t
4
+1
4
01
5
");
        assert!(output.contains("Invalid note id: +1"));
        assert!(output.contains("Invalid note id: 01"));
        assert_eq!(notebook.notes()[0].memo, "original");
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let (_, output) = run_script("9\n5\n");
        assert!(output.contains("9 is not a valid choice"));
        assert!(output.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn test_end_of_input_stops_quietly() {
        let (notebook, output) = run_script("3\nhalf");
        assert_eq!(notebook.len(), 0);
        assert!(!output.contains("Thank you"));
    }
}
