//! Interactive mailing-list shell

use crate::application::prompt::Console;
use crate::cli::output::format_address_list;
use crate::domain::MailingList;
use crate::error::Result;
use crate::infrastructure::mailer::{Headers, MailSender};
use std::io::{BufRead, Write};

const HELP: &str = "Commands:
  add <email> <group>...   add an address to one or more groups
  list <group>...          show addresses in any of the groups
  groups <email>           show the groups of an address
  send <group>...          send a message to the groups
  help                     show this help
  quit                     leave the shell
";

/// Shell over an in-memory mailing list
pub struct MailSession<R, W, S> {
    list: MailingList,
    console: Console<R, W>,
    sender: S,
    from_addr: String,
    headers: Headers,
}

impl<R: BufRead, W: Write, S: MailSender> MailSession<R, W, S> {
    pub fn new(
        list: MailingList,
        input: R,
        output: W,
        sender: S,
        from_addr: impl Into<String>,
        headers: Headers,
    ) -> Self {
        MailSession {
            list,
            console: Console::new(input, output),
            sender,
            from_addr: from_addr.into(),
            headers,
        }
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.console.ask("mail> ")? {
            let words: Vec<&str> = line.split_whitespace().collect();
            let Some((&command, args)) = words.split_first() else {
                continue;
            };

            match command {
                "add" => self.add(args)?,
                "list" => self.list(args)?,
                "groups" => self.groups(args)?,
                "send" => {
                    if !self.send(args)? {
                        return Ok(());
                    }
                }
                "help" => self.console.print(HELP)?,
                "quit" | "exit" => return Ok(()),
                other => self.console.say(&format!("Unknown command: {}", other))?,
            }
        }
        Ok(())
    }

    /// Consume the session, returning the list, output sink and sender
    pub fn finish(self) -> (MailingList, W, S) {
        (self.list, self.console.into_output(), self.sender)
    }

    fn add(&mut self, args: &[&str]) -> Result<()> {
        let Some((&email, groups)) = args.split_first().filter(|(_, g)| !g.is_empty()) else {
            return self.console.say("Usage: add <email> <group>...");
        };
        for group in groups {
            self.list.add_to_group(email, *group);
        }
        Ok(())
    }

    fn list(&mut self, groups: &[&str]) -> Result<()> {
        if groups.is_empty() {
            return self.console.say("Usage: list <group>...");
        }
        let emails = self.list.emails_in_groups(groups);
        let listing = format_address_list(emails.iter().map(String::as_str));
        self.console.print(&listing)
    }

    fn groups(&mut self, args: &[&str]) -> Result<()> {
        let [email] = args else {
            return self.console.say("Usage: groups <email>");
        };
        let line = match self.list.groups_for(email) {
            Some(groups) => groups.into_iter().collect::<Vec<_>>().join(" "),
            None => format!("Unknown address: {}", email),
        };
        self.console.say(&line)
    }

    /// Returns false when input ended while prompting
    fn send(&mut self, groups: &[&str]) -> Result<bool> {
        if groups.is_empty() {
            self.console.say("Usage: send <group>...")?;
            return Ok(true);
        }
        let Some(subject) = self.console.ask("Subject: ")? else {
            return Ok(false);
        };
        let Some(message) = self.console.ask("Message: ")? else {
            return Ok(false);
        };

        let headers = if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        };
        let count = self.list.send_mailing(
            &mut self.sender,
            &subject,
            &message,
            &self.from_addr,
            groups,
            headers,
        )?;
        self.console.say(&format!("Sent to {} recipient(s)", count))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mailer::ConsoleMailer;

    fn run_script(script: &str, headers: Headers) -> (MailingList, String, String) {
        let mut session = MailSession::new(
            MailingList::new(),
            script.as_bytes(),
            Vec::new(),
            ConsoleMailer::new(Vec::new()),
            "club@example.com",
            headers,
        );
        session.run().unwrap();
        let (list, output, sender) = session.finish();
        (
            list,
            String::from_utf8(output).unwrap(),
            String::from_utf8(sender.into_inner()).unwrap(),
        )
    }

    #[test]
    fn test_add_and_list() {
        let (list, output, _) = run_script(
            "add a@example.com friends family\nadd b@example.com work\nlist family work\nquit\n",
            Headers::new(),
        );
        assert_eq!(list.len(), 2);
        assert!(output.contains("a@example.com\nb@example.com\n"));
    }

    #[test]
    fn test_list_unknown_group() {
        let (_, output, _) = run_script("list nobody\n", Headers::new());
        assert!(output.contains("No addresses found"));
    }

    #[test]
    fn test_groups_command() {
        let (_, output, _) = run_script(
            "add a@example.com work\nadd a@example.com friends\ngroups a@example.com\ngroups x@example.com\n",
            Headers::new(),
        );
        assert!(output.contains("friends work\n"));
        assert!(output.contains("Unknown address: x@example.com"));
    }

    #[test]
    fn test_send_renders_through_sender() {
        let mut headers = Headers::new();
        headers.insert("Reply-To".to_string(), "desk@example.com".to_string());
        let (_, output, sent) = run_script(
            "add a@example.com friends\nadd b@example.com work\nsend friends\nHi\nSee you soon\nquit\n",
            headers,
        );
        assert!(output.contains("Sent to 1 recipient(s)"));
        assert!(sent.contains("From: club@example.com"));
        assert!(sent.contains("To: a@example.com\n"));
        assert!(sent.contains("Reply-To: desk@example.com"));
        assert!(sent.contains("Subject: Hi"));
        assert!(sent.contains("See you soon"));
    }

    #[test]
    fn test_usage_and_unknown_commands() {
        let (_, output, sent) = run_script(
            "add lonely@example.com\nlist\ngroups\nsend\nfrobnicate\n\nquit\n",
            Headers::new(),
        );
        assert!(output.contains("Usage: add <email> <group>..."));
        assert!(output.contains("Usage: list <group>..."));
        assert!(output.contains("Usage: groups <email>"));
        assert!(output.contains("Usage: send <group>..."));
        assert!(output.contains("Unknown command: frobnicate"));
        assert!(sent.is_empty());
    }

    #[test]
    fn test_end_of_input_during_send() {
        let (_, output, sent) = run_script("add a@example.com g\nsend g\nSubject only", Headers::new());
        assert!(!output.contains("Sent to"));
        assert!(sent.is_empty());
    }
}
