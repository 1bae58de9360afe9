//! Mail sender seam and a console renderer

use crate::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// Extra message headers, kept in name order
pub type Headers = BTreeMap<String, String>;

/// Delivers a resolved mailing
pub trait MailSender {
    /// Send one message to every address in `recipients`
    fn send(
        &mut self,
        subject: &str,
        message: &str,
        from_addr: &str,
        recipients: &[String],
        headers: Option<&Headers>,
    ) -> Result<()>;
}

/// Renders mailings as plain-text messages into a writer instead of
/// transporting them
pub struct ConsoleMailer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleMailer<W> {
    pub fn new(out: W) -> Self {
        ConsoleMailer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MailSender for ConsoleMailer<W> {
    fn send(
        &mut self,
        subject: &str,
        message: &str,
        from_addr: &str,
        recipients: &[String],
        headers: Option<&Headers>,
    ) -> Result<()> {
        writeln!(self.out, "From: {}", from_addr)?;
        writeln!(self.out, "To: {}", recipients.join(", "))?;
        for (name, value) in headers.into_iter().flatten() {
            writeln!(self.out, "{}: {}", name, value)?;
        }
        writeln!(self.out, "Subject: {}", subject)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, ".")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(recipients: &[&str], headers: Option<&Headers>) -> String {
        let mut mailer = ConsoleMailer::new(Vec::new());
        let recipients: Vec<String> = recipients.iter().map(|s| s.to_string()).collect();
        mailer
            .send("Hello", "Body text", "me@example.com", &recipients, headers)
            .unwrap();
        String::from_utf8(mailer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_without_headers() {
        let text = render(&["a@example.com", "b@example.com"], None);
        assert_eq!(
            text,
            "From: me@example.com\n\
             To: a@example.com, b@example.com\n\
             Subject: Hello\n\
             \n\
             Body text\n\
             .\n"
        );
    }

    #[test]
    fn test_render_headers_in_name_order() {
        let mut headers = Headers::new();
        headers.insert("X-Priority".to_string(), "1".to_string());
        headers.insert("Reply-To".to_string(), "desk@example.com".to_string());

        let text = render(&["a@example.com"], Some(&headers));
        let reply = text.find("Reply-To: desk@example.com").unwrap();
        let priority = text.find("X-Priority: 1").unwrap();
        let subject = text.find("Subject: Hello").unwrap();
        assert!(reply < priority && priority < subject);
    }

    #[test]
    fn test_render_empty_recipient_list() {
        let text = render(&[], None);
        assert!(text.contains("To: \n"));
    }
}
